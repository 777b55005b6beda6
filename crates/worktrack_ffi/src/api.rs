//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single application context behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported in response envelopes (`ok=false` + message).
//! - Dates cross the boundary as `YYYY-MM-DD`, times as `HH:MM`.

use chrono::{Local, NaiveDate, NaiveTime};
use log::warn;
use std::sync::Mutex;
use uuid::Uuid;
use worktrack_core::policy::route::{admin_page_title, navigation};
use worktrack_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_from_config, ping as ping_inner, route_access, ActivityType, AppContext,
    AppraisalSubmission, AppraisalTask, CategorySummary, CoreConfig, DaySummary, EntrySpan,
    NewEntryRequest, NewTaskRequest, Period, Preferences, Route, RouteAccess, SavePeriodRequest,
    SqliteLocalStore, SubmissionFilter, TaskCategory, TaskFilter, TimeEntry, User,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

static APP_CONTEXT: Mutex<Option<AppContext<SqliteLocalStore>>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Human-readable message for UI toasts.
    pub message: String,
}

impl ActionResponse {
    fn from_result(result: Result<String, String>) -> Self {
        match result {
            Ok(message) => Self { ok: true, message },
            Err(message) => Self { ok: false, message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role tag (`staff|hod|principal|admin`).
    pub role: String,
    pub role_label: String,
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub ok: bool,
    pub message: String,
    pub user: Option<UserItem>,
}

/// Signs in with email and password.
///
/// # FFI contract
/// - Blocks for the configured simulated latency.
/// - On failure `message` is the login form error text.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(email: String, password: String) -> AuthResponse {
    let result = with_context(|context| {
        context
            .login(&email, &password)
            .map(|user| to_user_item(&user))
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(user) => AuthResponse {
            ok: true,
            message: format!("Welcome, {}", user.name),
            user: Some(user),
        },
        Err(message) => AuthResponse {
            ok: false,
            message,
            user: None,
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn auth_logout() -> ActionResponse {
    ActionResponse::from_result(with_context(|context| {
        context
            .logout()
            .map(|()| "Signed out.".to_string())
            .map_err(|err| err.to_string())
    }))
}

/// Current session; `ok=false` with `user=None` when logged out.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_current_user() -> AuthResponse {
    match with_context(|context| Ok(context.current_user().map(to_user_item))) {
        Ok(Some(user)) => AuthResponse {
            ok: true,
            message: String::new(),
            user: Some(user),
        },
        Ok(None) => AuthResponse {
            ok: false,
            message: "Not signed in.".to_string(),
            user: None,
        },
        Err(message) => AuthResponse {
            ok: false,
            message,
            user: None,
        },
    }
}

/// Directory entries visible to the signed-in user.
#[flutter_rust_bridge::frb(sync)]
pub fn users_visible() -> Vec<UserItem> {
    with_context(|context| {
        Ok(context
            .visible_users()
            .into_iter()
            .map(to_user_item)
            .collect())
    })
    .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    pub allowed: bool,
    /// Canonical path to navigate to instead, when not allowed.
    pub redirect_to: Option<String>,
    pub title: String,
    /// Sidebar paths for the signed-in user.
    pub navigation: Vec<String>,
}

/// Route gate for the shell router.
#[flutter_rust_bridge::frb(sync)]
pub fn route_check(path: String) -> RouteResponse {
    let route = Route::parse(&path);
    let result = with_context(|context| {
        let user = context.current_user();
        let title = match (route, user) {
            (Route::Admin, Some(user)) => admin_page_title(user.role).unwrap_or(route.label()),
            _ => route.label(),
        };
        let navigation = user
            .map(|user| {
                navigation(user)
                    .into_iter()
                    .map(|item| item.path().to_string())
                    .collect()
            })
            .unwrap_or_default();
        Ok(RouteResponse {
            allowed: false,
            redirect_to: None,
            title: title.to_string(),
            navigation,
        }
        .with_access(route_access(user, route)))
    });
    result.unwrap_or_else(|_| RouteResponse {
        allowed: false,
        redirect_to: Some(Route::Login.path().to_string()),
        title: Route::Login.label().to_string(),
        navigation: Vec::new(),
    })
}

impl RouteResponse {
    fn with_access(mut self, access: RouteAccess) -> Self {
        match access {
            RouteAccess::Allow => {
                self.allowed = true;
                self.redirect_to = None;
            }
            RouteAccess::RedirectTo(target) => {
                self.allowed = false;
                self.redirect_to = Some(target.path().to_string());
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub compliance: String,
    pub score: u32,
    pub total_marks: u32,
    pub completed: bool,
    pub documents: Vec<String>,
    pub deadline: String,
    /// `not_started|in_progress|completed`.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummaryItem {
    pub category: String,
    pub label: String,
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<TaskItem>,
    pub summaries: Vec<CategorySummaryItem>,
    /// Board-wide completion percentage.
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    pub message: String,
    pub task: Option<TaskItem>,
}

impl TaskActionResponse {
    fn from_result(result: Result<(String, TaskItem), String>) -> Self {
        match result {
            Ok((message, task)) => Self {
                ok: true,
                message,
                task: Some(task),
            },
            Err(message) => Self {
                ok: false,
                message,
                task: None,
            },
        }
    }
}

/// Lists the task board.
///
/// Input semantics:
/// - `filter`: `all|all-tasks|completed|pending|<category>`.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list(filter: String) -> TaskListResponse {
    let result = with_signed_in(|context, _| {
        let filter = filter.parse::<TaskFilter>().map_err(|err| err.to_string())?;
        let appraisal = context.appraisal();
        Ok(TaskListResponse {
            ok: true,
            message: String::new(),
            items: appraisal.list(&filter).into_iter().map(to_task_item).collect(),
            summaries: appraisal.summaries().iter().map(to_summary_item).collect(),
            progress: appraisal.progress(),
        })
    });
    result.unwrap_or_else(|message| TaskListResponse {
        ok: false,
        message,
        items: Vec::new(),
        summaries: Vec::new(),
        progress: 0,
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_add(
    title: String,
    category: String,
    description: String,
    deadline: String,
    compliance: String,
    score: u32,
    total_marks: u32,
) -> TaskActionResponse {
    TaskActionResponse::from_result(with_signed_in(|context, _| {
        let category = TaskCategory::parse(&category)
            .ok_or_else(|| format!("unknown task category `{}`", category.trim()))?;
        let mut request = NewTaskRequest::new(title, category, description, parse_date(&deadline)?);
        request.compliance = compliance;
        request.score = score;
        request.total_marks = total_marks;
        let task = context
            .appraisal_mut()
            .add_task(request)
            .map_err(|err| err.to_string())?;
        Ok(("Task added.".to_string(), to_task_item(task)))
    }))
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_set_completed(task_id: String, completed: bool) -> TaskActionResponse {
    TaskActionResponse::from_result(with_signed_in(|context, _| {
        let id = parse_uuid(&task_id)?;
        let task = context
            .appraisal_mut()
            .set_completed(id, completed)
            .map_err(|err| err.to_string())?;
        Ok(("Task updated.".to_string(), to_task_item(task)))
    }))
}

/// Uploads one document; an empty name generates `file_<epoch_ms>.pdf`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_attach_document(task_id: String, document: Option<String>) -> TaskActionResponse {
    TaskActionResponse::from_result(with_signed_in(|context, _| {
        let id = parse_uuid(&task_id)?;
        let task = context
            .appraisal_mut()
            .attach_document(id, document)
            .map_err(|err| err.to_string())?;
        Ok(("Document uploaded.".to_string(), to_task_item(task)))
    }))
}

#[flutter_rust_bridge::frb(sync)]
pub fn appraisal_submit() -> ActionResponse {
    ActionResponse::from_result(with_signed_in(|context, user| {
        context
            .appraisal()
            .submit_for_review(&user)
            .map(|()| "Appraisal submitted for review.".to_string())
            .map_err(|err| err.to_string())
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryItem {
    pub id: String,
    pub date: String,
    /// Hours counted toward the day (period entries use the period length).
    pub hours: f64,
    pub period_id: Option<u8>,
    pub activity: String,
    pub activity_label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetDayResponse {
    pub ok: bool,
    pub message: String,
    pub date: String,
    pub total_hours: f64,
    pub entries: Vec<TimeEntryItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummaryItem {
    pub date: String,
    pub total_hours: f64,
    pub activity_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodItem {
    pub id: u8,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryActionResponse {
    pub ok: bool,
    pub message: String,
    pub entry: Option<TimeEntryItem>,
}

impl TimeEntryActionResponse {
    fn from_result(result: Result<(String, Option<TimeEntryItem>), String>) -> Self {
        match result {
            Ok((message, entry)) => Self {
                ok: true,
                message,
                entry,
            },
            Err(message) => Self {
                ok: false,
                message,
                entry: None,
            },
        }
    }
}

/// Entries and total hours for one day (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_day(date: String) -> TimesheetDayResponse {
    let result = with_signed_in(|context, _| {
        let day = parse_date(&date)?;
        let timesheet = context.timesheet();
        let entries = timesheet
            .entries_for(day)
            .into_iter()
            .map(|entry| to_entry_item(entry, timesheet.entry_hours(entry)))
            .collect();
        Ok(TimesheetDayResponse {
            ok: true,
            message: String::new(),
            date: format_date(day),
            total_hours: timesheet.total_hours_for(day),
            entries,
        })
    });
    result.unwrap_or_else(|message| TimesheetDayResponse {
        ok: false,
        message,
        date,
        total_hours: 0.0,
        entries: Vec::new(),
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_add_entry(
    date: String,
    hours: f64,
    activity: String,
    description: String,
) -> TimeEntryActionResponse {
    TimeEntryActionResponse::from_result(with_signed_in(|context, _| {
        let request = NewEntryRequest {
            date: parse_date(&date)?,
            hours,
            activity: parse_activity(&activity)?,
            description,
        };
        let entry = context
            .timesheet_mut()
            .add_entry(request)
            .map_err(|err| err.to_string())?
            .clone();
        let item = to_entry_item(&entry, hours);
        Ok(("Timesheet entry saved.".to_string(), Some(item)))
    }))
}

/// Most recent days with recorded work, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_history(limit: Option<u32>) -> Vec<DaySummaryItem> {
    let limit = limit.map_or(
        worktrack_core::service::timesheet_service::DEFAULT_HISTORY_DAYS,
        |value| value as usize,
    );
    with_signed_in(|context, _| {
        Ok(context
            .timesheet()
            .history(limit)
            .iter()
            .map(to_day_item)
            .collect())
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_periods() -> Vec<PeriodItem> {
    with_signed_in(|context, _| {
        Ok(context
            .timesheet()
            .periods()
            .iter()
            .map(to_period_item)
            .collect())
    })
    .unwrap_or_default()
}

/// Saves the period dialog; an empty `activity` only updates times.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_save_period(
    date: String,
    period_id: u8,
    start: String,
    end: String,
    activity: Option<String>,
    description: String,
) -> TimeEntryActionResponse {
    TimeEntryActionResponse::from_result(with_signed_in(|context, _| {
        let activity = match activity.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_activity(value)?),
        };
        let request = SavePeriodRequest {
            date: parse_date(&date)?,
            period_id,
            start: parse_time(&start)?,
            end: parse_time(&end)?,
            activity,
            description,
        };
        let timesheet = context.timesheet_mut();
        let saved = timesheet
            .save_period(request)
            .map_err(|err| err.to_string())?
            .cloned();
        let item = saved.map(|entry| {
            let hours = timesheet.entry_hours(&entry);
            to_entry_item(&entry, hours)
        });
        Ok(("Period saved.".to_string(), item))
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionItem {
    pub id: String,
    pub staff_name: String,
    pub department: String,
    pub designation: String,
    pub submitted_on: String,
    /// `pending|approved|rejected`.
    pub status: String,
    pub task_titles: Vec<String>,
    pub document_count: u32,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<SubmissionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewActionResponse {
    pub ok: bool,
    pub message: String,
    pub submission: Option<SubmissionItem>,
}

impl ReviewActionResponse {
    fn from_result(result: Result<(String, SubmissionItem), String>) -> Self {
        match result {
            Ok((message, submission)) => Self {
                ok: true,
                message,
                submission: Some(submission),
            },
            Err(message) => Self {
                ok: false,
                message,
                submission: None,
            },
        }
    }
}

/// Review queue for the signed-in reviewer.
///
/// Input semantics:
/// - `status`: `all|pending|approved|rejected`.
#[flutter_rust_bridge::frb(sync)]
pub fn review_list(status: String) -> ReviewListResponse {
    let result = with_signed_in(|context, user| {
        let filter = status
            .parse::<SubmissionFilter>()
            .map_err(|err| err.to_string())?;
        let items = context
            .review()
            .list(&user, &filter)
            .map_err(|err| err.to_string())?
            .into_iter()
            .map(to_submission_item)
            .collect();
        Ok(ReviewListResponse {
            ok: true,
            message: String::new(),
            items,
        })
    });
    result.unwrap_or_else(|message| ReviewListResponse {
        ok: false,
        message,
        items: Vec::new(),
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn review_select(submission_id: String) -> ReviewActionResponse {
    ReviewActionResponse::from_result(with_signed_in(|context, user| {
        let id = parse_uuid(&submission_id)?;
        let submission = context
            .review()
            .select(&user, id)
            .map_err(|err| err.to_string())?;
        Ok((String::new(), to_submission_item(submission)))
    }))
}

#[flutter_rust_bridge::frb(sync)]
pub fn review_approve(submission_id: String, remarks: Option<String>) -> ReviewActionResponse {
    ReviewActionResponse::from_result(with_signed_in(|context, user| {
        let id = parse_uuid(&submission_id)?;
        let submission = context
            .review_mut()
            .approve(&user, id, remarks.as_deref())
            .map_err(|err| err.to_string())?;
        Ok((
            "Appraisal approved successfully".to_string(),
            to_submission_item(submission),
        ))
    }))
}

#[flutter_rust_bridge::frb(sync)]
pub fn review_reject(submission_id: String, remarks: String) -> ReviewActionResponse {
    ReviewActionResponse::from_result(with_signed_in(|context, user| {
        let id = parse_uuid(&submission_id)?;
        let submission = context
            .review_mut()
            .reject(&user, id, &remarks)
            .map_err(|err| err.to_string())?;
        Ok((
            "Appraisal rejected".to_string(),
            to_submission_item(submission),
        ))
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResponse {
    pub ok: bool,
    pub message: String,
    pub welcome_name: String,
    pub role: String,
    pub progress: u8,
    pub tasks_completed: u32,
    pub tasks_in_progress: u32,
    pub tasks_not_started: u32,
    pub recent_days: Vec<DaySummaryItem>,
    /// Set for admin sessions only.
    pub pending_reviews: Option<u32>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn dashboard() -> DashboardResponse {
    let result = with_context(|context| {
        context
            .dashboard()
            .ok_or_else(|| "Not signed in.".to_string())
    });
    match result {
        Ok(overview) => DashboardResponse {
            ok: true,
            message: String::new(),
            welcome_name: overview.welcome_name,
            role: overview.role.as_str().to_string(),
            progress: overview.progress,
            tasks_completed: to_u32(overview.status_counts.completed),
            tasks_in_progress: to_u32(overview.status_counts.in_progress),
            tasks_not_started: to_u32(overview.status_counts.not_started),
            recent_days: overview.recent_days.iter().map(to_day_item).collect(),
            pending_reviews: overview.pending_reviews.map(to_u32),
        },
        Err(message) => DashboardResponse {
            ok: false,
            message,
            welcome_name: String::new(),
            role: String::new(),
            progress: 0,
            tasks_completed: 0,
            tasks_in_progress: 0,
            tasks_not_started: 0,
            recent_days: Vec::new(),
            pending_reviews: None,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferencesItem {
    pub email_notifications: bool,
    pub appraisal_notifications: bool,
    pub deadline_reminders: bool,
}

/// Stored notification preferences; defaults when unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn preferences_load() -> PreferencesItem {
    let preferences = with_context(|context| {
        context.preferences().load().map_err(|err| err.to_string())
    })
    .unwrap_or_default();
    PreferencesItem {
        email_notifications: preferences.email_notifications,
        appraisal_notifications: preferences.appraisal_notifications,
        deadline_reminders: preferences.deadline_reminders,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn preferences_save(preferences: PreferencesItem) -> ActionResponse {
    let preferences = Preferences {
        email_notifications: preferences.email_notifications,
        appraisal_notifications: preferences.appraisal_notifications,
        deadline_reminders: preferences.deadline_reminders,
    };
    ActionResponse::from_result(with_context(|context| {
        context
            .preferences_mut()
            .save(&preferences)
            .map(|()| "Settings saved.".to_string())
            .map_err(|err| err.to_string())
    }))
}

fn with_context<T>(
    f: impl FnOnce(&mut AppContext<SqliteLocalStore>) -> Result<T, String>,
) -> Result<T, String> {
    let mut guard = APP_CONTEXT
        .lock()
        .map_err(|_| "application context is unavailable".to_string())?;
    if guard.is_none() {
        *guard = Some(open_context()?);
    }
    match guard.as_mut() {
        Some(context) => f(context),
        None => Err("application context is unavailable".to_string()),
    }
}

/// Like [`with_context`], but fails unless a user is signed in.
fn with_signed_in<T>(
    f: impl FnOnce(&mut AppContext<SqliteLocalStore>, User) -> Result<T, String>,
) -> Result<T, String> {
    with_context(|context| {
        let user = context
            .current_user()
            .cloned()
            .ok_or_else(|| "Not signed in.".to_string())?;
        f(context, user)
    })
}

fn open_context() -> Result<AppContext<SqliteLocalStore>, String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    init_logging_from_config(&config).map_err(|err| err.to_string())?;
    AppContext::open_sqlite(&config, Local::now().date_naive()).map_err(|err| {
        warn!("event=context_open module=ffi status=error error={err}");
        format!("local store open failed: {err}")
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date `{}`; expected YYYY-MM-DD", value.trim()))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| format!("invalid time `{}`; expected HH:MM", value.trim()))
}

fn parse_uuid(value: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid id `{}`", value.trim()))
}

fn parse_activity(value: &str) -> Result<ActivityType, String> {
    ActivityType::parse(value).ok_or_else(|| format!("unknown activity type `{}`", value.trim()))
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn to_user_item(user: &User) -> UserItem {
    UserItem {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        role_label: user.role.label().to_string(),
        department: user.department.clone(),
    }
}

fn to_task_item(task: &AppraisalTask) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title.clone(),
        category: task.category.as_str().to_string(),
        description: task.description.clone(),
        compliance: task.compliance.clone(),
        score: task.score,
        total_marks: task.total_marks,
        completed: task.completed,
        documents: task.documents.clone(),
        deadline: format_date(task.deadline),
        status: task.status.as_str().to_string(),
    }
}

fn to_summary_item(summary: &CategorySummary) -> CategorySummaryItem {
    CategorySummaryItem {
        category: summary.category.as_str().to_string(),
        label: summary.category.label().to_string(),
        total: to_u32(summary.counts.total),
        completed: to_u32(summary.counts.completed),
        pending: to_u32(summary.counts.pending),
    }
}

fn to_entry_item(entry: &TimeEntry, hours: f64) -> TimeEntryItem {
    let period_id = match entry.span {
        EntrySpan::Period(period_id) => Some(period_id),
        EntrySpan::Hours(_) => None,
    };
    TimeEntryItem {
        id: entry.id.to_string(),
        date: format_date(entry.date),
        hours,
        period_id,
        activity: entry.activity.as_str().to_string(),
        activity_label: entry.activity.label().to_string(),
        description: entry.description.clone(),
    }
}

fn to_day_item(summary: &DaySummary) -> DaySummaryItem {
    DaySummaryItem {
        date: format_date(summary.date),
        total_hours: summary.total_hours,
        activity_count: to_u32(summary.activity_count),
    }
}

fn to_period_item(period: &Period) -> PeriodItem {
    PeriodItem {
        id: period.id,
        start: period.start.format(TIME_FORMAT).to_string(),
        end: period.end.format(TIME_FORMAT).to_string(),
    }
}

fn to_submission_item(submission: &AppraisalSubmission) -> SubmissionItem {
    SubmissionItem {
        id: submission.id.to_string(),
        staff_name: submission.staff_name.clone(),
        department: submission.department.clone(),
        designation: submission.designation.clone(),
        submitted_on: format_date(submission.submitted_on),
        status: submission.status.as_str().to_string(),
        task_titles: submission
            .tasks
            .iter()
            .map(|task| task.title.clone())
            .collect(),
        document_count: to_u32(submission.document_count()),
        remarks: submission.remarks.clone(),
    }
}
