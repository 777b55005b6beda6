//! Command-line shell over the WorkTrack core.
//!
//! # Responsibility
//! - Drive the same use-cases as the Flutter shell from a terminal.
//! - Persist the session in the configured local store between runs.
//!
//! # Invariants
//! - Task, timesheet and review data are reseeded on every run; only the
//!   session and preferences survive.

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use uuid::Uuid;
use worktrack_core::model::user::parse_user_role;
use worktrack_core::service::timesheet_service::DEFAULT_HISTORY_DAYS;
use worktrack_core::{
    init_logging_from_config, ActivityType, AppContext, CoreConfig, LocalStore,
    NewEntryRequest, SubmissionFilter, TaskFilter, User,
};

#[derive(Parser)]
#[command(name = "worktrack")]
#[command(about = "Faculty timesheet and appraisal tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check core linkage
    Ping,
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List directory entries visible to the signed-in user
    Users {
        /// Only show one role (staff|hod|principal|admin)
        #[arg(long)]
        role: Option<String>,
    },
    /// Show the dashboard overview
    Dashboard,
    /// Appraisal task board
    Tasks {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Daily timesheet
    Timesheet {
        #[command(subcommand)]
        command: TimesheetCommands,
    },
    /// Review queue (admin, principal, department head)
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// List tasks with an optional filter (all|completed|pending|<category>)
    List {
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Mark a task completed (or pending with --undo)
    Complete {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        undo: bool,
    },
    /// Upload a document to a task
    Attach {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
    },
    /// Submit the board; requires every task completed
    Submit,
}

#[derive(Subcommand)]
enum TimesheetCommands {
    /// Entries for one day (default: today)
    Day {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Record a free-duration entry
    Add {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        hours: f64,
        #[arg(long)]
        activity: String,
        #[arg(long)]
        description: String,
    },
    /// Recent days with recorded work
    History {
        #[arg(long, default_value_t = DEFAULT_HISTORY_DAYS)]
        limit: usize,
    },
    /// Period schedule
    Periods,
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// List submissions (all|pending|approved|rejected)
    List {
        #[arg(long, default_value = "pending")]
        status: String,
    },
    Approve {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        remarks: Option<String>,
    },
    Reject {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        remarks: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CoreConfig::from_env()?;
    init_logging_from_config(&config)?;

    if let Commands::Ping = cli.command {
        println!("worktrack_core ping={}", worktrack_core::ping());
        println!("worktrack_core version={}", worktrack_core::core_version());
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut context = AppContext::open_sqlite(&config, today).with_context(|| {
        format!(
            "failed to open local store at {}",
            config.db_path.display()
        )
    })?;

    dispatch(&mut context, cli.command, today)
}

fn dispatch<S: LocalStore>(
    context: &mut AppContext<S>,
    command: Commands,
    today: NaiveDate,
) -> anyhow::Result<()> {
    match command {
        Commands::Ping => {}
        Commands::Login { email, password } => {
            let user = context.login(&email, &password)?;
            println!("Signed in as {} ({}).", user.name, user.role.label());
        }
        Commands::Logout => {
            context.logout()?;
            println!("Signed out.");
        }
        Commands::Whoami => match context.current_user() {
            Some(user) => print_user(user),
            None => println!("Not signed in."),
        },
        Commands::Users { role } => {
            signed_in(context)?;
            let role = role.as_deref().map(parse_user_role).transpose()?;
            for user in context.visible_users() {
                if role.map_or(true, |role| user.role == role) {
                    print_user(user);
                }
            }
        }
        Commands::Dashboard => {
            let overview = context
                .dashboard()
                .ok_or_else(|| anyhow!("not signed in; run `worktrack login` first"))?;
            println!("Welcome back, {}!", overview.welcome_name);
            println!("Appraisal progress: {}%", overview.progress);
            println!(
                "Tasks: {} completed, {} in progress, {} not started",
                overview.status_counts.completed,
                overview.status_counts.in_progress,
                overview.status_counts.not_started
            );
            for day in &overview.recent_days {
                println!(
                    "- {} {:.1}h across {} activities",
                    day.date, day.total_hours, day.activity_count
                );
            }
            if let Some(pending) = overview.pending_reviews {
                println!("Pending reviews: {pending}");
            }
        }
        Commands::Tasks { command } => run_tasks(context, command)?,
        Commands::Timesheet { command } => run_timesheet(context, command, today)?,
        Commands::Review { command } => run_review(context, command)?,
    }
    Ok(())
}

fn run_tasks<S: LocalStore>(
    context: &mut AppContext<S>,
    command: TaskCommands,
) -> anyhow::Result<()> {
    let user = signed_in(context)?;
    match command {
        TaskCommands::List { filter } => {
            let filter: TaskFilter = filter.parse()?;
            let appraisal = context.appraisal();
            println!("Progress: {}%", appraisal.progress());
            for task in appraisal.list(&filter) {
                println!(
                    "- [{}] {} ({}, due {}) {} document(s) id={}",
                    task.status.label(),
                    task.title,
                    task.category.label(),
                    task.deadline,
                    task.documents.len(),
                    task.id
                );
            }
        }
        TaskCommands::Complete { id, undo } => {
            let task = context.appraisal_mut().set_completed(id, !undo)?;
            println!("{} is now {}.", task.title, task.status.label());
        }
        TaskCommands::Attach { id, name } => {
            let task = context.appraisal_mut().attach_document(id, name)?;
            println!("{} has {} document(s).", task.title, task.documents.len());
        }
        TaskCommands::Submit => {
            context.appraisal().submit_for_review(&user)?;
            println!("Appraisal submitted for review.");
        }
    }
    Ok(())
}

fn run_timesheet<S: LocalStore>(
    context: &mut AppContext<S>,
    command: TimesheetCommands,
    today: NaiveDate,
) -> anyhow::Result<()> {
    signed_in(context)?;
    match command {
        TimesheetCommands::Day { date } => {
            let date = date.unwrap_or(today);
            let timesheet = context.timesheet();
            println!("{date}: {:.1}h", timesheet.total_hours_for(date));
            for entry in timesheet.entries_for(date) {
                let slot = entry
                    .period_id()
                    .map_or_else(String::new, |period_id| format!("period {period_id} "));
                println!(
                    "- {slot}{:.1}h {}: {}",
                    timesheet.entry_hours(entry),
                    entry.activity.label(),
                    entry.description
                );
            }
        }
        TimesheetCommands::Add {
            date,
            hours,
            activity,
            description,
        } => {
            let activity = ActivityType::parse(&activity)
                .ok_or_else(|| anyhow!("unknown activity type `{activity}`"))?;
            let entry = context.timesheet_mut().add_entry(NewEntryRequest {
                date: date.unwrap_or(today),
                hours,
                activity,
                description,
            })?;
            println!("Saved {hours}h of {} on {}.", entry.activity.label(), entry.date);
        }
        TimesheetCommands::History { limit } => {
            for day in context.timesheet().history(limit) {
                println!(
                    "- {} {:.1}h across {} activities",
                    day.date, day.total_hours, day.activity_count
                );
            }
        }
        TimesheetCommands::Periods => {
            for period in context.timesheet().periods() {
                println!(
                    "- period {}: {} - {}",
                    period.id,
                    period.start.format("%H:%M"),
                    period.end.format("%H:%M")
                );
            }
        }
    }
    Ok(())
}

fn run_review<S: LocalStore>(
    context: &mut AppContext<S>,
    command: ReviewCommands,
) -> anyhow::Result<()> {
    let user = signed_in(context)?;
    match command {
        ReviewCommands::List { status } => {
            let filter: SubmissionFilter = status.parse()?;
            let submissions = context.review().list(&user, &filter)?;
            if submissions.is_empty() {
                println!("No submissions.");
            }
            for submission in submissions {
                println!(
                    "- [{}] {} ({}, {}) submitted {} with {} task(s) id={}",
                    submission.status.label(),
                    submission.staff_name,
                    submission.designation,
                    submission.department,
                    submission.submitted_on,
                    submission.tasks.len(),
                    submission.id
                );
            }
        }
        ReviewCommands::Approve { id, remarks } => {
            let submission = context
                .review_mut()
                .approve(&user, id, remarks.as_deref())?;
            println!("Approved appraisal of {}.", submission.staff_name);
        }
        ReviewCommands::Reject { id, remarks } => {
            let submission = context.review_mut().reject(&user, id, &remarks)?;
            println!("Rejected appraisal of {}.", submission.staff_name);
        }
    }
    Ok(())
}

fn signed_in<S: LocalStore>(context: &AppContext<S>) -> anyhow::Result<User> {
    match context.current_user() {
        Some(user) => Ok(user.clone()),
        None => bail!("not signed in; run `worktrack login` first"),
    }
}

fn print_user(user: &User) {
    match &user.department {
        Some(department) => println!(
            "{} <{}> {} - {}",
            user.name,
            user.email,
            user.role.label(),
            department
        ),
        None => println!("{} <{}> {}", user.name, user.email, user.role.label()),
    }
}
