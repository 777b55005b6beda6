//! Application context owned by a shell (CLI or FFI).
//!
//! # Responsibility
//! - Wire the session store, preferences and use-case services together.
//! - Seed the in-memory services with demo data.
//! - Route login and logout so per-user state follows the session.
//!
//! # Invariants
//! - One context per application instance; core holds no global session.
//! - The session is restored from storage exactly once, at construction.
//! - The task board and timesheet belong to the signed-in user: both are
//!   reseeded whenever the session changes hands, so no user ever sees or
//!   submits another user's board.
//! - The review queue is shared by all reviewers and is never reseeded.
//!
//! # See also
//! - `session::store` for the persisted session record.

use crate::config::CoreConfig;
use crate::gateway::SimulatedGateway;
use crate::model::user::User;
use crate::policy::access::visible_users;
use crate::repo::local_store::{LocalStore, MemoryLocalStore, SqliteLocalStore, StoreResult};
use crate::seed::{demo_period_entries, demo_submissions, demo_tasks, demo_time_entries};
use crate::service::appraisal_service::AppraisalService;
use crate::service::dashboard_service::{dashboard_overview, DashboardOverview};
use crate::service::preferences_service::PreferencesService;
use crate::service::review_service::ReviewService;
use crate::service::timesheet_service::TimesheetService;
use crate::session::directory::{DirectoryAuthGateway, UserDirectory};
use crate::session::store::{AuthError, SessionStore};
use chrono::NaiveDate;
use log::info;
use std::time::Duration;

type Session<S> = SessionStore<S, DirectoryAuthGateway>;

pub struct AppContext<S: LocalStore> {
    session: Session<S>,
    preferences: PreferencesService<S>,
    appraisal: AppraisalService<SimulatedGateway>,
    timesheet: TimesheetService<SimulatedGateway>,
    review: ReviewService<SimulatedGateway>,
    gateway: SimulatedGateway,
    today: NaiveDate,
}

impl<S: LocalStore> AppContext<S> {
    /// Builds a seeded context. `today` dates the seeded period entries.
    ///
    /// # Errors
    /// - Returns storage errors raised while restoring the session.
    pub fn new(
        session_storage: S,
        preferences_storage: S,
        latency: Duration,
        today: NaiveDate,
    ) -> StoreResult<Self> {
        let auth = DirectoryAuthGateway::new(UserDirectory::demo(), latency);
        let session = SessionStore::open(session_storage, auth)?;
        let gateway = SimulatedGateway::new(latency);

        info!(
            "event=context_init module=context status=ok latency_ms={} restored={}",
            latency.as_millis(),
            session.is_authenticated()
        );
        Ok(Self {
            session,
            preferences: PreferencesService::new(preferences_storage),
            appraisal: seeded_board(gateway),
            timesheet: seeded_timesheet(gateway, today),
            review: ReviewService::new(gateway, demo_submissions()),
            gateway,
            today,
        })
    }

    /// Signs in and hands the new user a freshly seeded board and timesheet.
    ///
    /// # Errors
    /// - Any [`AuthError`]; on failure the session and boards are unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.session.login(email, password)?;
        self.reseed_user_state();
        Ok(user)
    }

    /// Signs out and drops the previous user's board and timesheet edits.
    ///
    /// # Errors
    /// - Returns storage errors; the boards are left untouched in that case.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.session.logout()?;
        self.reseed_user_state();
        Ok(())
    }

    fn reseed_user_state(&mut self) {
        self.appraisal = seeded_board(self.gateway);
        self.timesheet = seeded_timesheet(self.gateway, self.today);
        info!("event=user_state_reseed module=context status=ok");
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Directory entries the signed-in user may see; empty when logged out.
    pub fn visible_users(&self) -> Vec<&User> {
        let users = self.session.auth().directory().users();
        match self.session.current_user() {
            Some(viewer) => visible_users(viewer, users),
            None => Vec::new(),
        }
    }

    pub fn preferences(&self) -> &PreferencesService<S> {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferencesService<S> {
        &mut self.preferences
    }

    pub fn appraisal(&self) -> &AppraisalService<SimulatedGateway> {
        &self.appraisal
    }

    pub fn appraisal_mut(&mut self) -> &mut AppraisalService<SimulatedGateway> {
        &mut self.appraisal
    }

    pub fn timesheet(&self) -> &TimesheetService<SimulatedGateway> {
        &self.timesheet
    }

    pub fn timesheet_mut(&mut self) -> &mut TimesheetService<SimulatedGateway> {
        &mut self.timesheet
    }

    pub fn review(&self) -> &ReviewService<SimulatedGateway> {
        &self.review
    }

    pub fn review_mut(&mut self) -> &mut ReviewService<SimulatedGateway> {
        &mut self.review
    }

    /// Overview for the signed-in user; `None` when logged out.
    pub fn dashboard(&self) -> Option<DashboardOverview> {
        let user = self.session.current_user()?;
        Some(dashboard_overview(
            user,
            &self.appraisal,
            &self.timesheet,
            &self.review,
        ))
    }
}

fn seeded_board(gateway: SimulatedGateway) -> AppraisalService<SimulatedGateway> {
    AppraisalService::with_tasks(gateway, demo_tasks())
}

fn seeded_timesheet(
    gateway: SimulatedGateway,
    today: NaiveDate,
) -> TimesheetService<SimulatedGateway> {
    let mut entries = demo_time_entries();
    entries.extend(demo_period_entries(today));
    TimesheetService::with_entries(gateway, entries)
}

impl AppContext<MemoryLocalStore> {
    /// Volatile context with zero latency, for tests and scripted use.
    pub fn in_memory(today: NaiveDate) -> StoreResult<Self> {
        Self::new(
            MemoryLocalStore::new(),
            MemoryLocalStore::new(),
            Duration::ZERO,
            today,
        )
    }
}

impl AppContext<SqliteLocalStore> {
    /// Durable context over the configured local store file.
    pub fn open_sqlite(config: &CoreConfig, today: NaiveDate) -> StoreResult<Self> {
        let session_storage = SqliteLocalStore::open(&config.db_path)?;
        let preferences_storage = SqliteLocalStore::open(&config.db_path)?;
        Self::new(
            session_storage,
            preferences_storage,
            config.simulated_latency,
            today,
        )
    }
}
