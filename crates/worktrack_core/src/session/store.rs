//! Session store: current user, login and logout.
//!
//! # Responsibility
//! - Authenticate through an [`AuthGateway`] and hold the resulting user.
//! - Persist the current user as JSON under [`SESSION_STORAGE_KEY`].
//! - Restore the session once when the store is opened.
//!
//! # Invariants
//! - The in-memory user and the stored record change together: storage is
//!   written first, memory second.
//! - A corrupt stored record is discarded, never surfaced as a session.
//! - Credentials are never logged.
//!
//! # See also
//! - `session::directory` for the demo accounts.
//! - `context::AppContext::login`, which also reseeds per-user state.

use crate::gateway::{AuthGateway, GatewayError};
use crate::model::user::User;
use crate::policy::access::can_view;
use crate::repo::local_store::{LocalStore, StoreError, StoreResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the serialized current user.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Login failures. `Display` text is suitable for the login form.
#[derive(Debug)]
pub enum AuthError {
    /// Email or password was empty.
    MissingCredentials,
    /// No directory entry matched the credentials.
    InvalidCredentials,
    Gateway(GatewayError),
    Storage(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "Email and password are required"),
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::Gateway(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Gateway(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GatewayError> for AuthError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// Holds the signed-in user for one application instance.
pub struct SessionStore<S: LocalStore, A: AuthGateway> {
    storage: S,
    auth: A,
    current: Option<User>,
}

impl<S: LocalStore, A: AuthGateway> SessionStore<S, A> {
    /// Opens the store and restores a previously saved session, if any.
    ///
    /// # Errors
    /// - Returns storage read errors. A record that fails to decode is
    ///   removed and the store opens logged out.
    pub fn open(storage: S, auth: A) -> StoreResult<Self> {
        let mut store = Self {
            storage,
            auth,
            current: None,
        };
        store.restore()?;
        Ok(store)
    }

    fn restore(&mut self) -> StoreResult<()> {
        let Some(raw) = self.storage.get_item(SESSION_STORAGE_KEY)? else {
            info!("event=session_restore module=session status=ok restored=false");
            return Ok(());
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                info!(
                    "event=session_restore module=session status=ok restored=true role={}",
                    user.role
                );
                self.current = Some(user);
            }
            Err(err) => {
                warn!(
                    "event=session_restore module=session status=discarded error_code=corrupt_record error={}",
                    err
                );
                self.storage.remove_item(SESSION_STORAGE_KEY)?;
            }
        }
        Ok(())
    }

    /// Authenticates and stores the session.
    ///
    /// # Errors
    /// - `MissingCredentials` when either input is empty.
    /// - `InvalidCredentials` for unknown email or wrong password.
    /// - `Gateway`/`Storage` for port failures; the session is unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            warn!("event=login module=session status=error error_code=missing_credentials");
            return Err(AuthError::MissingCredentials);
        }

        let user = match self.auth.authenticate(email, password) {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("event=login module=session status=error error_code=invalid_credentials");
                return Err(AuthError::InvalidCredentials);
            }
            Err(err) => {
                warn!("event=login module=session status=error error_code=gateway error={err}");
                return Err(err.into());
            }
        };

        // Why: a failed write must leave the in-memory session unchanged.
        let encoded = serde_json::to_string(&user).map_err(StoreError::from)?;
        self.storage.set_item(SESSION_STORAGE_KEY, &encoded)?;
        info!(
            "event=login module=session status=ok user_id={} role={}",
            user.id, user.role
        );
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clears the session in memory and in storage.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.storage.remove_item(SESSION_STORAGE_KEY)?;
        if let Some(user) = self.current.take() {
            info!("event=logout module=session status=ok user_id={}", user.id);
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Access-policy check for the signed-in user; denies when logged out.
    pub fn can_view(&self, target: &User) -> bool {
        can_view(self.current.as_ref(), target)
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Releases the underlying storage, e.g. to reopen it in tests.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
