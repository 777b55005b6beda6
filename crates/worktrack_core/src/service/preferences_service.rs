//! Notification preferences load/save.
//!
//! # Invariants
//! - Preferences live as JSON under [`PREFERENCES_STORAGE_KEY`].
//! - A missing or undecodable record reads as the defaults.

use crate::model::preferences::Preferences;
use crate::repo::local_store::{LocalStore, StoreResult};
use log::{info, warn};

pub const PREFERENCES_STORAGE_KEY: &str = "preferences";

pub struct PreferencesService<S: LocalStore> {
    storage: S,
}

impl<S: LocalStore> PreferencesService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads stored preferences, falling back to defaults.
    ///
    /// # Errors
    /// - Returns storage read errors only; decode failures fall back.
    pub fn load(&self) -> StoreResult<Preferences> {
        let Some(raw) = self.storage.get_item(PREFERENCES_STORAGE_KEY)? else {
            return Ok(Preferences::default());
        };
        match serde_json::from_str::<Preferences>(&raw) {
            Ok(preferences) => Ok(preferences),
            Err(err) => {
                warn!(
                    "event=preferences_load module=preferences status=fallback error_code=corrupt_record error={err}"
                );
                Ok(Preferences::default())
            }
        }
    }

    pub fn save(&mut self, preferences: &Preferences) -> StoreResult<()> {
        let encoded = serde_json::to_string(preferences)?;
        self.storage.set_item(PREFERENCES_STORAGE_KEY, &encoded)?;
        info!(
            "event=preferences_save module=preferences status=ok email={} appraisal={} deadlines={}",
            preferences.email_notifications,
            preferences.appraisal_notifications,
            preferences.deadline_reminders
        );
        Ok(())
    }
}
