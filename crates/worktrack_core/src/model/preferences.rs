//! Notification preferences persisted in local storage.

use serde::{Deserialize, Serialize};

/// Per-user notification switches. Every switch defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub email_notifications: bool,
    pub appraisal_notifications: bool,
    pub deadline_reminders: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            appraisal_notifications: true,
            deadline_reminders: true,
        }
    }
}
