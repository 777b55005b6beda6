//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve the local store path, log settings and simulated latency.
//!
//! # Invariants
//! - Resolution is a pure function of the lookup; `from_env` only binds it
//!   to the process environment.
//! - Blank values are treated as unset.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DB_PATH: &str = "WORKTRACK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "WORKTRACK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "WORKTRACK_LOG_DIR";
pub const ENV_SIMULATED_LATENCY_MS: &str = "WORKTRACK_SIMULATED_LATENCY_MS";

const DEFAULT_DB_FILE_NAME: &str = "worktrack_local.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLatency { value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatency { value } => write!(
                f,
                "{ENV_SIMULATED_LATENCY_MS} must be a whole number of milliseconds, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by the CLI and FFI shells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub simulated_latency: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            simulated_latency: Duration::ZERO,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, applying defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let simulated_latency = match read(ENV_SIMULATED_LATENCY_MS) {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidLatency { value: raw })?,
            None => defaults.simulated_latency,
        };

        Ok(Self {
            db_path: read(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            simulated_latency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_SIMULATED_LATENCY_MS};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(config, CoreConfig::default());
        assert!(config.db_path.ends_with("worktrack_local.sqlite3"));
        assert_eq!(config.simulated_latency, Duration::ZERO);
    }

    #[test]
    fn explicit_values_override_defaults_and_blanks_do_not() {
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, " /data/worktrack.sqlite3 "),
            (ENV_LOG_DIR, "   "),
            (ENV_SIMULATED_LATENCY_MS, "1000"),
        ]))
        .expect("config");
        assert_eq!(config.db_path, PathBuf::from("/data/worktrack.sqlite3"));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.simulated_latency, Duration::from_secs(1));
    }

    #[test]
    fn non_numeric_latency_is_rejected() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_SIMULATED_LATENCY_MS, "fast")]))
            .expect_err("invalid latency");
        assert_eq!(
            err,
            ConfigError::InvalidLatency {
                value: "fast".to_string()
            }
        );
    }
}
