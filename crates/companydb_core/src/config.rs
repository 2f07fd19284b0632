//! Store configuration.
//!
//! # Invariants
//! - Nothing here reads environment variables or command-line flags.
//! - The default database is the relative file `db`.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Relative path of the database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file; created on first use.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: default_log_level().to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_db_path(mut self, db_path: impl AsRef<Path>) -> Self {
        self.db_path = db_path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_DB_PATH};
    use std::path::Path;

    #[test]
    fn default_points_at_relative_db_file() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, Path::new(DEFAULT_DB_PATH));
        assert!(config.db_path.is_relative());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"db_path":"other.db"}"#).unwrap();
        assert_eq!(config.db_path, Path::new("other.db"));
        assert_eq!(config.log_level, StoreConfig::default().log_level);
    }
}
