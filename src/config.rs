//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.inline-sql-lint.toml` in current directory
//! 4. `~/.config/inline-sql-lint/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [scan]
//! # Regex locating embedded SQL literals; capture group 1 is the SQL.
//! sql_regex = "`([^`]*)`"
//! # generic, mysql, postgresql, sqlite
//! dialect = "postgresql"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `INLINE_SQL_REGEX` | Fragment-extraction regex |
//! | `INLINE_SQL_DIALECT` | SQL dialect name |
//!
//! The kind-to-severity mapping of diagnostics is fixed and not
//! configurable.

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig
}

/// Fragment extraction configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScanConfig {
    /// Regex locating embedded SQL literals (capture group 1 is the SQL)
    pub sql_regex: Option<String>,
    /// Dialect name: generic, mysql, postgresql, sqlite
    pub dialect:   Option<String>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.inline-sql-lint.toml)
    /// 3. Config file in home directory (~/.config/inline-sql-lint/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("inline-sql-lint")
                .join("config.toml");

            if home_config.exists() {
                let content = fs::read_to_string(&home_config)
                    .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
                config = toml::from_str(&content)
                    .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".inline-sql-lint.toml");
        if local_config.exists() {
            let content = fs::read_to_string(&local_config)
                .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
            config = toml::from_str(&content)
                .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
        }

        // Override with environment variables
        if let Ok(regex) = env::var("INLINE_SQL_REGEX") {
            config.scan.sql_regex = Some(regex);
        }

        if let Ok(dialect) = env::var("INLINE_SQL_DIALECT") {
            config.scan.dialect = Some(dialect);
        }

        Ok(config)
    }
}
