use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default level for this application's targets when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for the rolling JSON log files.
    pub log_dir: String,
    /// Write the rolling JSON log file at all.
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: "storage/logs".to_string(),
            file_enabled: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            level: env::var("LOG_LEVEL").unwrap_or(defaults.level),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            file_enabled: env::var("LOG_FILE_ENABLED")
                .map(|v| crate::parse_flag(&v))
                .unwrap_or(defaults.file_enabled),
        }
    }
}
