//! # Classbook Config
//!
//! Configuration types for the Classbook API.
//!
//! Each configuration structure is loaded from environment variables with
//! `from_env()`; values that are absent or unparsable fall back to defaults.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection settings
//! - [`logging`]: Log level and log file location
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use classbook_config::{CorsConfig, DatabaseConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let database = DatabaseConfig::from_env()?;
//! let cors = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

/// Parses a boolean flag the way every config in this crate does:
/// anything other than `false`/`0`/`no` (case-insensitive) counts as true.
pub(crate) fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no")
}
