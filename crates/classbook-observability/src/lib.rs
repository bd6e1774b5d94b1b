//! Classbook Observability Module
//!
//! Provides the ambient observability stack of the API:
//! - Structured logging to the console and to rolling JSON files
//! - Distributed tracing via OpenTelemetry (when an OTLP endpoint is configured)
//! - Metrics collection via Prometheus
//! - HTTP request/response logging and metrics middleware
//!
//! Metrics can be disabled at runtime with `OBSERVABILITY_ENABLED=false`.
//!
//! # Examples
//!
//! ```no_run
//! use classbook_config::LoggingConfig;
//! use classbook_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing(&LoggingConfig::from_env())?;
//!     // ... application code ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use metrics_exporter_prometheus::PrometheusHandle;

pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_record_created, track_record_deleted, track_record_updated,
};
