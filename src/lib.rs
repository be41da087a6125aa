//! satmon: Satellite Telemetry Monitor
//!
//! Ingests pipe-delimited satellite telemetry logs, reconstructs typed
//! component status readings, and derives alerts when a component breaches
//! its red threshold repeatedly within a fixed 5-minute bucket.
//!
//! ## Architecture
//!
//! - **acquisition**: status line parsing and log file sourcing
//! - **analysis**: per-satellite, per-component alert aggregation
//! - **pipeline**: file -> readings -> grouped by satellite -> alert set
//! - **types**: validated telemetry data model
//! - **config**: delimiter and alert threshold configuration

pub mod acquisition;
pub mod analysis;
pub mod config;
pub mod pipeline;
pub mod types;

// Re-export the pieces callers wire together
pub use acquisition::{ParseError, StatusParser};
pub use analysis::{bucket_start, AlertAggregator, BUCKET_SECONDS, DEFAULT_ALERT_THRESHOLD};
pub use config::MonitorConfig;
pub use types::{Alert, ComponentKind, ComponentLimits, Severity, StatusReading, ValidationError};
