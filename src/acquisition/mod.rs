//! Telemetry acquisition: status line parsing and log file sourcing.

mod log_source;
mod status_parser;

pub use log_source::read_grouped;
pub use status_parser::{ParseError, StatusParser};
