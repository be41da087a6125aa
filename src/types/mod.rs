//! Telemetry data model: component kinds, limit configuration, status
//! readings, and derived alerts.

mod alert;
mod component;
mod status;

pub use alert::{Alert, Severity};
pub use component::{ComponentKind, ComponentLimits};
pub use status::StatusReading;

use thiserror::Error;

/// Errors raised when a telemetry value fails its construction invariants.
///
/// Invalid entities are never observable: every constructor validates
/// atomically and returns this error instead of a partial value.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("the {field} for the satellite component must be greater than 0, got {value}")]
    NonPositiveLimit { field: &'static str, value: i32 },

    #[error("the red high limit ({red_high}) must be greater than the red low limit ({red_low})")]
    RedLimitsOutOfOrder { red_high: i32, red_low: i32 },

    #[error("the yellow high limit ({yellow_high}) must be greater than the yellow low limit ({yellow_low})")]
    YellowLimitsOutOfOrder { yellow_high: i32, yellow_low: i32 },

    #[error("the satellite id must be greater than 0")]
    NonPositiveSatelliteId,

    #[error("the status value must be greater than 0, got {0}")]
    NonPositiveValue(f64),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
