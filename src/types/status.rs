//! A single timestamped component status reading.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ComponentKind, ComponentLimits, ValidationError};

/// One component status extracted from a telemetry log line.
///
/// Immutable after construction; owns its limit configuration by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReading {
    satellite_id: u32,
    limits: ComponentLimits,
    value: f64,
    timestamp: DateTime<Utc>,
}

impl StatusReading {
    /// Build a validated status reading.
    ///
    /// Invariants: `satellite_id > 0` and `value > 0`.
    pub fn new(
        satellite_id: u32,
        limits: ComponentLimits,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if satellite_id == 0 {
            return Err(ValidationError::NonPositiveSatelliteId);
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveValue(value));
        }

        Ok(Self {
            satellite_id,
            limits,
            value,
            timestamp,
        })
    }

    pub fn satellite_id(&self) -> u32 {
        self.satellite_id
    }

    pub fn limits(&self) -> &ComponentLimits {
        &self.limits
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether this reading breaches its component's red threshold.
    ///
    /// Batteries go red low (value below `red_low`), thermostats go red
    /// high (value above `red_high`).
    pub fn is_red_breach(&self) -> bool {
        match self.limits.kind() {
            ComponentKind::Batt => self.value < f64::from(self.limits.red_low()),
            ComponentKind::Tstat => self.value > f64::from(self.limits.red_high()),
        }
    }
}
