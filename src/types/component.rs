//! Satellite component kinds and their red/yellow limit configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The closed set of satellite component kinds carried by the telemetry logs.
///
/// BATT  - Battery
/// TSTAT - Thermostat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "BATT")]
    Batt,
    #[serde(rename = "TSTAT")]
    Tstat,
}

impl ComponentKind {
    /// Resolve a telemetry token into a component kind.
    ///
    /// Matching is exact and case-sensitive: only the literal enum names
    /// `BATT` and `TSTAT` are recognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "BATT" => Some(ComponentKind::Batt),
            "TSTAT" => Some(ComponentKind::Tstat),
            _ => None,
        }
    }

    /// The enum name as it appears in telemetry logs and alert output.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Batt => "BATT",
            ComponentKind::Tstat => "TSTAT",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The limit configuration of a satellite component.
///
/// Values above `red_high` or below `red_low` are critical; the yellow
/// band is carried by the telemetry format but drives no alerts today.
/// Equality is structural across all five fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentLimits {
    kind: ComponentKind,
    red_high: i32,
    red_low: i32,
    yellow_high: i32,
    yellow_low: i32,
}

impl ComponentLimits {
    /// Build a validated limit configuration.
    ///
    /// Invariants: all four limits strictly positive, `red_high > red_low`,
    /// `yellow_high > yellow_low`.
    pub fn new(
        kind: ComponentKind,
        red_high: i32,
        red_low: i32,
        yellow_high: i32,
        yellow_low: i32,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("red high limit", red_high),
            ("red low limit", red_low),
            ("yellow high limit", yellow_high),
            ("yellow low limit", yellow_low),
        ] {
            if value <= 0 {
                return Err(ValidationError::NonPositiveLimit { field, value });
            }
        }
        if red_high <= red_low {
            return Err(ValidationError::RedLimitsOutOfOrder { red_high, red_low });
        }
        if yellow_high <= yellow_low {
            return Err(ValidationError::YellowLimitsOutOfOrder {
                yellow_high,
                yellow_low,
            });
        }

        Ok(Self {
            kind,
            red_high,
            red_low,
            yellow_high,
            yellow_low,
        })
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn red_high(&self) -> i32 {
        self.red_high
    }

    pub fn red_low(&self) -> i32 {
        self.red_low
    }

    pub fn yellow_high(&self) -> i32 {
        self.yellow_high
    }

    pub fn yellow_low(&self) -> i32 {
        self.yellow_low
    }
}
