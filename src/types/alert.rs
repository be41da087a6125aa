//! Alerts derived from repeated red-threshold breaches.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ComponentKind;

/// The severity of a derived alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "RED LOW")]
    RedLow,
    #[serde(rename = "RED HIGH")]
    RedHigh,
}

impl Severity {
    /// The red severity a component kind raises when it breaches:
    /// batteries go red low, thermostats red high.
    pub fn for_kind(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Batt => Severity::RedLow,
            ComponentKind::Tstat => Severity::RedHigh,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::RedLow => f.write_str("RED LOW"),
            Severity::RedHigh => f.write_str("RED HIGH"),
        }
    }
}

/// An alert raised when a satellite component breached its red threshold
/// at least the configured number of times within one aggregation bucket.
///
/// Equality and hashing are structural across all four fields, so alert
/// sets collapse duplicates. JSON field order matches the output contract:
/// `satelliteId, severity, component, timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    satellite_id: u32,
    severity: Severity,
    component: ComponentKind,
    timestamp: String,
}

impl Alert {
    /// Build an alert for the first breaching reading of a bucket.
    ///
    /// The timestamp renders as an ISO-8601 UTC instant with millisecond
    /// precision, e.g. `2018-01-01T23:01:38.001Z`.
    pub fn new(
        satellite_id: u32,
        severity: Severity,
        component: ComponentKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            satellite_id,
            severity,
            component,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn satellite_id(&self) -> u32 {
        self.satellite_id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn component(&self) -> ComponentKind {
        self.component
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
