//! Red-threshold alert aggregation.
//!
//! Readings are partitioned by component kind and bucketed into fixed,
//! non-overlapping 300-second intervals aligned to the Unix epoch. Bucket
//! boundaries are absolute, never relative to the first reading: two
//! readings 301 seconds apart can land in different buckets even though
//! their wall-clock gap is under 5 minutes, and breach runs never merge
//! across a boundary.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use crate::types::{Alert, ComponentKind, Severity, StatusReading};

/// Width of one aggregation bucket in seconds (5 minutes, epoch-aligned).
pub const BUCKET_SECONDS: i64 = 300;

/// Production default for the per-bucket breach count that raises an alert.
pub const DEFAULT_ALERT_THRESHOLD: usize = 3;

/// Epoch-aligned start of the bucket containing `epoch_secs`.
pub fn bucket_start(epoch_secs: i64) -> i64 {
    epoch_secs - epoch_secs % BUCKET_SECONDS
}

/// Derives alerts for one satellite from its status readings.
pub struct AlertAggregator {
    threshold: usize,
}

impl AlertAggregator {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Aggregate one satellite's readings into a set of alerts.
    ///
    /// Each component kind is handled independently. Per bucket, one alert
    /// is emitted when at least `threshold` readings breach the red limit,
    /// carrying the timestamp of the first breaching reading in scan order.
    /// Duplicate alerts collapse via set semantics.
    pub fn aggregate(&self, satellite_id: u32, readings: &[StatusReading]) -> HashSet<Alert> {
        let mut alerts = HashSet::new();

        for kind in [ComponentKind::Batt, ComponentKind::Tstat] {
            for bucket in bucket_by_interval(readings, kind).values() {
                if let Some(first_breach) = self.alert_timestamp(bucket) {
                    alerts.insert(Alert::new(
                        satellite_id,
                        Severity::for_kind(kind),
                        kind,
                        first_breach,
                    ));
                }
            }
        }

        alerts
    }

    /// One-pass fold over a bucket: count red breaches and remember the
    /// first breaching reading's timestamp. Returns that timestamp only
    /// when the count reaches the alert threshold.
    fn alert_timestamp(&self, bucket: &[&StatusReading]) -> Option<DateTime<Utc>> {
        let mut breaches = 0usize;
        let mut first_breach: Option<DateTime<Utc>> = None;

        for reading in bucket {
            if reading.is_red_breach() {
                breaches += 1;
                if first_breach.is_none() {
                    first_breach = Some(reading.timestamp());
                }
            }
        }

        if breaches >= self.threshold {
            first_breach
        } else {
            None
        }
    }
}

/// Group one kind's readings into epoch-aligned buckets, preserving each
/// reading's original relative order within its bucket.
fn bucket_by_interval<'a>(
    readings: &'a [StatusReading],
    kind: ComponentKind,
) -> BTreeMap<i64, Vec<&'a StatusReading>> {
    let mut buckets: BTreeMap<i64, Vec<&StatusReading>> = BTreeMap::new();

    for reading in readings.iter().filter(|r| r.limits().kind() == kind) {
        buckets
            .entry(bucket_start(reading.timestamp().timestamp()))
            .or_default()
            .push(reading);
    }

    buckets
}
