//! Alert derivation over bucketed status readings.

mod aggregator;

pub use aggregator::{bucket_start, AlertAggregator, BUCKET_SECONDS, DEFAULT_ALERT_THRESHOLD};
