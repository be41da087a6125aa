//! End-to-end pipeline: telemetry log to merged alert set.
//!
//! Satellites are independent of each other (no shared state, no ordering
//! dependency), so per-satellite aggregation fans out across the rayon
//! pool; the per-satellite result sets are merged on the calling thread.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use crate::acquisition::{read_grouped, StatusParser};
use crate::analysis::AlertAggregator;
use crate::config::MonitorConfig;
use crate::types::Alert;

/// Run the full pipeline over one telemetry log file.
///
/// Lines that fail to parse are skipped; I/O failures and an invalid
/// delimiter pattern surface as errors.
pub fn run(path: &Path, config: &MonitorConfig) -> Result<HashSet<Alert>> {
    let parser = StatusParser::new(&config.delimiter)?;
    let by_satellite = read_grouped(path, &parser)?;
    let aggregator = AlertAggregator::new(config.threshold);

    let per_satellite: Vec<HashSet<Alert>> = by_satellite
        .par_iter()
        .map(|(&satellite_id, readings)| aggregator.aggregate(satellite_id, readings))
        .collect();

    let mut alerts = HashSet::new();
    for satellite_alerts in per_satellite {
        alerts.extend(satellite_alerts);
    }

    info!(
        satellites = by_satellite.len(),
        alerts = alerts.len(),
        "aggregation complete"
    );
    Ok(alerts)
}
