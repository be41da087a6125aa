//! Telemetry log file source.
//!
//! Reads a log file one line at a time and groups the readings that parse
//! by satellite id. Lines that fail to parse are dropped and processing
//! continues; the reason is logged at debug level so default output stays
//! clean.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::StatusParser;
use crate::types::StatusReading;

/// Read a telemetry log and group its readings by satellite id.
pub fn read_grouped(path: &Path, parser: &StatusParser) -> Result<BTreeMap<u32, Vec<StatusReading>>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open telemetry log {}", path.display()))?;

    let mut by_satellite: BTreeMap<u32, Vec<StatusReading>> = BTreeMap::new();
    let mut total: u64 = 0;
    let mut dropped: u64 = 0;

    for line in BufReader::new(file).lines() {
        let line = line.context("failed to read telemetry log line")?;
        total += 1;

        match parser.parse(&line) {
            Ok(reading) => by_satellite
                .entry(reading.satellite_id())
                .or_default()
                .push(reading),
            Err(err) => {
                dropped += 1;
                debug!(error = %err, line = %line, "skipping unparseable telemetry line");
            }
        }
    }

    debug!(
        total,
        dropped,
        satellites = by_satellite.len(),
        "telemetry log read"
    );
    Ok(by_satellite)
}
