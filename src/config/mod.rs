//! Monitor configuration.
//!
//! ## Loading Order
//!
//! 1. `SATMON_CONFIG` environment variable (path to a TOML file)
//! 2. `satmon.toml` in the current working directory
//! 3. Built-in defaults (production delimiter `\|`, threshold 3)
//!
//! CLI flags override whatever was loaded. A config file that fails to
//! load falls back to defaults with a warning rather than aborting: the
//! defaults are the documented production values.

use std::path::Path;

use serde::Deserialize;

use crate::analysis::DEFAULT_ALERT_THRESHOLD;

/// Default field delimiter pattern for telemetry logs.
pub const DEFAULT_DELIMITER: &str = r"\|";

/// Runtime configuration for the telemetry monitor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Regex pattern separating the fields of a telemetry line.
    pub delimiter: String,

    /// Red breaches within one 5-minute bucket required to raise an alert.
    pub threshold: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

impl MonitorConfig {
    /// Load configuration following the documented loading order.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SATMON_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        let local = Path::new("satmon.toml");
        if local.exists() {
            return Self::load_from(local);
        }

        Self::default()
    }

    /// Load configuration from a TOML file, falling back to defaults on
    /// any read or parse failure.
    pub fn load_from(path: &Path) -> Self {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| toml::from_str::<Self>(&text).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded monitor config");
                config
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to load monitor config, using defaults"
                );
                Self::default()
            }
        }
    }
}
