//! satmon - satellite telemetry monitor CLI
//!
//! Reads one telemetry log file, derives red-threshold alerts, and prints
//! them as a pretty-printed JSON array on stdout.
//!
//! # Usage
//!
//! ```bash
//! satmon path/to/telemetry.log
//!
//! # Override the delimiter pattern or alert threshold
//! satmon --delimiter ',' --threshold 5 path/to/telemetry.log
//! ```
//!
//! # Environment Variables
//!
//! - `SATMON_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info, logs go to stderr)
//!
//! Processing errors print a one-line message to stdout and the process
//! exits normally, matching the reference CLI contract.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use satmon::config::MonitorConfig;
use satmon::pipeline;
use satmon::Alert;

#[derive(Parser, Debug)]
#[command(name = "satmon")]
#[command(about = "Derives red-threshold alerts from satellite telemetry logs")]
#[command(version)]
struct CliArgs {
    /// Path to the telemetry log file
    file: PathBuf,

    /// Field delimiter pattern (regex), overrides the config file
    #[arg(long)]
    delimiter: Option<String>,

    /// Red breaches within one 5-minute bucket required to raise an alert
    #[arg(long)]
    threshold: Option<usize>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the JSON alert array.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("satmon=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The reference CLI prints usage and exits 0 on any bad argument
    // shape, so argument errors are not mapped to a failure code.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(usage) => {
            println!("{usage}");
            return ExitCode::SUCCESS;
        }
    };

    let mut config = MonitorConfig::load();
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }

    match run(&args.file, &config) {
        Ok(json) => println!("{json}"),
        Err(error) => println!("There was an error processing the file: {error:#}"),
    }
    ExitCode::SUCCESS
}

fn run(file: &PathBuf, config: &MonitorConfig) -> anyhow::Result<String> {
    let alerts = pipeline::run(file, config)?;

    // Sets are unordered; sort for deterministic output.
    let mut alerts: Vec<Alert> = alerts.into_iter().collect();
    alerts.sort();

    Ok(serde_json::to_string_pretty(&alerts)?)
}
