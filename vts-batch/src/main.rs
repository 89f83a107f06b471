//! Vehicle Telemetry Synthesizer batch generator
//!
//! Writes one telemetry table per simulated week

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use vts_batch::batch;
use vts_batch::config::{self, BatchConfig, OutputFormat};
use vts_core::model::TIMESTAMP_FORMAT;
use vts_core::ScenarioTag;

#[derive(Debug, Parser)]
#[command(
    name = "vts-batch",
    version,
    about = "Generate weekly vehicle telemetry tables from simulated trips"
)]
struct Cli {
    /// Directory the weekly tables and manifest are written to
    #[arg(long, env = "VTS_OUTPUT_DIR", default_value = "data")]
    output_dir: PathBuf,

    /// Number of weeks (one trip each)
    #[arg(long, env = "VTS_WEEKS", default_value_t = config::DEFAULT_WEEKS)]
    weeks: u32,

    /// One-second samples per week
    #[arg(long, env = "VTS_TICKS_PER_WEEK", default_value_t = config::DEFAULT_TICKS_PER_WEEK)]
    ticks_per_week: u64,

    /// Start of week 1, "YYYY-MM-DD HH:MM:SS"
    #[arg(long, env = "VTS_START", value_parser = parse_start)]
    start: Option<NaiveDateTime>,

    /// Base random seed; omit for a fresh run every time
    #[arg(long, env = "VTS_SEED")]
    seed: Option<u64>,

    /// Use this scenario for every week instead of drawing one per week
    #[arg(long, env = "VTS_SCENARIO")]
    scenario: Option<ScenarioTag>,

    /// Table format
    #[arg(long, env = "VTS_FORMAT", value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Driver id written to every row
    #[arg(long, env = "VTS_DRIVER_ID", default_value = vts_sim::row::DEFAULT_DRIVER_ID)]
    driver_id: String,
}

fn parse_start(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| format!("expected \"YYYY-MM-DD HH:MM:SS\": {}", e))
}

impl From<Cli> for BatchConfig {
    fn from(cli: Cli) -> Self {
        BatchConfig {
            output_dir: cli.output_dir,
            weeks: cli.weeks,
            ticks_per_week: cli.ticks_per_week,
            start: cli.start.unwrap_or_else(config::default_start),
            seed: cli.seed,
            scenario: cli.scenario,
            format: cli.format,
            driver_id: cli.driver_id,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = BatchConfig::from(Cli::parse());

    info!("Starting vehicle telemetry batch");

    // Ctrl-C stops the remaining weeks; rows already written are kept
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, finishing current rows and stopping");
                cancel.cancel();
            }
        });
    }

    let manifest = batch::run(config, cancel).await?;

    if !manifest.is_complete() {
        warn!("Batch was cancelled before every week completed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["vts-batch"]).unwrap();
        let config = BatchConfig::from(cli);
        assert_eq!(config.weeks, 15);
        assert_eq!(config.ticks_per_week, 7200);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.start, config::default_start());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "vts-batch",
            "--weeks",
            "3",
            "--scenario",
            "highway",
            "--seed",
            "9",
            "--start",
            "2025-03-03 06:30:00",
            "--format",
            "ndjson",
        ])
        .unwrap();
        let config = BatchConfig::from(cli);
        assert_eq!(config.weeks, 3);
        assert_eq!(config.scenario, Some(ScenarioTag::Highway));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.start.to_string(), "2025-03-03 06:30:00");
        assert_eq!(config.format, OutputFormat::Ndjson);
    }

    #[test]
    fn test_cli_rejects_unknown_scenario() {
        assert!(Cli::try_parse_from(["vts-batch", "--scenario", "rally"]).is_err());
    }
}
