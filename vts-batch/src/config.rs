//! Batch configuration

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vts_core::{ConfigError, ScenarioTag};
use vts_sim::row::DEFAULT_DRIVER_ID;

/// Two hours of one-second samples
pub const DEFAULT_TICKS_PER_WEEK: u64 = 3600 * 2;
pub const DEFAULT_WEEKS: u32 = 15;

/// File format for the weekly tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated table with a header row
    Csv,
    /// One JSON object per line
    Ndjson,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Ndjson => "ndjson",
        }
    }
}

/// Everything needed to generate a set of weekly trips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub weeks: u32,
    pub ticks_per_week: u64,
    /// Start of week 1
    pub start: NaiveDateTime,
    /// Base seed; each week derives its own from it
    pub seed: Option<u64>,
    /// Use this scenario for every week instead of drawing one
    pub scenario: Option<ScenarioTag>,
    pub format: OutputFormat,
    pub driver_id: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            weeks: DEFAULT_WEEKS,
            ticks_per_week: DEFAULT_TICKS_PER_WEEK,
            start: default_start(),
            seed: None,
            scenario: None,
            format: OutputFormat::Csv,
            driver_id: DEFAULT_DRIVER_ID.to_string(),
        }
    }
}

/// 2024-01-01 08:00:00
pub fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weeks == 0 {
            return Err(ConfigError::InvalidBatch("weeks must be at least 1".into()));
        }
        if self.ticks_per_week == 0 {
            return Err(ConfigError::NonPositiveDuration);
        }
        if self.driver_id.trim().is_empty() {
            return Err(ConfigError::EmptyDriverId);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidBatch("output directory must be set".into()));
        }
        Ok(())
    }

    /// Start time of a 1-based week
    pub fn week_start(&self, week: u32) -> NaiveDateTime {
        self.start + Duration::weeks(i64::from(week.saturating_sub(1)))
    }

    pub fn week_file_name(&self, week: u32) -> String {
        format!("week_{}.{}", week, self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weeks, 15);
        assert_eq!(config.ticks_per_week, 7200);
        assert_eq!(config.start.to_string(), "2024-01-01 08:00:00");
    }

    #[test]
    fn test_validate_rejects_empty_batches() {
        let config = BatchConfig {
            weeks: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBatch(_))));

        let config = BatchConfig {
            ticks_per_week: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveDuration));

        let config = BatchConfig {
            driver_id: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyDriverId));
    }

    #[test]
    fn test_week_start_and_file_name() {
        let config = BatchConfig::default();
        assert_eq!(config.week_start(1), config.start);
        assert_eq!(config.week_start(3).to_string(), "2024-01-15 08:00:00");
        assert_eq!(config.week_file_name(3), "week_3.csv");

        let config = BatchConfig {
            format: OutputFormat::Ndjson,
            ..Default::default()
        };
        assert_eq!(config.week_file_name(12), "week_12.ndjson");
    }
}
