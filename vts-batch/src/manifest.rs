//! Batch manifest
//!
//! Written next to the weekly tables so a run can be audited and
//! reproduced: it records the base seed and what each week contains.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use vts_core::ScenarioTag;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    Complete,
    Cancelled,
}

/// Outcome of one generated week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekReport {
    pub week: u32,
    pub scenario: ScenarioTag,
    pub seed: u64,
    pub file: String,
    pub start: NaiveDateTime,
    pub rows: u64,
    pub distance_m: f64,
    pub mean_speed_kph: f64,
    pub status: WeekStatus,
}

/// Serializable summary of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub base_seed: u64,
    pub ticks_per_week: u64,
    pub format: OutputFormat,
    pub weeks: Vec<WeekReport>,
}

impl Manifest {
    pub fn is_complete(&self) -> bool {
        self.weeks.iter().all(|w| w.status == WeekStatus::Complete)
    }

    pub fn total_rows(&self) -> u64 {
        self.weeks.iter().map(|w| w.rows).sum()
    }

    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let path = dir.join(MANIFEST_FILE);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let file =
            File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
        let manifest = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(manifest)
    }
}
