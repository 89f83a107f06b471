//! Weekly batch runner
//!
//! This module handles:
//! - Planning which scenario and seed each week gets
//! - Running one trip per week on a blocking worker
//! - Stamping rows with wall-clock time and writing them to a sink
//! - Stopping early when the cancellation token fires
//! - Writing the manifest once every week has finished

use crate::config::BatchConfig;
use crate::manifest::{Manifest, WeekReport, WeekStatus};
use crate::sinks::create_sink;
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use vts_core::{RecordSink, ScenarioTag};
use vts_sim::{TripConfig, TripSimulator};

/// Rows written between cancellation checks
const CANCEL_CHECK_INTERVAL: u64 = 600;

/// What one week will be generated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    pub week: u32,
    pub scenario: ScenarioTag,
    pub seed: u64,
    pub start: NaiveDateTime,
    pub path: PathBuf,
}

/// Decide scenario, seed and output file for every week
///
/// Scenarios come from the override or are drawn from an rng seeded with
/// `base_seed`, so the same base seed always yields the same plan. Each
/// week's trip seed is `base_seed + week`.
pub fn plan_weeks(config: &BatchConfig, base_seed: u64) -> Vec<WeekPlan> {
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed);

    (1..=config.weeks)
        .map(|week| {
            let scenario = config
                .scenario
                .unwrap_or_else(|| ScenarioTag::ALL[rng.gen_range(0..ScenarioTag::ALL.len())]);
            WeekPlan {
                week,
                scenario,
                seed: base_seed.wrapping_add(u64::from(week)),
                start: config.week_start(week),
                path: config.output_dir.join(config.week_file_name(week)),
            }
        })
        .collect()
}

/// Simulate one week and write it through `sink`
///
/// Blocking; run it off the async runtime.
pub fn generate_week(
    plan: &WeekPlan,
    config: &BatchConfig,
    sink: &mut dyn RecordSink,
    cancel: &CancellationToken,
) -> Result<WeekReport> {
    let trip = TripConfig::new(plan.scenario, config.ticks_per_week, Some(plan.seed))?
        .with_driver_id(config.driver_id.clone())?;

    let mut status = WeekStatus::Complete;
    let mut speed_sum = 0.0;
    let mut distance_m = 0.0;

    for record in TripSimulator::new(trip) {
        if record.time_s % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            status = WeekStatus::Cancelled;
            break;
        }

        speed_sum += record.speed.0;
        distance_m = record.trip_distance.0;

        let offset = i64::try_from(record.time_s).unwrap_or(i64::MAX);
        let record = record.with_timestamp(plan.start + Duration::seconds(offset));
        sink.write_record(&record)?;
    }
    sink.finish()?;

    let rows = sink.records_written();
    let mean_speed_kph = if rows > 0 { speed_sum / rows as f64 } else { 0.0 };

    Ok(WeekReport {
        week: plan.week,
        scenario: plan.scenario,
        seed: plan.seed,
        file: plan
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        start: plan.start,
        rows,
        distance_m,
        mean_speed_kph,
        status,
    })
}

/// Generate every week of the batch and write the manifest
///
/// Weeks run in parallel on the blocking pool; they share nothing but the
/// read-only config and the cancellation token.
pub async fn run(config: BatchConfig, cancel: CancellationToken) -> Result<Manifest> {
    config.validate()?;

    let base_seed = config
        .seed
        .unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    info!(
        "Generating {} weeks of {} ticks into {} (base seed {})",
        config.weeks,
        config.ticks_per_week,
        config.output_dir.display(),
        base_seed
    );

    let config = Arc::new(config);
    let mut tasks = JoinSet::new();

    for plan in plan_weeks(&config, base_seed) {
        let config = Arc::clone(&config);
        let cancel = cancel.clone();
        tasks.spawn_blocking(move || -> Result<WeekReport> {
            info!("Generating week {} ({})", plan.week, plan.scenario);
            let mut sink = create_sink(config.format, &plan.path)?;
            let report = generate_week(&plan, &config, sink.as_mut(), &cancel)?;
            match report.status {
                WeekStatus::Complete => info!("Saved {}", plan.path.display()),
                WeekStatus::Cancelled => warn!(
                    "Week {} cancelled after {} rows",
                    plan.week, report.rows
                ),
            }
            Ok(report)
        });
    }

    let mut weeks = Vec::with_capacity(config.weeks as usize);
    while let Some(joined) = tasks.join_next().await {
        let report = joined.context("week generation task panicked")??;
        weeks.push(report);
    }
    weeks.sort_by_key(|w| w.week);

    let manifest = Manifest {
        generated_at: Utc::now(),
        base_seed,
        ticks_per_week: config.ticks_per_week,
        format: config.format,
        weeks,
    };
    manifest.write_to(&config.output_dir)?;

    info!(
        "Batch finished: {} rows across {} weeks",
        manifest.total_rows(),
        manifest.weeks.len()
    );

    Ok(manifest)
}
