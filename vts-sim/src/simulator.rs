//! Trip simulator that generates synthetic drivetrain telemetry
//!
//! Drives a single car for a fixed number of one-second ticks. Each tick the
//! driver chases a target speed picked by the scenario, the car responds,
//! and the gearbox, engine and thermal models follow. Every tick becomes one
//! TelemetryRecord, yielded in order.

use crate::row::{self, DEFAULT_DRIVER_ID};
use crate::state::SimulationState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::iter::FusedIterator;
use tracing::debug;
use vts_core::{ConfigError, ScenarioTag, TelemetryRecord};

// =============================================================================
// Configuration
// =============================================================================

/// Validated trip configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripConfig {
    scenario: ScenarioTag,
    duration_ticks: u64,
    rng_seed: Option<u64>,
    driver_id: String,
}

impl TripConfig {
    pub fn new(
        scenario: ScenarioTag,
        duration_ticks: u64,
        rng_seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if duration_ticks == 0 {
            return Err(ConfigError::NonPositiveDuration);
        }
        Ok(Self {
            scenario,
            duration_ticks,
            rng_seed,
            driver_id: DEFAULT_DRIVER_ID.to_string(),
        })
    }

    /// Build from loosely typed input, e.g. command line values
    pub fn parse(
        scenario: &str,
        duration_ticks: i64,
        rng_seed: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let scenario: ScenarioTag = scenario.parse()?;
        let duration_ticks =
            u64::try_from(duration_ticks).map_err(|_| ConfigError::NonPositiveDuration)?;
        let rng_seed = rng_seed
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(s.to_string()))
            })
            .transpose()?;
        Self::new(scenario, duration_ticks, rng_seed)
    }

    /// Replace the driver id written to every row
    pub fn with_driver_id(mut self, driver_id: impl Into<String>) -> Result<Self, ConfigError> {
        let driver_id = driver_id.into();
        if driver_id.trim().is_empty() {
            return Err(ConfigError::EmptyDriverId);
        }
        self.driver_id = driver_id;
        Ok(self)
    }

    pub fn scenario(&self) -> ScenarioTag {
        self.scenario
    }

    pub fn duration_ticks(&self) -> u64 {
        self.duration_ticks
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    pub fn driver_id(&self) -> &str {
        &self.driver_id
    }
}

// =============================================================================
// TripSimulator
// =============================================================================

/// Iterator over the records of one trip
///
/// Finite and not restartable: once the configured number of ticks has been
/// yielded it only returns `None`. Build a new simulator to run again.
pub struct TripSimulator<R = ChaCha8Rng> {
    config: TripConfig,
    state: SimulationState,
    tick: u64,
    rng: R,
}

impl TripSimulator<ChaCha8Rng> {
    /// Seeded from the config, or from OS entropy when no seed was given
    pub fn new(config: TripConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> TripSimulator<R> {
    /// Use a caller-supplied random source instead of the config seed
    pub fn with_rng(config: TripConfig, rng: R) -> Self {
        debug!(
            "Starting {} trip: {} ticks, seed {:?}",
            config.scenario, config.duration_ticks, config.rng_seed
        );
        Self {
            config,
            state: SimulationState::initial(),
            tick: 0,
            rng,
        }
    }

    pub fn config(&self) -> &TripConfig {
        &self.config
    }

    /// State after the most recent tick
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn remaining_ticks(&self) -> u64 {
        self.config.duration_ticks - self.tick
    }

    /// Run the whole trip and collect every record
    pub fn run(self) -> Vec<TelemetryRecord> {
        self.collect()
    }
}

impl<R: Rng> Iterator for TripSimulator<R> {
    type Item = TelemetryRecord;

    fn next(&mut self) -> Option<TelemetryRecord> {
        if self.tick >= self.config.duration_ticks {
            return None;
        }

        self.state = self.state.step(self.tick, self.config.scenario, &mut self.rng);
        let record = row::assemble(self.tick, &self.state, &self.config.driver_id);
        self.tick += 1;

        if self.tick == self.config.duration_ticks {
            debug!(
                "Finished {} trip: {:.1} m covered",
                self.config.scenario, self.state.distance_m
            );
        }

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining_ticks()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for TripSimulator<R> {}

impl<R: Rng> FusedIterator for TripSimulator<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_zero_duration() {
        assert_eq!(
            TripConfig::new(ScenarioTag::City, 0, None),
            Err(ConfigError::NonPositiveDuration)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            TripConfig::parse("suburban", 10, None),
            Err(ConfigError::UnknownScenario("suburban".to_string()))
        );
        assert_eq!(
            TripConfig::parse("city", -5, None),
            Err(ConfigError::NonPositiveDuration)
        );
        assert_eq!(
            TripConfig::parse("city", 10, Some("abc")),
            Err(ConfigError::InvalidSeed("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_accepts_valid_input() {
        let config = TripConfig::parse("Highway", 600, Some(" 42 ")).unwrap();
        assert_eq!(config.scenario(), ScenarioTag::Highway);
        assert_eq!(config.duration_ticks(), 600);
        assert_eq!(config.rng_seed(), Some(42));
        assert_eq!(config.driver_id(), DEFAULT_DRIVER_ID);
    }

    #[test]
    fn test_with_driver_id() {
        let config = TripConfig::new(ScenarioTag::City, 1, None).unwrap();
        assert_eq!(
            config.clone().with_driver_id("  "),
            Err(ConfigError::EmptyDriverId)
        );
        let config = config.with_driver_id("Fleet_12").unwrap();
        assert_eq!(config.driver_id(), "Fleet_12");
    }

    #[test]
    fn test_exact_size_and_fused() {
        let config = TripConfig::new(ScenarioTag::Mixed, 3, Some(1)).unwrap();
        let mut sim = TripSimulator::new(config);
        assert_eq!(sim.len(), 3);
        sim.next();
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.remaining_ticks(), 2);
        sim.next();
        sim.next();
        assert!(sim.next().is_none());
        assert!(sim.next().is_none());
        assert_eq!(sim.len(), 0);
    }

    #[test]
    fn test_with_rng_matches_seeded_new() {
        let config = TripConfig::new(ScenarioTag::Aggressive, 120, Some(77)).unwrap();
        let a = TripSimulator::new(config.clone()).run();
        let b = TripSimulator::with_rng(config, ChaCha8Rng::seed_from_u64(77)).run();
        assert_eq!(a, b);
    }
}
