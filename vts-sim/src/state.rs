//! Per-trip vehicle state and the tick transition

use crate::thermal::ThermalState;
use crate::{anomaly, driver, dynamics, gearbox, powertrain, profile};
use rand::Rng;
use vts_core::units::KilometersPerHour;
use vts_core::ScenarioTag;

/// Complete vehicle state after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub speed_kph: f64,
    pub target_speed_kph: f64,
    pub throttle_pct: f64,
    pub engine_load_pct: f64,
    pub rpm: f64,
    pub gear: u8,
    pub thermal: ThermalState,
    pub distance_m: f64,
}

impl SimulationState {
    /// Parked car with a cold engine at idle
    pub fn initial() -> Self {
        Self {
            speed_kph: 0.0,
            target_speed_kph: 0.0,
            throttle_pct: 0.0,
            engine_load_pct: 15.0,
            rpm: powertrain::IDLE_RPM,
            gear: 1,
            thermal: ThermalState::cold_start(),
            distance_m: 0.0,
        }
    }

    /// Advance one simulated second
    ///
    /// Random draws happen in a fixed order (target, throttle jitter, load
    /// noise) so a seeded rng reproduces the same trip.
    pub fn step<R: Rng>(&self, tick: u64, scenario: ScenarioTag, rng: &mut R) -> SimulationState {
        let policy = anomaly::policy_for(scenario);

        let target = profile::next_target(scenario, tick, self.target_speed_kph, rng);
        let throttle = driver::next_throttle(self.speed_kph, target, self.throttle_pct, scenario, rng);
        let speed = dynamics::next_speed(self.speed_kph, throttle);

        let gear = gearbox::select_gear(speed, policy);
        let rpm = powertrain::engine_rpm(speed, gear, throttle);
        let load = powertrain::engine_load(speed, gear, throttle, policy, rng);

        let thermal = self.thermal.update(rpm, load, speed);

        // One tick is one second, so m/s is also meters covered this tick
        let distance_m = self.distance_m + KilometersPerHour(speed).to_meters_per_second().0;

        SimulationState {
            speed_kph: speed,
            target_speed_kph: target,
            throttle_pct: throttle,
            engine_load_pct: load,
            rpm,
            gear,
            thermal,
            distance_m,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::initial()
    }
}
