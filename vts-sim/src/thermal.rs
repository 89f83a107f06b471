//! Engine temperatures
//!
//! Three independent tracks:
//! - coolant warms toward its thermostat setpoint and never cools back down
//! - intake air is recomputed every tick from coolant heat soak and airflow
//! - the catalyst lags slowly toward a target set by RPM and load

use vts_core::units::Celsius;

pub const COOLANT_TARGET_C: f64 = 90.0;
pub const AMBIENT_INTAKE_C: f64 = 20.0;
/// Fraction of the catalyst temperature gap closed each tick
const CATALYST_LAG: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalState {
    pub coolant: Celsius,
    pub intake_air: Celsius,
    pub catalyst: Celsius,
}

impl ThermalState {
    /// Cold engine
    pub fn cold_start() -> Self {
        Self {
            coolant: Celsius(25.0),
            intake_air: Celsius(20.0),
            catalyst: Celsius(100.0),
        }
    }

    /// Advance all three tracks by one tick
    pub fn update(&self, rpm: f64, load: f64, speed_kph: f64) -> Self {
        let mut coolant = self.coolant.0;
        if coolant < COOLANT_TARGET_C {
            coolant += 0.05 + rpm / 10_000.0;
        }

        let intake_air = (AMBIENT_INTAKE_C + coolant * 0.1 - speed_kph * 0.05).max(AMBIENT_INTAKE_C);

        let catalyst_target = catalyst_target(rpm, load);
        let catalyst = self.catalyst.0 + (catalyst_target - self.catalyst.0) * CATALYST_LAG;

        Self {
            coolant: Celsius(coolant),
            intake_air: Celsius(intake_air),
            catalyst: Celsius(catalyst),
        }
    }
}

/// Steady-state catalyst temperature for an operating point
pub fn catalyst_target(rpm: f64, load: f64) -> f64 {
    400.0 + rpm * 0.05 + load * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolant_warms_with_rpm() {
        let next = ThermalState::cold_start().update(800.0, 15.0, 0.0);
        assert!((next.coolant.0 - 25.13).abs() < 1e-9);
        let hot = ThermalState::cold_start().update(5000.0, 15.0, 0.0);
        assert!(hot.coolant.0 > next.coolant.0);
    }

    #[test]
    fn test_coolant_never_cools() {
        let mut state = ThermalState {
            coolant: Celsius(90.4),
            ..ThermalState::cold_start()
        };
        for _ in 0..100 {
            state = state.update(800.0, 10.0, 0.0);
            assert_eq!(state.coolant.0, 90.4);
        }
    }

    #[test]
    fn test_intake_floor_and_heat_soak() {
        let hot_idle = ThermalState {
            coolant: Celsius(89.95),
            ..ThermalState::cold_start()
        }
        .update(800.0, 10.0, 0.0);
        assert!((hot_idle.intake_air.0 - (20.0 + hot_idle.coolant.0 * 0.1)).abs() < 1e-9);

        let fast = ThermalState::cold_start().update(3000.0, 50.0, 120.0);
        assert_eq!(fast.intake_air.0, 20.0);
    }

    #[test]
    fn test_catalyst_relaxes_one_percent() {
        let next = ThermalState::cold_start().update(2000.0, 50.0, 60.0);
        let target = catalyst_target(2000.0, 50.0);
        assert_eq!(target, 600.0);
        assert!((next.catalyst.0 - (100.0 + 500.0 * 0.01)).abs() < 1e-9);
    }

    #[test]
    fn test_catalyst_converges_toward_target() {
        let mut state = ThermalState::cold_start();
        for _ in 0..2000 {
            state = state.update(2000.0, 50.0, 60.0);
        }
        assert!((state.catalyst.0 - 600.0).abs() < 1.0);
    }
}
