//! Anomaly overrides
//!
//! Some scenarios deliberately produce bad driving so downstream analysis
//! has something to find. The overrides live behind [`AnomalyPolicy`] so the
//! gearbox and powertrain models stay free of scenario knowledge.

use vts_core::ScenarioTag;

/// Hook consulted after the normal gear and load calculations
///
/// Returning `None` keeps the computed value.
pub trait AnomalyPolicy: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Replace the gear chosen from the shift table
    fn override_gear(&self, _speed_kph: f64) -> Option<u8> {
        None
    }

    /// Replace the computed engine load; `gear` is the gear actually engaged
    fn override_load(&self, _speed_kph: f64, _gear: u8) -> Option<f64> {
        None
    }
}

/// Well-behaved driver
pub struct NoAnomalies;

impl AnomalyPolicy for NoAnomalies {
    fn name(&self) -> &str {
        "none"
    }
}

/// Driver stuck in first through the mid-speed band, and lugging a tall
/// gear at low speed
pub struct WrongGearLugging;

impl AnomalyPolicy for WrongGearLugging {
    fn name(&self) -> &str {
        "wrong-gear-lugging"
    }

    fn override_gear(&self, speed_kph: f64) -> Option<u8> {
        (speed_kph > 20.0 && speed_kph < 50.0).then_some(1)
    }

    fn override_load(&self, speed_kph: f64, gear: u8) -> Option<f64> {
        (speed_kph > 10.0 && speed_kph < 30.0 && gear > 3).then_some(90.0)
    }
}

/// Policy that applies to a scenario
pub fn policy_for(scenario: ScenarioTag) -> &'static dyn AnomalyPolicy {
    match scenario {
        ScenarioTag::Inefficient => &WrongGearLugging,
        _ => &NoAnomalies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_inefficient_has_overrides() {
        for tag in ScenarioTag::ALL {
            let policy = policy_for(tag);
            if tag == ScenarioTag::Inefficient {
                assert_eq!(policy.name(), "wrong-gear-lugging");
            } else {
                assert_eq!(policy.name(), "none");
                assert_eq!(policy.override_gear(35.0), None);
                assert_eq!(policy.override_load(15.0, 5), None);
            }
        }
    }

    #[test]
    fn test_wrong_gear_band_is_exclusive() {
        let policy = WrongGearLugging;
        assert_eq!(policy.override_gear(20.0), None);
        assert_eq!(policy.override_gear(20.1), Some(1));
        assert_eq!(policy.override_gear(49.9), Some(1));
        assert_eq!(policy.override_gear(50.0), None);
    }

    #[test]
    fn test_lugging_needs_tall_gear() {
        let policy = WrongGearLugging;
        assert_eq!(policy.override_load(15.0, 4), Some(90.0));
        assert_eq!(policy.override_load(15.0, 3), None);
        assert_eq!(policy.override_load(10.0, 6), None);
        assert_eq!(policy.override_load(30.0, 6), None);
    }
}
