//! Gear selection

use crate::anomaly::AnomalyPolicy;

/// Speed (kph) a gear needs to be exceeded before it is selected, 1st to 6th
pub const GEAR_THRESHOLDS_KPH: [f64; 6] = [0.0, 15.0, 30.0, 50.0, 70.0, 90.0];

/// Highest gear whose threshold `speed_kph` strictly exceeds, or 1st
pub fn speed_to_gear(speed_kph: f64) -> u8 {
    GEAR_THRESHOLDS_KPH
        .iter()
        .rposition(|&limit| speed_kph > limit)
        .map_or(1, |idx| idx as u8 + 1)
}

/// Gear actually engaged, after the anomaly policy had its say
pub fn select_gear(speed_kph: f64, policy: &dyn AnomalyPolicy) -> u8 {
    policy
        .override_gear(speed_kph)
        .unwrap_or_else(|| speed_to_gear(speed_kph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anomaly::{NoAnomalies, WrongGearLugging};

    #[test]
    fn test_threshold_table() {
        assert_eq!(speed_to_gear(0.0), 1);
        assert_eq!(speed_to_gear(0.1), 1);
        assert_eq!(speed_to_gear(15.0), 1);
        assert_eq!(speed_to_gear(15.1), 2);
        assert_eq!(speed_to_gear(30.5), 3);
        assert_eq!(speed_to_gear(50.5), 4);
        assert_eq!(speed_to_gear(70.5), 5);
        assert_eq!(speed_to_gear(90.0), 5);
        assert_eq!(speed_to_gear(180.0), 6);
    }

    #[test]
    fn test_select_gear_without_anomalies_follows_table() {
        for speed in [0.0, 12.0, 25.0, 45.0, 65.0, 85.0, 110.0] {
            assert_eq!(select_gear(speed, &NoAnomalies), speed_to_gear(speed));
        }
    }

    #[test]
    fn test_select_gear_wrong_gear_override() {
        assert_eq!(select_gear(45.0, &WrongGearLugging), 1);
        assert_eq!(select_gear(65.0, &WrongGearLugging), 4);
    }
}
