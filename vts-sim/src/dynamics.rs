//! Longitudinal speed update

/// Speed (kph) at which acceleration fades out entirely
const SPEED_CAP_KPH: f64 = 200.0;
/// Integration step applied to the acceleration term
const DT: f64 = 0.1;
/// Speed lost per tick with the throttle released (kph)
const COAST_DECAY_KPH: f64 = 0.5;

/// Integrate one tick of throttle into a new speed (kph), never negative
pub fn next_speed(speed_kph: f64, throttle: f64) -> f64 {
    let speed = if throttle > 0.0 {
        // Diminishing returns as speed approaches the cap
        let acceleration = (throttle / 10.0) * (1.0 - speed_kph / SPEED_CAP_KPH);
        speed_kph + acceleration * DT
    } else {
        speed_kph - COAST_DECAY_KPH
    };
    speed.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_throttle_from_standstill() {
        assert!((next_speed(0.0, 100.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_acceleration_fades_with_speed() {
        let low = next_speed(20.0, 50.0) - 20.0;
        let high = next_speed(150.0, 50.0) - 150.0;
        assert!(low > high);
        assert!((high - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_coasting_decays_and_floors_at_zero() {
        assert_eq!(next_speed(10.0, 0.0), 9.5);
        assert_eq!(next_speed(0.3, 0.0), 0.0);
        assert_eq!(next_speed(0.0, 0.0), 0.0);
    }
}
