//! Engine speed and load

use crate::anomaly::AnomalyPolicy;
use rand::Rng;
use vts_core::units::KilometersPerHour;

pub const IDLE_RPM: f64 = 800.0;
pub const MAX_RPM: f64 = 7000.0;
/// Gear ratios, 1st to 6th
pub const GEAR_RATIOS: [f64; 6] = [3.5, 2.0, 1.4, 1.0, 0.8, 0.6];
pub const FINAL_DRIVE: f64 = 3.5;
pub const TIRE_RADIUS_M: f64 = 0.3;
/// Below this speed (kph) the car counts as stopped and revs freely
pub const NEAR_STOP_KPH: f64 = 1.0;

const PI_APPROX: f64 = 3.14159;
const MIN_LOAD: f64 = 10.0;
const MAX_LOAD: f64 = 100.0;
const LOAD_NOISE: f64 = 5.0;

/// Engine RPM for the given speed, gear (1-6) and throttle
///
/// When stopped the clutch is assumed open, so RPM follows the throttle.
/// Otherwise RPM is tied to road speed through the driveline.
pub fn engine_rpm(speed_kph: f64, gear: u8, throttle: f64) -> f64 {
    if speed_kph < NEAR_STOP_KPH {
        return IDLE_RPM + throttle * 20.0;
    }

    let speed_ms = KilometersPerHour(speed_kph).to_meters_per_second().0;
    let idx = usize::from(gear.clamp(1, 6)) - 1;
    let rpm = (speed_ms * 60.0 * FINAL_DRIVE * GEAR_RATIOS[idx]) / (2.0 * PI_APPROX * TIRE_RADIUS_M);
    rpm.clamp(IDLE_RPM, MAX_RPM)
}

/// Engine load (10-100) from throttle and speed plus measurement noise
///
/// The noise is always drawn, even when the policy replaces the result.
pub fn engine_load<R: Rng>(
    speed_kph: f64,
    gear: u8,
    throttle: f64,
    policy: &dyn AnomalyPolicy,
    rng: &mut R,
) -> f64 {
    let base = throttle * 0.8 + speed_kph * 0.1;
    let load = (base + rng.gen_range(-LOAD_NOISE..=LOAD_NOISE)).clamp(MIN_LOAD, MAX_LOAD);
    policy.override_load(speed_kph, gear).unwrap_or(load)
}
