//! Driver throttle model

use rand::Rng;
use vts_core::ScenarioTag;

/// Speed error (kph) inside which the driver just holds the pedal
const HOLD_BAND_KPH: f64 = 5.0;
const THROTTLE_STEP: f64 = 5.0;
const HOLD_JITTER: f64 = 2.0;

fn accel_factor(scenario: ScenarioTag) -> f64 {
    match scenario {
        ScenarioTag::Aggressive => 2.0,
        _ => 0.5,
    }
}

/// Next throttle position (0-100) given the current speed error
///
/// Throttle ramps up gradually when below target, is released completely
/// when well above it, and wanders slightly while holding speed. The rng is
/// only consulted in the hold band.
pub fn next_throttle<R: Rng>(
    speed_kph: f64,
    target_kph: f64,
    throttle: f64,
    scenario: ScenarioTag,
    rng: &mut R,
) -> f64 {
    let diff = target_kph - speed_kph;

    if diff > HOLD_BAND_KPH {
        (throttle + THROTTLE_STEP * accel_factor(scenario)).min(100.0)
    } else if diff < -HOLD_BAND_KPH {
        0.0
    } else {
        (throttle + rng.gen_range(-HOLD_JITTER..=HOLD_JITTER)).clamp(0.0, 100.0)
    }
}
