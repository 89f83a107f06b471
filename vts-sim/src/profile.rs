//! Target-speed sampling per scenario

use rand::Rng;
use vts_core::ScenarioTag;

/// Ticks between target-speed changes (one simulated minute)
pub const RESAMPLE_INTERVAL_TICKS: u64 = 60;

/// Pick the target speed (kph) for `tick`
///
/// A new target is drawn on every resample tick, including tick 0;
/// otherwise `current` is returned unchanged. Idle never draws from the rng.
pub fn next_target<R: Rng>(scenario: ScenarioTag, tick: u64, current: f64, rng: &mut R) -> f64 {
    if tick % RESAMPLE_INTERVAL_TICKS != 0 {
        return current;
    }

    match scenario {
        ScenarioTag::Highway => rng.gen_range(80.0..=120.0),
        ScenarioTag::City => rng.gen_range(0.0..=50.0),
        ScenarioTag::Idle => 0.0,
        _ => rng.gen_range(0.0..=100.0),
    }
}
