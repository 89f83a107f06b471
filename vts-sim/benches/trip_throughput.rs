//! Trip generation benchmarks
//!
//! Measures how fast full trips are simulated and assembled into records.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vts_core::ScenarioTag;
use vts_sim::{TripConfig, TripSimulator};

/// Benchmark a two-hour trip (one batch week) per scenario
fn bench_week_per_scenario(c: &mut Criterion) {
    let mut group = c.benchmark_group("Week Trip");

    for scenario in ScenarioTag::ALL {
        let config = TripConfig::new(scenario, 7200, Some(42)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &config,
            |b, config| {
                b.iter(|| {
                    let records = TripSimulator::new(black_box(config.clone())).run();
                    black_box(records)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the per-tick step without record assembly
fn bench_step(c: &mut Criterion) {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use vts_sim::SimulationState;

    c.bench_function("state step x1000", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let mut state = SimulationState::initial();
            for tick in 0..1000 {
                state = state.step(tick, ScenarioTag::Mixed, &mut rng);
            }
            black_box(state)
        });
    });
}

criterion_group!(benches, bench_week_per_scenario, bench_step);
criterion_main!(benches);
