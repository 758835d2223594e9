//! Criterion benchmarks for tie resolution.
//!
//! Fixtures are drawn from a seeded RNG with realistic scorelines (0-5
//! goals per side) so every branch of the rule chain is exercised.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use u_twoleg::tie::{evaluate, evaluate_all, resolve, Fixture, Leg, TeamPair, TieOptions};

fn random_fixtures(n: usize, seed: u64) -> Vec<Fixture> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Fixture::new(
                Some(TeamPair::new(format!("home-{i}"), format!("away-{i}"))),
                Leg::new(rng.random_range(0..6), rng.random_range(0..6)),
                Leg::new(rng.random_range(0..6), rng.random_range(0..6)),
            )
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let fixtures = random_fixtures(64, 42);

    for (name, options) in [
        ("away_goals", TieOptions::default()),
        ("no_away_goals", TieOptions::default().with_away_goals_rule(false)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &options, |b, o| {
            b.iter(|| {
                for fixture in &fixtures {
                    black_box(evaluate(black_box(fixture), o));
                }
            })
        });
    }
    group.finish();
}

fn bench_resolve_json(c: &mut Criterion) {
    let data = json!({
        "teams": ["foo", "bar"],
        "games": [{ "home": 2, "away": 1 }, { "home": 3, "away": 2 }]
    });
    let options = TieOptions::default();
    c.bench_function("resolve_json", |b| {
        b.iter(|| black_box(resolve(black_box(&data), &options)))
    });
}

fn bench_evaluate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_all");
    group.sample_size(20);

    for &n in &[100, 1_000, 10_000] {
        let fixtures = random_fixtures(n, 7);
        let options = TieOptions::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &fixtures, |b, f| {
            b.iter(|| black_box(evaluate_all(black_box(f), &options)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_resolve_json, bench_evaluate_all);
criterion_main!(benches);
