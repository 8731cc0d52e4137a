//! Criterion benchmarks for the annealing solver.
//!
//! Uses seeded synthetic instances so timings are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_anneal::instance::{Instance, Item};
use knapsack_anneal::sa::{SaConfig, SaRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let items: Vec<Item> = (0..n)
        .map(|_| Item {
            weight: rng.random_range(1..100),
            value: rng.random_range(1..100),
        })
        .collect();
    // Half the total weight leaves roughly half the items in play.
    let capacity = items.iter().map(|item| item.weight).sum::<u64>() / 2;
    Instance {
        id: 0,
        capacity,
        items,
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_knapsack");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let instance = synthetic_instance(n, 7);
        let config = SaConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
