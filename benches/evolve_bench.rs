//! Criterion benchmarks for the TSP generation step.
//!
//! Cities are placed pseudo-randomly in a 1000 x 1000 square so the
//! measurements reflect operator cost rather than any instance structure.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use tsp_evolve::ga::operators::{inversion_mutation, order_crossover};
use tsp_evolve::ga::{random_population, GenerationConfig, GenerationStep};
use tsp_evolve::random::create_rng;
use tsp_evolve::tsp::{City, Tour};

fn random_cities(n: usize, seed: u64) -> Vec<City> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|i| {
            City::new(
                i as i64,
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..1000.0),
            )
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");
    group.sample_size(20);

    for (n, pop) in [(20usize, 100usize), (100, 100), (200, 200)] {
        let cities = random_cities(n, 42);
        let prior: Vec<Tour> = random_population(n, pop, &mut create_rng(7));
        let config = GenerationConfig::default()
            .with_population_size(pop)
            .with_parallel(false);

        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}", n, pop), n),
            &(cities, prior, config),
            |b, (cities, prior, config)| {
                let mut rng = create_rng(42);
                b.iter(|| {
                    let gen = GenerationStep::step(
                        black_box(cities),
                        Some(black_box(prior.as_slice())),
                        black_box(config),
                        &mut rng,
                    );
                    black_box(gen)
                })
            },
        );
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &n in &[50usize, 500] {
        let mut rng = create_rng(3);
        let pop = random_population(n, 2, &mut rng);
        let (p1, p2) = (&pop[0], &pop[1]);

        group.bench_with_input(BenchmarkId::new("order_crossover", n), &n, |b, _| {
            b.iter(|| black_box(order_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("inversion_mutation", n), &n, |b, _| {
            b.iter(|| black_box(inversion_mutation(black_box(p1), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation_step, bench_operators);
criterion_main!(benches);
