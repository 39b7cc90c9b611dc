use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rigid_transform::{
    axis_mask_to_transform_on, change_repere_transpose_velocity6d, change_repere_velocity6d,
    transform_logarithme, transform_mean, velocity_exponential,
};
use rigid_types::{AxisMask, Transform, Velocity6D};

fn random_twists(n: usize) -> Vec<Velocity6D> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            Velocity6D::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
        })
        .collect()
}

fn bench_lie(c: &mut Criterion) {
    let mut group = c.benchmark_group("se3");

    let twists = random_twists(1000);
    let transforms: Vec<Transform> = twists.iter().map(velocity_exponential).collect();

    group.bench_function(BenchmarkId::new("exp", ""), |b| {
        b.iter(|| {
            for xi in twists.iter() {
                std::hint::black_box(velocity_exponential(std::hint::black_box(xi)));
            }
        })
    });

    group.bench_function(BenchmarkId::new("log", ""), |b| {
        b.iter(|| {
            for t in transforms.iter() {
                std::hint::black_box(transform_logarithme(std::hint::black_box(t)));
            }
        })
    });

    group.bench_function(BenchmarkId::new("mean", ""), |b| {
        b.iter(|| {
            for pair in transforms.windows(2) {
                std::hint::black_box(transform_mean(&pair[0], &pair[1], 0.25));
            }
        })
    });

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames");

    let twists = random_twists(1000);
    let transforms: Vec<Transform> = twists.iter().rev().map(velocity_exponential).collect();

    group.bench_function(BenchmarkId::new("compose", ""), |b| {
        b.iter(|| {
            for pair in transforms.windows(2) {
                std::hint::black_box(std::hint::black_box(pair[0]) * pair[1]);
            }
        })
    });

    group.bench_function(BenchmarkId::new("velocity", ""), |b| {
        b.iter(|| {
            for (t, xi) in transforms.iter().zip(twists.iter()) {
                std::hint::black_box(change_repere_velocity6d(t, xi));
            }
        })
    });

    group.bench_function(BenchmarkId::new("velocity_transpose", ""), |b| {
        b.iter(|| {
            for (t, xi) in transforms.iter().zip(twists.iter()) {
                std::hint::black_box(change_repere_transpose_velocity6d(t, xi));
            }
        })
    });

    group.bench_function(BenchmarkId::new("axis_mask", ""), |b| {
        b.iter(|| {
            for t in transforms.iter() {
                std::hint::black_box(axis_mask_to_transform_on(t, AxisMask::XY | AxisMask::WZ));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lie, bench_frames);
criterion_main!(benches);
