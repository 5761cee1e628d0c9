//! Criterion benchmarks comparing `pip` with and without the extent pre-filter.
//! Ring sizes: n in {8, 64, 512, 4096}; query points spread over four times the
//! polygon's extent, so most of them fall outside its bounding box.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_types::Coord;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rpip::{pip, pip_box};

fn random_star(n: usize, seed: u64) -> Vec<Vec<Coord<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let outer = (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            let r = rng.gen_range(0.5..1.0);
            Coord { x: r * a.cos(), y: r * a.sin() }
        })
        .collect();
    let hole = (0..8)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / 8.0;
            Coord { x: 0.2 * a.cos(), y: 0.2 * a.sin() }
        })
        .collect();
    vec![outer, hole]
}

fn random_points(m: usize, seed: u64) -> Vec<Coord<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| Coord { x: rng.gen_range(-2.0..2.0), y: rng.gen_range(-2.0..2.0) })
        .collect()
}

fn bench_pip(c: &mut Criterion) {
    let _ = simple_logger::SimpleLogger::new().env().init();
    let points = random_points(1024, 7);
    let mut group = c.benchmark_group("pip");
    for &n in &[8usize, 64, 512, 4096] {
        let polygon = random_star(n, 43);
        group.bench_with_input(BenchmarkId::new("pip", n), &polygon, |b, polygon| {
            b.iter(|| points.iter().filter(|p| pip(**p, polygon).unwrap_or(false)).count())
        });
        group.bench_with_input(BenchmarkId::new("pip_box", n), &polygon, |b, polygon| {
            b.iter(|| points.iter().filter(|p| pip_box(**p, polygon).unwrap_or(false)).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pip);
criterion_main!(benches);
