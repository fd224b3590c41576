//! Benchmarks for the array and point-path operations, driven through the
//! same C ABI a foreign caller uses.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use marshal_demo::{distance_n_points, scalar_multiply, NPoints, Point};

fn bench_scalar_multiply(c: &mut Criterion) {
    let xin: Vec<f64> = (0..1024).map(f64::from).collect();
    let mut xout = vec![0.0f64; 1024];
    c.bench_function("scalar_multiply/1024", |b| {
        b.iter(|| {
            scalar_multiply(
                black_box(2.5),
                xin.as_ptr(),
                xin.len() as i32,
                xout.as_mut_ptr(),
            );
        })
    });
}

fn bench_distance_n_points(c: &mut Criterion) {
    let mut points: Vec<Point> = (0..1024)
        .map(|i| Point::new(f64::from(i), f64::from(i % 7)))
        .collect();
    c.bench_function("distance_n_points/1024", |b| {
        b.iter(|| {
            let p = NPoints {
                n: points.len() as i32,
                points: points.as_mut_ptr(),
            };
            black_box(distance_n_points(p))
        })
    });
}

criterion_group!(benches, bench_scalar_multiply, bench_distance_n_points);
criterion_main!(benches);
