use chart_core::path::{baseline_fill_path, smooth_path};
use chart_core::Point;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f32, ((i as f32) * 0.05).sin() * 100.0 + 200.0))
        .collect()
}

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_path");
    for &n in &[1_000usize, 100_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let points = build_points(n);
            b.iter(|| {
                let path = smooth_path(black_box(&points));
                black_box(path);
            });
        });
        group.bench_function(format!("fill_points_{n}"), |b| {
            let points = build_points(n);
            b.iter(|| {
                let path = baseline_fill_path(black_box(&points), 480.0);
                black_box(path);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_curve);
criterion_main!(benches);
