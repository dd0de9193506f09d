//! Benchmarks for squircle outline computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squircle_paint::Size;
use squircle_shape::{compute_path, CornerSize, LayoutDirection, SquircleShape};

fn bench_uniform_corners(c: &mut Criterion) {
    c.bench_function("compute_path_uniform", |b| {
        b.iter(|| {
            compute_path(
                black_box(Size::new(320.0, 180.0)),
                black_box(24.0),
                black_box(24.0),
                black_box(24.0),
                black_box(24.0),
                black_box(0.6),
                LayoutDirection::Ltr,
            )
        })
    });
}

fn bench_oversized_corners(c: &mut Criterion) {
    c.bench_function("compute_path_oversized", |b| {
        b.iter(|| {
            compute_path(
                black_box(Size::new(120.0, 40.0)),
                black_box(90.0),
                black_box(10.0),
                black_box(60.0),
                black_box(0.0),
                black_box(1.0),
                LayoutDirection::Rtl,
            )
        })
    });
}

fn bench_shape_outline(c: &mut Criterion) {
    let shape = SquircleShape::with_corners(
        CornerSize::dp(16.0),
        CornerSize::Percent(25.0),
        CornerSize::px(8.0),
        CornerSize::ZERO,
    );

    c.bench_function("shape_create_outline", |b| {
        b.iter(|| {
            black_box(&shape).create_outline(
                black_box(Size::new(200.0, 120.0)),
                LayoutDirection::Ltr,
                black_box(2.0),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_uniform_corners,
    bench_oversized_corners,
    bench_shape_outline
);
criterion_main!(benches);
