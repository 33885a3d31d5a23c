//! Benchmarks for per-frame camera work.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use orbit_camera::util::easing::{ease_in_out_cubic, EasingFunction};
use orbit_camera::OrbitCamera;

fn easing_benchmark(c: &mut Criterion) {
    c.bench_function("ease_in_out_cubic", |b| {
        b.iter(|| black_box(ease_in_out_cubic(black_box(0.37))));
    });

    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_matrix");

    let camera = OrbitCamera::default();
    let _ = camera.view_matrix();
    group.bench_function("cached", |b| {
        b.iter(|| black_box(camera.view_matrix()));
    });

    let mut camera = OrbitCamera::default();
    group.bench_function("rotate_then_rebuild", |b| {
        b.iter(|| {
            camera.rotate_horizontally(black_box(0.01));
            camera.rotate_vertically(black_box(0.005));
            black_box(camera.view_matrix())
        });
    });
    group.finish();
}

fn animation_tick_benchmark(c: &mut Criterion) {
    let mut camera = OrbitCamera::default();
    c.bench_function("advance_animation", |b| {
        b.iter(|| {
            if !camera.is_animating() {
                camera.set_target_animated(-camera.target() + Vec3::X);
            }
            camera.advance_animation(black_box(1.0 / 120.0));
            black_box(camera.target())
        });
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    view_matrix_benchmark,
    animation_tick_benchmark
);
criterion_main!(benches);
