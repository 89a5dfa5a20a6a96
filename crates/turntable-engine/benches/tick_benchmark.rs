//! Transform engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use turntable_core::Settings;
use turntable_engine::TransformEngine;

fn tick_damped(c: &mut Criterion) {
    let settings = Settings::new().with_rotation(0.8, -1.2).with_scale(3.0);
    c.bench_function("tick_damped_1000_frames", |b| {
        b.iter(|| {
            let mut engine = TransformEngine::new();
            for _ in 0..1000 {
                engine.tick(black_box(&settings), 1.0 / 60.0);
            }
            engine.state()
        })
    });
}

fn tick_auto_rotate(c: &mut Criterion) {
    let settings = Settings::new()
        .with_auto_rotate(Some(2.0))
        .with_rotation_x_bounds(-0.5, 0.5);
    c.bench_function("tick_auto_rotate_1000_frames", |b| {
        b.iter(|| {
            let mut engine = TransformEngine::new();
            for _ in 0..1000 {
                engine.tick(black_box(&settings), 1.0 / 60.0);
            }
            engine.state()
        })
    });
}

criterion_group!(benches, tick_damped, tick_auto_rotate);
criterion_main!(benches);
