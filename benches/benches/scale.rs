// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_scale` layout, fill mapping and drawing.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;

use understory_scale::{ScaleConfig, ScaleGeometry};
use understory_scale_control::{PaintRecorder, ScaleControl};
use understory_scale_overlay::{GradientOverlay, ThumbImage};

fn config(marks: u32) -> ScaleConfig {
    ScaleConfig::new()
        .with_mark_value_start(10)
        .with_mark_value_interval(5)
        .with_mark_count(marks)
        .with_sub_mark_count(4)
        .with_sub_mark_buffer_count(3)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_layout");
    for marks in [11_u32, 101, 1001] {
        let geometry = ScaleGeometry::new(config(marks));
        group.bench_with_input(BenchmarkId::new("marks", marks), &geometry, |b, g| {
            b.iter(|| {
                let mut sum = 0.0;
                for slot in g.marks(black_box(1280.0)) {
                    sum += slot.offset;
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let geometry = ScaleGeometry::new(config(101));
    let mapper = geometry.fill_mapper();
    let max = geometry.config().maximum_allowed_value();

    c.bench_function("fill_width_sweep", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for value in 0..=max {
                sum += mapper.fill_width(black_box(value), 1280.0);
            }
            black_box(sum)
        });
    });

    c.bench_function("value_at_width_sweep", |b| {
        b.iter(|| {
            let mut sum = 0_i64;
            for x in 0..1280 {
                sum += mapper.value_at_width(black_box(f64::from(x)), 1280.0);
            }
            black_box(sum)
        });
    });
}

fn bench_draw(c: &mut Criterion) {
    let size = Size::new(1280.0, 48.0);
    let control = ScaleControl::new(config(101));
    let mut painter = PaintRecorder::new();
    c.bench_function("control_draw", |b| {
        b.iter(|| {
            painter.clear();
            control.draw(black_box(size), &mut painter);
            black_box(painter.ops.len())
        });
    });

    let mut overlay = GradientOverlay::new(ScaleControl::new(config(101)), ThumbImage::new((), ()));
    overlay.set_size(size);
    c.bench_function("overlay_drag_and_draw", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 7.0) % size.width;
            overlay.drag_to_offset(black_box(x));
            painter.clear();
            overlay.draw(&mut painter);
            black_box(painter.ops.len())
        });
    });
}

criterion_group!(benches, bench_layout, bench_fill, bench_draw);
criterion_main!(benches);
