// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_border::{
    BorderGeometry, BorderRepresentation, BorderStyle, Corner, FixedSize, HitModifier,
    InteractionState, LayoutEngine, ViewportCoordinates,
};

fn bench_geometry_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("border/geometry_rebuild");
    let rect = Rect::new(100.0, 100.0, 400.0, 300.0);

    for resolution in [0_u32, 4, 20, 100, 1_000] {
        let mut style = BorderStyle::default();
        style.set_corner_radius_strength(0.5);
        style.set_corner_resolution(resolution);
        group.throughput(Throughput::Elements(u64::from(resolution.max(1)) * 4));

        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &style,
            |b, style| {
                let mut geometry = BorderGeometry::new();
                let mut revision = 0_u64;
                b.iter(|| {
                    // A fresh revision forces regeneration into the reused buffers.
                    revision = revision.wrapping_add(1);
                    geometry.rebuild(black_box(rect), style, revision);
                    black_box(geometry.outline().len());
                });
            },
        );
    }

    group.finish();
}

fn bench_drag_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("border/drag_steps");
    let steps = 256_u64;
    group.throughput(Throughput::Elements(steps));

    for proportional in [false, true] {
        group.bench_function(BenchmarkId::new("corner", proportional), |b| {
            let mut engine = LayoutEngine::new();
            engine.set_provider(Box::new(FixedSize {
                intrinsic: Size::new(4.0, 3.0),
                minimum: Size::ZERO,
            }));
            engine.set_proportional_resize(proportional);
            engine.constraints_mut().set_minimum(Size::new(20.0, 20.0));

            b.iter(|| {
                let mut rect = Rect::new(100.0, 100.0, 400.0, 300.0);
                engine.start_session(
                    Point::new(400.0, 300.0),
                    InteractionState::AdjustingCorner(Corner::TopRight),
                );
                for i in 0..steps {
                    let t = i as f64;
                    let pos = Point::new(400.0 + 150.0 * (t * 0.05).sin(), 300.0 + t * 0.5);
                    if let Some(next) = engine.step(pos, rect) {
                        rect = next;
                    }
                }
                engine.end_session();
                black_box(rect)
            });
        });
    }

    group.finish();
}

fn bench_hover_and_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("border/representation");

    group.bench_function("hover_drag_build", |b| {
        let mut border = BorderRepresentation::new(ViewportCoordinates::from_size(1920.0, 1080.0));
        border.set_corners(Point::new(0.1, 0.1), Point::new(0.4, 0.4));
        border.set_corner_radius_strength(0.25);

        b.iter(|| {
            let grab = border.pixel_rect().origin();
            border.compute_interaction_state(grab, HitModifier::None);
            border.start_widget_interaction(grab);
            border.widget_interaction(grab + black_box(Vec2::new(-8.0, -4.0)));
            border.widget_interaction(grab);
            border.end_widget_interaction();
            black_box(border.revision())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_geometry_rebuild,
    bench_drag_steps,
    bench_hover_and_drag
);
criterion_main!(benches);
