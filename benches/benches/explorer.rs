// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_explorer::{Explorer, InputEvent, PointerButton, Surface};
use canopy_outline::{NodeKind, Outline};
use canopy_viewport::{ViewportConfig, ViewportTransform, ZoomStep};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

/// Surface that only counts bytes, so formatting cost stays in the measurement.
#[derive(Default)]
struct Sink(usize);

impl Surface<u32> for Sink {
    fn set_transform(&mut self, transform: &str) {
        self.0 += transform.len();
    }

    fn set_readout(&mut self, text: &str) {
        self.0 += text.len();
    }
}

fn explorer() -> Explorer<u32, Sink> {
    let mut outline = Outline::new();
    outline.insert_root(0, NodeKind::Branch);
    let config = ViewportConfig::default().with_zoom_step(ZoomStep::Multiplicative(1.1));
    Explorer::new(ViewportTransform::new(config), outline, Sink::default())
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer/drag");
    let moves: Vec<InputEvent> = (0..256)
        .map(|i| InputEvent::PointerMove {
            position: Point::new(f64::from(i), f64::from(i % 17)),
        })
        .collect();
    group.throughput(Throughput::Elements(moves.len() as u64));

    group.bench_function("pointer_moves_256", |b| {
        let mut ex = explorer();
        b.iter(|| {
            ex.handle(&InputEvent::PointerDown {
                position: Point::ZERO,
                button: PointerButton::Primary,
            });
            for event in &moves {
                black_box(ex.handle(event));
            }
            ex.handle(&InputEvent::PointerUp);
        });
    });

    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer/wheel");

    group.bench_function("zoom_in_out", |b| {
        let mut ex = explorer();
        let position = Point::new(320.0, 240.0);
        b.iter(|| {
            black_box(ex.handle(&InputEvent::Wheel {
                position,
                delta_y: -1.0,
            }));
            black_box(ex.handle(&InputEvent::Wheel {
                position,
                delta_y: 1.0,
            }));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_wheel);
criterion_main!(benches);
