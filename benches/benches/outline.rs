// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_outline::{NodeKind, Outline};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Builds a complete tree with `fanout` children per branch, `depth` levels of
/// branches, and leaves at the bottom.
fn build(fanout: u32, depth: u32) -> Outline<u32> {
    let mut outline = Outline::new();
    let root = outline.insert_root(0, NodeKind::Branch).unwrap();
    let mut next_key = 1;
    let mut level = vec![root];
    for d in 0..depth {
        let kind = if d + 1 == depth {
            NodeKind::Leaf
        } else {
            NodeKind::Branch
        };
        let mut next_level = Vec::with_capacity(level.len() * fanout as usize);
        for parent in level {
            for _ in 0..fanout {
                next_level.push(outline.insert_child(parent, next_key, kind).unwrap());
                next_key += 1;
            }
        }
        level = next_level;
    }
    outline
}

fn bench_expand_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/expand_collapse_all");

    for depth in [2_u32, 3, 4, 5] {
        let mut outline = build(8, depth);
        group.throughput(Throughput::Elements(outline.len() as u64));

        group.bench_function(BenchmarkId::new("expand_then_collapse", depth), |b| {
            b.iter(|| {
                black_box(outline.expand_all());
                black_box(outline.collapse_all());
            });
        });
    }

    group.finish();
}

fn bench_visible_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/visible_rows");

    // Fully expanded: every node is a row.
    for depth in [2_u32, 3, 4, 5] {
        let mut outline = build(8, depth);
        outline.expand_all();
        group.throughput(Throughput::Elements(outline.len() as u64));
        group.bench_with_input(BenchmarkId::new("expanded", depth), &outline, |b, o| {
            b.iter(|| black_box(o.visible_rows()));
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/build");

    for depth in [3_u32, 4] {
        group.bench_function(BenchmarkId::new("fanout_8", depth), |b| {
            b.iter(|| black_box(build(8, depth)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expand_collapse, bench_visible_rows, bench_build);
criterion_main!(benches);
