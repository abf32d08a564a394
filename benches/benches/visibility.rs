// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cost of a full visibility recompute per scroll event.
//!
//! Every update walks all items, so these numbers grow linearly with the item
//! count and show where a full map stops being cheap.
//!
//! Run with: cargo bench -p understory_lazy_grid_benches --bench visibility

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kurbo::{Insets, Point, Size};
use understory_lazy_grid::geometry::{content_size, placement};
use understory_lazy_grid::{LazyVisibilityTracker, SquaresLayout, StackLayout, Viewport};

fn viewport(scrolled: f64) -> Viewport {
    Viewport::from_origin_size(
        Point::new(0.0, -scrolled),
        Size::new(390.0, 844.0),
        Insets::new(0.0, 47.0, 0.0, 34.0),
    )
}

fn bench_squares_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("squares_update");
    for item_count in [3_000_usize, 30_000, 100_000] {
        group.throughput(Throughput::Elements(item_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &item_count,
            |b, &item_count| {
                let mut tracker =
                    LazyVisibilityTracker::new(0..item_count, SquaresLayout::new(120.0));
                let mut scrolled = 0.0;
                b.iter(|| {
                    scrolled = (scrolled + 37.0) % 50_000.0;
                    black_box(tracker.update(viewport(scrolled)))
                });
            },
        );
    }
    group.finish();
}

fn bench_stack_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_update");
    for item_count in [3_000_usize, 30_000] {
        group.throughput(Throughput::Elements(item_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &item_count,
            |b, &item_count| {
                let mut tracker =
                    LazyVisibilityTracker::new(0..item_count, StackLayout::uniform(item_count, 44.0));
                let mut scrolled = 0.0;
                b.iter(|| {
                    scrolled = (scrolled + 37.0) % 50_000.0;
                    black_box(tracker.update(viewport(scrolled)))
                });
            },
        );
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let size = content_size(3_000, 390.0, 120.0);
    let bounds = kurbo::Rect::from_origin_size(Point::ZERO, size);
    c.bench_function("placement_3000", |b| {
        b.iter(|| {
            for index in 0..3_000 {
                black_box(placement(black_box(index), bounds, 120.0));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_squares_update,
    bench_stack_update,
    bench_geometry
);
criterion_main!(benches);
