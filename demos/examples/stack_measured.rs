// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swapping layouts: the same tracker driving a grid and a measured stack.
//!
//! The host picks a layout at runtime and stores it as a `Box<dyn LazyLayout>`.
//! The stack layout starts from estimated row heights and is refined as rows
//! are "measured", which shifts the visible window.
//!
//! Run:
//! - `cargo run -p understory_lazy_grid_demos --example stack_measured`

use kurbo::{Insets, Point, Size};
use tracing_subscriber::EnvFilter;
use understory_lazy_grid::{
    LazyLayout, LazyVisibilityTracker, SquaresLayout, StackLayout, Viewport,
};

const ITEM_COUNT: usize = 200;
const ESTIMATED_HEIGHT: f64 = 44.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let viewport = Viewport::from_origin_size(
        Point::new(0.0, -1_000.0),
        Size::new(390.0, 844.0),
        Insets::ZERO,
    );

    let layouts: [(&str, Box<dyn LazyLayout>); 2] = [
        ("grid", Box::new(SquaresLayout::new(120.0))),
        ("stack", Box::new(StackLayout::uniform(ITEM_COUNT, ESTIMATED_HEIGHT))),
    ];
    for (name, layout) in layouts {
        let mut tracker = LazyVisibilityTracker::new(0..ITEM_COUNT, layout);
        let map = tracker.update(viewport);
        println!(
            "{name}: {} visible, {:?}..={:?}, canvas {:?}",
            map.visible_count(),
            map.first_visible(),
            map.last_visible(),
            tracker.content_size(Some(viewport.width())),
        );
    }

    // Measure the first rows: every third row turns out to be twice as tall.
    let mut tracker = LazyVisibilityTracker::new(
        0..ITEM_COUNT,
        StackLayout::uniform(ITEM_COUNT, ESTIMATED_HEIGHT),
    );
    let estimated = tracker.update(viewport);
    for index in (0..ITEM_COUNT).step_by(3) {
        tracker
            .layout_mut()
            .set_height(index, ESTIMATED_HEIGHT * 2.0);
    }
    let measured = tracker.refresh();
    println!(
        "stack estimated: {:?}..={:?}",
        estimated.first_visible(),
        estimated.last_visible()
    );
    println!(
        "stack measured:  {:?}..={:?}, total height {:.0}",
        measured.first_visible(),
        measured.last_visible(),
        tracker.layout_mut().total_height(),
    );
}
