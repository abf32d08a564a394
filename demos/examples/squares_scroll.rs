// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy square grid: a host scrolling through 3000 tiles.
//!
//! This example stands in for a UI host:
//! - sizes the scroll canvas from the layout,
//! - reports scroll and resize events to a `LazyVisibilityTracker`,
//! - "renders" full tiles for visible indices and placeholders for the rest,
//! - changes the maximum tile length as a slider would.
//!
//! Run:
//! - `cargo run -p understory_lazy_grid_demos --example squares_scroll`
//! - `RUST_LOG=trace cargo run -p understory_lazy_grid_demos --example squares_scroll`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Insets, Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_lazy_grid::{LazyVisibilityTracker, SquaresLayout, Viewport, VisibilityMap};

const ITEM_COUNT: usize = 3_000;

fn render(tracker: &mut LazyVisibilityTracker<SquaresLayout>, map: &VisibilityMap, width: f64) {
    let size = tracker.content_size(Some(width));
    let bounds = Rect::from_origin_size(Point::ZERO, size);
    let (Some(first), Some(last)) = (map.first_visible(), map.last_visible()) else {
        println!("  nothing visible, {} placeholders", map.len());
        return;
    };
    let first_frame = tracker.placement(first, bounds);
    let last_frame = tracker.placement(last, bounds);
    println!(
        "  canvas {:.0}x{:.0}: tiles {first}..={last} ({} full, {} placeholders)",
        size.width,
        size.height,
        map.visible_count(),
        map.len() - map.visible_count(),
    );
    println!("  first tile at {first_frame:?}");
    println!("  last tile at {last_frame:?}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut tracker = LazyVisibilityTracker::new(0..ITEM_COUNT, SquaresLayout::new(150.0));

    let updates = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&updates);
    tracker.on_change(move |_| counter.set(counter.get() + 1));

    println!("before the first layout pass:");
    let map = tracker.initial_map();
    render(&mut tracker, &map, 300.0);

    let safe_area = Insets::new(0.0, 47.0, 0.0, 34.0);
    let mut viewport =
        Viewport::from_origin_size(Point::ZERO, Size::new(300.0, 800.0), safe_area);

    println!("first layout pass:");
    let map = tracker.update(viewport);
    render(&mut tracker, &map, viewport.width());

    for scrolled in [450.0, 5_000.0, 224_500.0] {
        viewport = viewport.with_origin(Point::new(0.0, -scrolled));
        println!("scrolled to {scrolled}:");
        let map = tracker.update(viewport);
        render(&mut tracker, &map, viewport.width());
    }

    viewport = viewport.with_size(Size::new(700.0, 400.0));
    println!("resized to {:?}:", viewport.size());
    let map = tracker.update(viewport);
    render(&mut tracker, &map, viewport.width());

    tracker.layout_mut().set_max_item_length(60.0);
    println!("max tile length set to 60:");
    let map = tracker.refresh();
    render(&mut tracker, &map, viewport.width());

    println!("{} visibility maps delivered", updates.get());
}
