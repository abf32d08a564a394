// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios: a host scrolling and resizing a lazily rendered grid.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Insets, Point, Rect, Size};
use understory_lazy_grid::geometry::{self, GridParameters};
use understory_lazy_grid::{
    LazyLayout, LazyVisibilityTracker, SquaresLayout, TrackerState, Viewport, VisibilityMap,
};

#[test]
fn demo_grid_dimensions() {
    let grid = GridParameters::new(300.0, 150.0);
    assert_eq!(grid.column_count().get(), 2);
    assert_eq!(grid.item_side(), 150.0);
    assert_eq!(grid.row_count(3000), 1500);
    assert_eq!(grid.content_size(3000), Size::new(300.0, 225_000.0));
}

#[test]
fn narrow_grid_dimensions() {
    let grid = GridParameters::new(100.0, 150.0);
    assert_eq!(grid.column_count().get(), 1);
    assert_eq!(grid.item_side(), 100.0);
    assert_eq!(grid.row_count(10), 10);
}

#[test]
fn scrolled_viewport_scenario() {
    // Row 3 ends at 600 >= 500 and starts at 450 <= 1300.
    assert!(geometry::is_visible(6, 300.0, 150.0, -500.0, 800.0, 0.0, 0.0));
    assert!(geometry::is_visible(7, 300.0, 150.0, -500.0, 800.0, 0.0, 0.0));
    // Row 10 starts at 1500 > 1300.
    assert!(!geometry::is_visible(20, 300.0, 150.0, -500.0, 800.0, 0.0, 0.0));
    assert!(!geometry::is_visible(21, 300.0, 150.0, -500.0, 800.0, 0.0, 0.0));
}

/// The visibility predicate reads the viewport origin as a content-frame
/// origin and negates it. A positive value therefore describes content pushed
/// *down* inside the container, which puts the band above the first row. This
/// pins the convention rather than claiming it is general geometry.
#[test]
fn positive_origin_is_read_as_content_pushed_down() {
    // Origin +500: band is [-500, 300]. Rows 0 through 2 touch it; row 2
    // starts exactly at 300.
    assert!(geometry::is_visible(0, 300.0, 150.0, 500.0, 800.0, 0.0, 0.0));
    assert!(geometry::is_visible(5, 300.0, 150.0, 500.0, 800.0, 0.0, 0.0));
    assert!(!geometry::is_visible(6, 300.0, 150.0, 500.0, 800.0, 0.0, 0.0));
    // The same magnitude with the opposite sign selects a different window.
    assert!(!geometry::is_visible(0, 300.0, 150.0, -500.0, 800.0, 0.0, 0.0));
}

#[test]
fn host_session() {
    let mut tracker = LazyVisibilityTracker::new(0..3000, SquaresLayout::new(150.0));

    // The host keeps the latest map and re-renders from it.
    let rendered: Rc<RefCell<VisibilityMap>> = Rc::new(RefCell::new(tracker.initial_map()));
    let sink = Rc::clone(&rendered);
    tracker.on_change(move |map| *sink.borrow_mut() = map.clone());

    assert_eq!(rendered.borrow().visible_count(), 0);

    // First layout pass with a notch and a home indicator.
    let safe_area = Insets::new(0.0, 47.0, 0.0, 34.0);
    let viewport = Viewport::from_origin_size(Point::ZERO, Size::new(300.0, 800.0), safe_area);
    let _ = tracker.update(viewport);
    assert_eq!(tracker.state(), TrackerState::Measured(viewport));
    // Band [-47, 834]: rows 0 through 5.
    assert_eq!(rendered.borrow().last_visible(), Some(11));

    // Scroll down by a few rows.
    let viewport = viewport.with_origin(Point::new(0.0, -1000.0));
    let _ = tracker.update(viewport);
    // Band [953, 1834]: rows 6 ([900, 1050]) through 12 ([1800, 1950]).
    assert_eq!(rendered.borrow().first_visible(), Some(12));
    assert_eq!(rendered.borrow().last_visible(), Some(25));

    // Rotate to a wider container: three columns of 150.
    let viewport = viewport.with_size(Size::new(450.0, 400.0));
    let _ = tracker.update(viewport);
    // Band [953, 1434]: rows 6 through 9.
    assert_eq!(rendered.borrow().first_visible(), Some(18));
    assert_eq!(rendered.borrow().last_visible(), Some(29));

    // The slider shrinks tiles to at most 90: five columns of 90.
    tracker.layout_mut().set_max_item_length(90.0);
    let _ = tracker.refresh();
    // Band [953, 1434]: rows 10 ([900, 990]) through 15 ([1350, 1440]).
    assert_eq!(rendered.borrow().first_visible(), Some(50));
    assert_eq!(rendered.borrow().last_visible(), Some(79));

    // Content and placement agree with the new shape.
    let size = tracker.content_size(Some(450.0));
    assert_eq!(size, Size::new(450.0, 600.0 * 90.0));
    let bounds = Rect::from_origin_size(Point::ZERO, size);
    assert_eq!(
        tracker.placement(57, bounds),
        Rect::new(180.0, 990.0, 270.0, 1080.0)
    );
}

#[test]
fn every_visible_tile_intersects_the_band() {
    let mut layout = SquaresLayout::new(120.0);
    let viewport = Viewport::from_origin_size(
        Point::new(0.0, -2345.0),
        Size::new(390.0, 844.0),
        Insets::new(0.0, 47.0, 0.0, 34.0),
    );
    let (top, bottom) = viewport.visible_band();
    let size = layout.content_size(1000, Some(viewport.width()));
    let bounds = Rect::from_origin_size(Point::ZERO, size);
    for index in 0..1000 {
        let frame = layout.placement(index, bounds);
        let overlaps = frame.y1 >= top && frame.y0 <= bottom;
        assert_eq!(layout.is_visible(index, &viewport), overlaps, "index {index}");
    }
}
