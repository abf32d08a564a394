// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_lazy_grid --heading-base-level=0

//! Understory Lazy Grid: square-tile grid geometry and viewport visibility tracking.
//!
//! This crate provides a small, renderer-agnostic core for lazily rendering a
//! dense strip of items indexed `0..len` inside a scroll container. Items that
//! overlap the viewport get their full content; every other item can be drawn
//! as a cheap placeholder of the right size.
//!
//! The core concepts are:
//!
//! - [`geometry`]: pure functions for a square-tile grid packed into a width:
//!   column count, row count, tile side, content size, per-index placement, and
//!   a visibility predicate. [`GridParameters`] bundles the two inputs.
//! - [`Viewport`]: the content frame of the scroll container plus safe-area
//!   insets, as reported by the host on every scroll or resize.
//! - [`LazyLayout`]: a three-method protocol (content size, placement,
//!   visibility) implemented by layout strategies.
//! - [`SquaresLayout`]: the square grid as a [`LazyLayout`], with a settable
//!   maximum tile length.
//! - [`StackLayout`]: a single-column [`LazyLayout`] with per-item heights,
//!   for hosts whose rows are not uniform.
//! - [`VisibilityMap`]: one flag per item, rebuilt wholesale per measurement.
//! - [`LazyVisibilityTracker`]: owns a layout and the last viewport, recomputes
//!   a [`VisibilityMap`] on every update, and notifies registered listeners.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the actual data and view/widget instances.
//! - Sizing the scrollable canvas with [`LazyLayout::content_size`] and
//!   positioning children with [`LazyLayout::placement`].
//! - Calling [`LazyVisibilityTracker::update`] when scroll or viewport changes,
//!   and [`LazyVisibilityTracker::refresh`] after changing layout parameters.
//! - Rendering full content for visible items and placeholders for the rest.
//!
//! ## Coordinate convention
//!
//! A [`Viewport`] carries the origin of the *content frame* in the scroll
//! container's coordinate space. Scrolling down moves the content up, so the
//! origin's `y` becomes more negative; the visibility predicate negates it to
//! find the visible band in content coordinates. Hosts that track a positive
//! scroll distance must pass its negation as the origin.
//!
//! ## Minimal example
//!
//! A 3000-item grid of tiles at most 150 wide in a 300×800 container:
//!
//! ```rust
//! use kurbo::{Insets, Point, Size};
//! use understory_lazy_grid::{LazyVisibilityTracker, SquaresLayout, Viewport};
//!
//! let mut tracker = LazyVisibilityTracker::new(0..3000, SquaresLayout::new(150.0));
//!
//! // Two columns of 150×150 tiles, 1500 rows.
//! assert_eq!(tracker.content_size(Some(300.0)), Size::new(300.0, 225_000.0));
//!
//! // Before the first measurement everything is a placeholder.
//! assert_eq!(tracker.initial_map().visible_count(), 0);
//!
//! // The host scrolled 500 down.
//! let viewport = Viewport::from_origin_size(
//!     Point::new(0.0, -500.0),
//!     Size::new(300.0, 800.0),
//!     Insets::ZERO,
//! );
//! let map = tracker.update(viewport);
//! assert!(map.get(6));
//! assert!(!map.get(20));
//!
//! // Host frameworks would now render indices in `map.visible_indices()` fully
//! // and the rest as empty tiles.
//! ```
//!
//! ## Scaling
//!
//! Each update evaluates every item, so its cost grows linearly with the item
//! count. That suits collections in the low thousands. For much larger
//! collections, compute a contiguous visible window instead of a full map.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: floating point support for [`kurbo`].
//! - `tracing`: emit `tracing` events when visibility is recomputed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;
mod layout;
mod squares;
mod stack;
mod tracker;
mod viewport;
mod visibility;

pub use geometry::GridParameters;
pub use layout::{LazyLayout, compute_visibility};
pub use squares::SquaresLayout;
pub use stack::StackLayout;
pub use tracker::{LazyVisibilityTracker, ListenerId, TrackerState};
pub use viewport::Viewport;
pub use visibility::VisibilityMap;
