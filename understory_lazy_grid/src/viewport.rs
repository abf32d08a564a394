// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible region of a scroll container.

use kurbo::{Insets, Point, Rect, Size, Vec2};

/// The currently visible region of a scroll container.
///
/// `frame` is the content frame expressed in the scroll container's coordinate
/// space: its origin is where the top-left corner of the content currently sits
/// relative to the container, so it becomes more negative as the content is
/// scrolled down or right. Its size is the size of the container.
///
/// `safe_area` holds the safe-area insets reported by the host (`x0` left,
/// `y0` top, `x1` right, `y1` bottom). Visibility checks extend the visible
/// region by these insets, since content scrolls underneath them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    frame: Rect,
    safe_area: Insets,
}

impl Viewport {
    /// Creates a viewport from a content frame and safe-area insets.
    #[must_use]
    pub const fn new(frame: Rect, safe_area: Insets) -> Self {
        Self { frame, safe_area }
    }

    /// Creates a viewport from a content origin, a container size, and insets.
    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size, safe_area: Insets) -> Self {
        Self::new(Rect::from_origin_size(origin, size), safe_area)
    }

    /// Returns a copy with the content origin moved, for scroll events.
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self::from_origin_size(origin, self.size(), self.safe_area)
    }

    /// Returns a copy with the container resized, for resize events.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self::from_origin_size(self.origin(), size, self.safe_area)
    }

    /// Returns a copy with different safe-area insets.
    #[must_use]
    pub const fn with_safe_area(self, safe_area: Insets) -> Self {
        Self::new(self.frame, safe_area)
    }

    /// The content frame.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// The safe-area insets.
    #[must_use]
    pub const fn safe_area(&self) -> Insets {
        self.safe_area
    }

    /// Origin of the content frame.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.frame.origin()
    }

    /// Size of the scroll container.
    #[must_use]
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// Width of the scroll container.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.frame.width()
    }

    /// Height of the scroll container.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.frame.height()
    }

    /// Top safe-area inset.
    #[must_use]
    pub const fn inset_top(&self) -> f64 {
        self.safe_area.y0
    }

    /// Bottom safe-area inset.
    #[must_use]
    pub const fn inset_bottom(&self) -> f64 {
        self.safe_area.y1
    }

    /// Left safe-area inset.
    #[must_use]
    pub const fn inset_left(&self) -> f64 {
        self.safe_area.x0
    }

    /// Right safe-area inset.
    #[must_use]
    pub const fn inset_right(&self) -> f64 {
        self.safe_area.x1
    }

    /// How far the content has been scrolled: the negated frame origin.
    #[must_use]
    pub fn scroll_offset(&self) -> Vec2 {
        -self.origin().to_vec2()
    }

    /// The vertical band, in content coordinates, that counts as visible.
    ///
    /// This is `(-origin.y - inset_top, -origin.y + height + inset_bottom)`.
    #[must_use]
    pub fn visible_band(&self) -> (f64, f64) {
        let scrolled = -self.frame.y0;
        (
            scrolled - self.inset_top(),
            scrolled + self.height() + self.inset_bottom(),
        )
    }
}
