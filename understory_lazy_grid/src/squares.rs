// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`LazyLayout`] that packs square tiles into as many columns as fit.
//!
//! The column count is derived from the available width and a maximum tile
//! length; tiles then stretch to share the width evenly. Rows scroll
//! vertically. See [`crate::geometry`] for the underlying arithmetic.

use kurbo::{Rect, Size};

use crate::geometry::{self, GridParameters};
use crate::{LazyLayout, Viewport};

/// Square-tile grid layout.
///
/// `max_item_length` is the one tunable of this layout. Hosts typically bind it
/// to a control (a slider, a zoom gesture) and update it with
/// [`SquaresLayout::set_max_item_length`]; every computation reads the current
/// value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquaresLayout {
    max_item_length: f64,
}

impl SquaresLayout {
    /// Creates a layout whose tiles are at most `max_item_length` wide, unless
    /// the container is narrower than one tile.
    #[must_use]
    pub const fn new(max_item_length: f64) -> Self {
        Self { max_item_length }
    }

    /// Returns the maximum tile length.
    #[must_use]
    pub const fn max_item_length(&self) -> f64 {
        self.max_item_length
    }

    /// Sets the maximum tile length.
    pub fn set_max_item_length(&mut self, max_item_length: f64) {
        debug_assert!(
            !max_item_length.is_nan(),
            "SquaresLayout max_item_length must not be NaN"
        );
        self.max_item_length = max_item_length;
    }

    /// Grid parameters for a container of `container_width`.
    #[must_use]
    pub const fn parameters(&self, container_width: f64) -> GridParameters {
        GridParameters::new(container_width, self.max_item_length)
    }
}

impl LazyLayout for SquaresLayout {
    fn content_size(&mut self, item_count: usize, proposed_width: Option<f64>) -> Size {
        match proposed_width {
            Some(width) => geometry::content_size(item_count, width, self.max_item_length),
            None => Size::ZERO,
        }
    }

    fn placement(&mut self, index: usize, bounds: Rect) -> Rect {
        geometry::placement(index, bounds, self.max_item_length)
    }

    /// The grid is assumed to span the viewport's width, so the container
    /// width used for the column count is `viewport.width()`.
    fn is_visible(&mut self, index: usize, viewport: &Viewport) -> bool {
        geometry::is_visible(
            index,
            viewport.width(),
            self.max_item_length,
            viewport.origin().y,
            viewport.height(),
            viewport.inset_top(),
            viewport.inset_bottom(),
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect, Size};

    use super::SquaresLayout;
    use crate::{LazyLayout, Viewport};

    fn viewport(origin_y: f64) -> Viewport {
        Viewport::from_origin_size(
            Point::new(0.0, origin_y),
            Size::new(300.0, 800.0),
            Insets::ZERO,
        )
    }

    #[test]
    fn content_size_needs_a_proposal() {
        let mut layout = SquaresLayout::new(150.0);
        assert_eq!(layout.content_size(3000, None), Size::ZERO);
        assert_eq!(
            layout.content_size(3000, Some(300.0)),
            Size::new(300.0, 225_000.0)
        );
        assert_eq!(layout.content_size(3000, Some(f64::INFINITY)), Size::ZERO);
    }

    #[test]
    fn placement_uses_bounds_width() {
        let mut layout = SquaresLayout::new(150.0);
        let bounds = Rect::new(0.0, 0.0, 300.0, 225_000.0);
        assert_eq!(
            layout.placement(2999, bounds),
            Rect::new(150.0, 224_850.0, 300.0, 225_000.0)
        );
    }

    #[test]
    fn visibility_follows_scroll() {
        let mut layout = SquaresLayout::new(150.0);
        // At rest the first 6 rows touch the 800-tall band [0, 800].
        assert!(layout.is_visible(0, &viewport(0.0)));
        assert!(layout.is_visible(11, &viewport(0.0)));
        assert!(!layout.is_visible(12, &viewport(0.0)));
        // Scrolled 500 down.
        assert!(!layout.is_visible(0, &viewport(-500.0)));
        assert!(layout.is_visible(6, &viewport(-500.0)));
        assert!(!layout.is_visible(20, &viewport(-500.0)));
    }

    #[test]
    fn changing_max_item_length_reshapes_the_grid() {
        let mut layout = SquaresLayout::new(150.0);
        assert_eq!(layout.parameters(300.0).column_count().get(), 2);
        layout.set_max_item_length(100.0);
        assert_eq!(layout.max_item_length(), 100.0);
        assert_eq!(layout.parameters(300.0).column_count().get(), 3);
        // Index 6 now sits on row 2 ([200, 300]), inside the band at rest.
        assert!(layout.is_visible(6, &viewport(0.0)));
        // Row 8 starts at 800, the band's bottom edge.
        assert!(layout.is_visible(24, &viewport(0.0)));
        assert!(!layout.is_visible(27, &viewport(0.0)));
    }
}
