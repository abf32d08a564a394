// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square-tile grid geometry.
//!
//! Every function here is pure and total: degenerate inputs (zero items,
//! non-positive or unbounded widths, NaN) produce a column count of one, a
//! zero size, or a zero-size rect rather than panicking.
//!
//! The grid is packed into a container of a given width. Tiles are square and
//! never wider than `max_item_length` unless the container itself is narrower,
//! in which case a single column fills the container.

use core::num::NonZeroUsize;

use kurbo::{Point, Rect, Size};

/// Number of columns that fit into `container_width` for tiles of at most
/// `max_item_length`.
///
/// Returns `1` when the container is not wider than one tile. Otherwise this is
/// `floor(container_width / max_item_length)`. Non-finite widths and
/// non-positive tile lengths also yield a single column.
#[must_use]
pub fn column_count(container_width: f64, max_item_length: f64) -> NonZeroUsize {
    // Written so NaN in either input falls through to a single column.
    let packs = container_width > max_item_length
        && max_item_length > 0.0
        && container_width.is_finite();
    if !packs {
        return NonZeroUsize::MIN;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Truncation is the floor of a positive ratio; the cast saturates on overflow"
    )]
    let columns = (container_width / max_item_length) as usize;
    NonZeroUsize::new(columns).unwrap_or(NonZeroUsize::MIN)
}

/// Number of rows needed to hold `item_count` items in `column_count` columns.
///
/// This is `ceil(item_count / column_count)`, and is zero only for zero items.
#[must_use]
pub const fn row_count(item_count: usize, column_count: NonZeroUsize) -> usize {
    let quotient = item_count / column_count.get();
    let remainder = item_count % column_count.get();
    if remainder == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Side length of a single square tile.
///
/// This is `min(container_width / column_count, container_width)`.
#[must_use]
pub fn item_side(container_width: f64, column_count: NonZeroUsize) -> f64 {
    (container_width / column_count.get() as f64).min(container_width)
}

/// Total size of the grid content for `item_count` items.
///
/// The width is the container width and the height is `item_side * row_count`.
///
/// Returns [`Size::ZERO`] when there are no items, when the width is not
/// positive, or when the width is unbounded. Some hosts report an "unbounded"
/// proposal while measuring as `f64::MAX` rather than infinity; neither that
/// sentinel nor infinity or NaN must be turned into a grid.
#[must_use]
pub fn content_size(item_count: usize, container_width: f64, max_item_length: f64) -> Size {
    if !is_bounded_width(container_width) {
        #[cfg(feature = "tracing")]
        tracing::trace!(container_width, item_count, "unbounded container width, no layout");
        return Size::ZERO;
    }
    if item_count == 0 || container_width <= 0.0 {
        return Size::ZERO;
    }
    let columns = column_count(container_width, max_item_length);
    let rows = row_count(item_count, columns);
    let side = item_side(container_width, columns);
    Size::new(container_width, side * rows as f64)
}

/// Returns `true` for widths strictly below `f64::MAX`.
///
/// `f64::MAX`, infinity and NaN are all treated as an unbounded proposal.
#[must_use]
pub fn is_bounded_width(container_width: f64) -> bool {
    container_width < f64::MAX
}

/// Top-left anchored square for the item at `index` inside `bounds`.
///
/// The container width is `bounds.width()`. Items fill rows left to right,
/// then continue on the next row:
///
/// - `column = index % column_count`
/// - `row = index / column_count`
///
/// Bounds with a non-positive (or non-finite) width or height cannot host a
/// layout; in that case a zero-size rect at the bounds origin is returned.
#[must_use]
pub fn placement(index: usize, bounds: Rect, max_item_length: f64) -> Rect {
    let width = bounds.width();
    let height = bounds.height();
    let placeable = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();
    if !placeable {
        return Rect::from_origin_size(bounds.origin(), Size::ZERO);
    }
    let columns = column_count(width, max_item_length);
    let side = item_side(width, columns);
    let column = index % columns.get();
    let row = index / columns.get();
    let origin = Point::new(
        bounds.x0 + column as f64 * side,
        bounds.y0 + row as f64 * side,
    );
    Rect::from_origin_size(origin, Size::new(side, side))
}

/// Returns `true` if the row holding `index` overlaps the visible band.
///
/// `viewport_origin_y` is the origin of the content frame in the scroll
/// container's coordinate space: it becomes more negative as the content
/// scrolls down. The visible band is therefore
/// `[-viewport_origin_y - inset_top, -viewport_origin_y + viewport_height + inset_bottom]`,
/// and an item is visible when its row touches that band (edges inclusive).
///
/// The negation of the origin is part of the contract. Passing a positive
/// scroll distance here instead of a frame origin selects rows above the
/// content, not below.
#[must_use]
pub fn is_visible(
    index: usize,
    container_width: f64,
    max_item_length: f64,
    viewport_origin_y: f64,
    viewport_height: f64,
    inset_top: f64,
    inset_bottom: f64,
) -> bool {
    let columns = column_count(container_width, max_item_length);
    let side = item_side(container_width, columns);
    let row = index / columns.get();
    let y_offset = side * row as f64;
    let top = -viewport_origin_y - inset_top;
    let bottom = -viewport_origin_y + viewport_height + inset_bottom;
    span_touches_band(y_offset, side, top, bottom)
}

/// Inclusive overlap test between `[start, start + extent]` and `[top, bottom]`.
pub(crate) fn span_touches_band(start: f64, extent: f64, top: f64, bottom: f64) -> bool {
    start + extent >= top && start <= bottom
}

/// The inputs that determine the shape of a square grid.
///
/// This bundles the container width measured by the host with the tile length
/// the host exposes as a setting, and forwards to the free functions in this
/// module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParameters {
    /// Width available to the grid.
    pub container_width: f64,
    /// Upper bound on a tile's side length.
    pub max_item_length: f64,
}

impl GridParameters {
    /// Creates grid parameters.
    #[must_use]
    pub const fn new(container_width: f64, max_item_length: f64) -> Self {
        Self {
            container_width,
            max_item_length,
        }
    }

    /// See [`column_count`].
    #[must_use]
    pub fn column_count(&self) -> NonZeroUsize {
        column_count(self.container_width, self.max_item_length)
    }

    /// See [`row_count`].
    #[must_use]
    pub fn row_count(&self, item_count: usize) -> usize {
        row_count(item_count, self.column_count())
    }

    /// See [`item_side`].
    #[must_use]
    pub fn item_side(&self) -> f64 {
        item_side(self.container_width, self.column_count())
    }

    /// See [`content_size`].
    #[must_use]
    pub fn content_size(&self, item_count: usize) -> Size {
        content_size(item_count, self.container_width, self.max_item_length)
    }

    /// Placement of `index` for a grid whose top-left corner is at `origin`.
    ///
    /// Unlike [`placement`], this does not require a bounds height: the grid
    /// is assumed to be as tall as it needs to be.
    #[must_use]
    pub fn placement(&self, index: usize, origin: Point) -> Rect {
        let width = self.container_width;
        if !is_bounded_width(width) || width <= 0.0 {
            return Rect::from_origin_size(origin, Size::ZERO);
        }
        let bounds = Rect::from_origin_size(origin, Size::new(width, f64::MAX));
        placement(index, bounds, self.max_item_length)
    }

    /// See [`is_visible`].
    #[must_use]
    pub fn is_visible(
        &self,
        index: usize,
        viewport_origin_y: f64,
        viewport_height: f64,
        inset_top: f64,
        inset_bottom: f64,
    ) -> bool {
        is_visible(
            index,
            self.container_width,
            self.max_item_length,
            viewport_origin_y,
            viewport_height,
            inset_top,
            inset_bottom,
        )
    }
}
