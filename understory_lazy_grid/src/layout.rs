// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout protocol driven by the visibility tracker.

use alloc::boxed::Box;
use core::ops::Range;

use kurbo::{Rect, Size};

use crate::{Viewport, VisibilityMap};

/// A layout strategy for a dense strip of items indexed `0..len`.
///
/// A strategy knows how big its content is, where each item goes, and whether
/// an item overlaps a given [`Viewport`]. The
/// [`LazyVisibilityTracker`](crate::LazyVisibilityTracker) only talks to this
/// trait, so strategies can be swapped without touching it.
///
/// All coordinates are in the same space as the viewport frame (typically
/// logical pixels). Indices are positions within the laid-out strip: the first
/// item handed to the layout is index `0`.
///
/// Methods take `&mut self` so implementations are free to maintain internal
/// caches without exposing interior mutability at the call site.
pub trait LazyLayout {
    /// Size of the content for `item_count` items, given the width proposed by
    /// the host.
    ///
    /// `None` means the host has not proposed a width; implementations return
    /// [`Size::ZERO`] in that case, as they do for unbounded widths.
    fn content_size(&mut self, item_count: usize, proposed_width: Option<f64>) -> Size;

    /// Frame of the item at `index` when the content is laid out in `bounds`.
    fn placement(&mut self, index: usize, bounds: Rect) -> Rect;

    /// Returns `true` if the item at `index` overlaps `viewport`.
    fn is_visible(&mut self, index: usize, viewport: &Viewport) -> bool;
}

impl<L: LazyLayout + ?Sized> LazyLayout for &mut L {
    fn content_size(&mut self, item_count: usize, proposed_width: Option<f64>) -> Size {
        (**self).content_size(item_count, proposed_width)
    }

    fn placement(&mut self, index: usize, bounds: Rect) -> Rect {
        (**self).placement(index, bounds)
    }

    fn is_visible(&mut self, index: usize, viewport: &Viewport) -> bool {
        (**self).is_visible(index, viewport)
    }
}

impl<L: LazyLayout + ?Sized> LazyLayout for Box<L> {
    fn content_size(&mut self, item_count: usize, proposed_width: Option<f64>) -> Size {
        (**self).content_size(item_count, proposed_width)
    }

    fn placement(&mut self, index: usize, bounds: Rect) -> Rect {
        (**self).placement(index, bounds)
    }

    fn is_visible(&mut self, index: usize, viewport: &Viewport) -> bool {
        (**self).is_visible(index, viewport)
    }
}

/// Evaluate the visibility of every index in `items` against `viewport`.
///
/// The layout sees each index as its position within `items` (so `items.start`
/// is laid out first), while the returned map is keyed by the indices of
/// `items` themselves.
///
/// This is a full recompute: the cost is linear in `items.len()` and nothing
/// from a previous call is reused.
pub fn compute_visibility<L>(
    layout: &mut L,
    items: Range<usize>,
    viewport: &Viewport,
) -> VisibilityMap
where
    L: LazyLayout + ?Sized,
{
    let start = items.start;
    VisibilityMap::from_fn(items, |index| layout.is_visible(index - start, viewport))
}
