// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`LazyLayout`] that stacks full-width rows of individual heights.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::geometry::{is_bounded_width, span_touches_band};
use crate::{LazyLayout, Viewport};

/// Single-column layout with per-item heights and a lazily extended table of
/// row offsets.
///
/// Hosts can start with estimated heights and refine them as real measurements
/// arrive via [`StackLayout::set_height`]. A change only drops the offsets
/// after the changed item, and they are extended again on the next lookup.
///
/// Items past the known heights are treated as zero-height.
#[derive(Debug, Clone, Default)]
pub struct StackLayout {
    heights: Vec<f64>,
    /// `starts[i]` is the offset of item `i`; valid for every stored entry.
    starts: Vec<f64>,
}

impl StackLayout {
    /// Creates an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heights: Vec::new(),
            starts: Vec::new(),
        }
    }

    /// Creates a layout with `len` items of the same `height`.
    #[must_use]
    pub fn uniform(len: usize, height: f64) -> Self {
        let mut layout = Self::new();
        layout.rebuild(core::iter::repeat_n(height, len), &|h| *h);
        layout
    }

    /// Replaces all heights with `height_fn` applied to each of `items`.
    pub fn rebuild<T, I>(&mut self, items: I, height_fn: &dyn Fn(&T) -> f64)
    where
        I: IntoIterator<Item = T>,
    {
        self.heights.clear();
        self.heights
            .extend(items.into_iter().map(|item| sanitize(height_fn(&item))));
        self.starts.clear();
    }

    /// Number of items with a known height.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if no heights are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Grows or shrinks to `len` items. New items get height `0.0`.
    pub fn set_len(&mut self, len: usize) {
        self.heights.resize(len, 0.0);
        // Offsets of the remaining items do not depend on anything after them.
        self.starts.truncate(len);
    }

    /// Updates the height of one item, growing storage if needed.
    pub fn set_height(&mut self, index: usize, height: f64) {
        if index >= self.heights.len() {
            self.set_len(index + 1);
        }
        self.heights[index] = sanitize(height);
        self.starts.truncate(index + 1);
    }

    /// Height of the item at `index`, or `0.0` if unknown.
    #[must_use]
    pub fn height_of(&self, index: usize) -> f64 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// Distance from the top of the stack to the top of the item at `index`.
    ///
    /// Indices past the end are clamped to the last known item.
    pub fn offset_of(&mut self, index: usize) -> f64 {
        let Some(last) = self.heights.len().checked_sub(1) else {
            return 0.0;
        };
        let index = index.min(last);
        while self.starts.len() <= index {
            let next = match self.starts.last() {
                Some(start) => start + self.heights[self.starts.len() - 1],
                None => 0.0,
            };
            self.starts.push(next);
        }
        self.starts[index]
    }

    /// Combined height of the first `len` items.
    pub fn total_height_for_len(&mut self, len: usize) -> f64 {
        match len.min(self.heights.len()).checked_sub(1) {
            Some(last) => self.offset_of(last) + self.height_of(last),
            None => 0.0,
        }
    }

    /// Combined height of all known items.
    pub fn total_height(&mut self) -> f64 {
        self.total_height_for_len(self.heights.len())
    }
}

/// Heights must be finite; negatives are clamped to `0.0`.
fn sanitize(height: f64) -> f64 {
    debug_assert!(
        height.is_finite(),
        "StackLayout heights must be finite; got {height:?}"
    );
    height.max(0.0)
}

impl LazyLayout for StackLayout {
    fn content_size(&mut self, item_count: usize, proposed_width: Option<f64>) -> Size {
        let Some(width) = proposed_width else {
            return Size::ZERO;
        };
        if item_count == 0 || !is_bounded_width(width) || width <= 0.0 {
            return Size::ZERO;
        }
        Size::new(width, self.total_height_for_len(item_count))
    }

    fn placement(&mut self, index: usize, bounds: Rect) -> Rect {
        if index >= self.heights.len() {
            return Rect::from_origin_size(bounds.origin(), Size::ZERO);
        }
        let y = bounds.y0 + self.offset_of(index);
        Rect::new(bounds.x0, y, bounds.x1, y + self.height_of(index))
    }

    fn is_visible(&mut self, index: usize, viewport: &Viewport) -> bool {
        if index >= self.heights.len() {
            return false;
        }
        let (top, bottom) = viewport.visible_band();
        span_touches_band(self.offset_of(index), self.height_of(index), top, bottom)
    }
}
