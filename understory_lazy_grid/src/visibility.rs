// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item visibility flags produced by a single viewport measurement.

use alloc::vec::Vec;
use core::ops::Range;

/// Visibility of every item in a contiguous index range.
///
/// A map is built in one go from a viewport measurement and never changes
/// afterwards; a new measurement produces a new map. Hosts keep the latest map
/// and use [`VisibilityMap::get`] to decide whether an item gets its full
/// content or an empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityMap {
    start: usize,
    flags: Vec<bool>,
}

impl VisibilityMap {
    /// Creates a map whose first flag belongs to index `start`.
    ///
    /// Flags that would belong to an index past `usize::MAX` are dropped, so
    /// every covered index is representable.
    #[must_use]
    pub fn new(start: usize, mut flags: Vec<bool>) -> Self {
        flags.truncate(usize::MAX - start);
        Self { start, flags }
    }

    /// A map reporting every index in `items` as hidden.
    ///
    /// This is what a host sees before the first viewport measurement.
    #[must_use]
    pub fn hidden(items: Range<usize>) -> Self {
        Self {
            start: items.start,
            flags: alloc::vec![false; items.len()],
        }
    }

    /// Builds a map by evaluating `is_visible` for each index of `items`, in order.
    pub fn from_fn(items: Range<usize>, is_visible: impl FnMut(usize) -> bool) -> Self {
        let start = items.start;
        Self {
            start,
            flags: items.map(is_visible).collect(),
        }
    }

    /// First index covered by this map.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Number of indices covered by this map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the map covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The covered index range.
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.start + self.flags.len()
    }

    /// Returns whether `index` is visible.
    ///
    /// Indices outside the covered range are reported as hidden.
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        index
            .checked_sub(self.start)
            .and_then(|i| self.flags.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Flags in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// Iterates `(index, visible)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        let start = self.start;
        self.flags
            .iter()
            .enumerate()
            .map(move |(i, visible)| (start + i, *visible))
    }

    /// Iterates the visible indices in ascending order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .filter_map(|(index, visible)| visible.then_some(index))
    }

    /// Number of visible indices.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.flags.iter().filter(|visible| **visible).count()
    }

    /// Returns the first visible index, if any.
    #[must_use]
    pub fn first_visible(&self) -> Option<usize> {
        self.flags
            .iter()
            .position(|visible| *visible)
            .map(|i| self.start + i)
    }

    /// Returns the last visible index, if any.
    #[must_use]
    pub fn last_visible(&self) -> Option<usize> {
        self.flags
            .iter()
            .rposition(|visible| *visible)
            .map(|i| self.start + i)
    }
}
