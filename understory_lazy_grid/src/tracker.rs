// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a [`LazyLayout`] and the last viewport measurement.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::{Rect, Size};

use crate::{LazyLayout, Viewport, VisibilityMap, compute_visibility};

/// Measurement state of a [`LazyVisibilityTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    /// No viewport has been reported yet; every item is hidden.
    Unmeasured,
    /// The last viewport reported by the host.
    Measured(Viewport),
}

/// Handle returned by [`LazyVisibilityTracker::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&VisibilityMap)>;

/// Tracks which items of a range overlap the viewport of a scroll container.
///
/// This type:
/// - owns a [`LazyLayout`] and the index range it lays out,
/// - remembers the last [`Viewport`] the host reported,
/// - rebuilds a [`VisibilityMap`] on every [`update`](Self::update),
/// - forwards each new map to the listeners registered with
///   [`on_change`](Self::on_change).
///
/// Every update re-evaluates every index: the cost is linear in the number of
/// items per scroll or resize event. That is fine for item counts in the low
/// thousands; larger collections want a windowed strategy that only walks the
/// rows near the viewport.
///
/// ```rust
/// use kurbo::{Insets, Point, Size};
/// use understory_lazy_grid::{LazyVisibilityTracker, SquaresLayout, Viewport};
///
/// let mut tracker = LazyVisibilityTracker::new(0..3000, SquaresLayout::new(150.0));
/// assert!(tracker.initial_map().visible_indices().next().is_none());
///
/// let viewport = Viewport::from_origin_size(
///     Point::new(0.0, -500.0),
///     Size::new(300.0, 800.0),
///     Insets::ZERO,
/// );
/// let map = tracker.update(viewport);
/// assert_eq!(map.first_visible(), Some(6));
/// assert_eq!(map.last_visible(), Some(17));
/// ```
pub struct LazyVisibilityTracker<L: LazyLayout> {
    items: Range<usize>,
    layout: L,
    state: TrackerState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl<L: LazyLayout> fmt::Debug for LazyVisibilityTracker<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyVisibilityTracker")
            .field("items", &self.items)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<L: LazyLayout> LazyVisibilityTracker<L> {
    /// Creates an unmeasured tracker for `items` laid out by `layout`.
    #[must_use]
    pub fn new(items: Range<usize>, layout: L) -> Self {
        Self {
            items,
            layout,
            state: TrackerState::Unmeasured,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// The tracked index range.
    #[must_use]
    pub fn items(&self) -> Range<usize> {
        self.items.clone()
    }

    /// Number of tracked items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Replaces the tracked index range.
    ///
    /// The measurement state is kept; call [`refresh`](Self::refresh) to get a
    /// map for the new range.
    pub fn set_items(&mut self, items: Range<usize>) {
        self.items = items;
    }

    /// Returns a shared reference to the layout.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Returns a mutable reference to the layout.
    ///
    /// Changing layout parameters does not recompute visibility by itself; call
    /// [`refresh`](Self::refresh) afterwards.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// Current measurement state.
    #[must_use]
    pub const fn state(&self) -> TrackerState {
        self.state
    }

    /// Returns `true` once a viewport has been reported.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        matches!(self.state, TrackerState::Measured(_))
    }

    /// The last reported viewport, if any.
    #[must_use]
    pub const fn viewport(&self) -> Option<Viewport> {
        match self.state {
            TrackerState::Measured(viewport) => Some(viewport),
            TrackerState::Unmeasured => None,
        }
    }

    /// The map hosts should use before the first measurement: everything hidden.
    #[must_use]
    pub fn initial_map(&self) -> VisibilityMap {
        VisibilityMap::hidden(self.items.clone())
    }

    /// Records a new viewport and recomputes visibility for every item.
    ///
    /// The returned map is also delivered to every registered listener.
    pub fn update(&mut self, viewport: Viewport) -> VisibilityMap {
        #[cfg(feature = "tracing")]
        {
            if !self.is_measured() {
                tracing::trace!(
                    width = viewport.width(),
                    height = viewport.height(),
                    "tracker measured"
                );
            }
        }
        self.state = TrackerState::Measured(viewport);
        let map = compute_visibility(&mut self.layout, self.items.clone(), &viewport);
        self.publish(&map);
        map
    }

    /// Recomputes visibility against the last reported viewport.
    ///
    /// Use this after changing the layout or the item range. While unmeasured
    /// this yields (and publishes) the all-hidden map.
    pub fn refresh(&mut self) -> VisibilityMap {
        let map = match self.state {
            TrackerState::Measured(viewport) => {
                compute_visibility(&mut self.layout, self.items.clone(), &viewport)
            }
            TrackerState::Unmeasured => self.initial_map(),
        };
        self.publish(&map);
        map
    }

    /// Returns whether `index` is visible in the last reported viewport.
    ///
    /// Always `false` before the first measurement and for indices outside the
    /// tracked range.
    #[must_use]
    pub fn is_visible(&mut self, index: usize) -> bool {
        match self.state {
            TrackerState::Measured(viewport) if self.items.contains(&index) => {
                self.layout.is_visible(index - self.items.start, &viewport)
            }
            _ => false,
        }
    }

    /// Size of the content for the tracked items at `proposed_width`.
    #[must_use]
    pub fn content_size(&mut self, proposed_width: Option<f64>) -> Size {
        self.layout.content_size(self.items.len(), proposed_width)
    }

    /// Frame of the item at `index` when the content is laid out in `bounds`.
    ///
    /// `index` is an absolute index; layouts see its position within the
    /// tracked range. Indices outside the tracked range get a zero-size rect
    /// at the bounds origin.
    #[must_use]
    pub fn placement(&mut self, index: usize, bounds: Rect) -> Rect {
        if !self.items.contains(&index) {
            return Rect::from_origin_size(bounds.origin(), Size::ZERO);
        }
        self.layout.placement(index - self.items.start, bounds)
    }

    /// Registers a listener called with every new map.
    pub fn on_change(&mut self, listener: impl FnMut(&VisibilityMap) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn publish(&mut self, map: &VisibilityMap) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = map.len(),
            visible = map.visible_count(),
            first = ?map.first_visible(),
            last = ?map.last_visible(),
            listeners = self.listeners.len(),
            "visibility recomputed"
        );
        for (_, listener) in &mut self.listeners {
            listener(map);
        }
    }
}
