//! # Drag State
//!
//! A drag in progress belongs to the adapter. The core only ever sees the
//! finished [`Gesture`]. While the card is held, the lists are drawn from a
//! preview store: the result the drop would produce right now.

use std::borrow::Cow;

use crate::core::clock::Clock;
use crate::core::reconcile::{Gesture, Location, reconcile};
use crate::core::store::{ItemStore, ListId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInput {
    Keyboard,
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub source: Location,
    /// Current drop slot. None while the pointer is outside both lists.
    pub hover: Option<Location>,
    pub input: DragInput,
}

/// Largest valid drop index for `list` while `source` is held.
///
/// Within the source list the card has been lifted out, so appending lands
/// at `len - 1`.
pub fn max_drop_index(store: &ItemStore, source: Location, list: ListId) -> usize {
    let len = store.list(list).len();
    if list == source.list {
        len.saturating_sub(1)
    } else {
        len
    }
}

impl DragState {
    /// Pick up the card at `source`. It starts hovering over its own slot.
    pub fn grab(source: Location, input: DragInput) -> Self {
        Self {
            source,
            hover: Some(source),
            input,
        }
    }

    pub fn gesture(&self) -> Gesture {
        Gesture {
            source: self.source,
            destination: self.hover,
        }
    }

    /// Move the drop slot up (`delta < 0`) or down within its list.
    pub fn step(&mut self, store: &ItemStore, delta: isize) {
        let current = self.hover.unwrap_or(self.source);
        let max = max_drop_index(store, self.source, current.list);
        let index = current.index.saturating_add_signed(delta).min(max);
        self.hover = Some(Location::new(current.list, index));
    }

    /// Move the drop slot to `list`, keeping the index where it fits.
    pub fn switch_to(&mut self, store: &ItemStore, list: ListId) {
        let current = self.hover.unwrap_or(self.source);
        let max = max_drop_index(store, self.source, list);
        self.hover = Some(Location::new(list, current.index.min(max)));
    }

    /// Point the drop slot at a raw list position (from hit testing), or nowhere.
    pub fn hover_at(&mut self, store: &ItemStore, slot: Option<(ListId, usize)>) {
        self.hover = slot.map(|(list, index)| {
            Location::new(list, index.min(max_drop_index(store, self.source, list)))
        });
    }

    /// The store as it would look if the card were dropped now.
    pub fn preview<'a>(&self, store: &'a ItemStore, clock: &dyn Clock) -> Cow<'a, ItemStore> {
        if self.hover.is_none() {
            return Cow::Borrowed(store);
        }
        match reconcile(store, &self.gesture(), clock) {
            Ok(next) => Cow::Owned(next),
            Err(e) => {
                log::warn!("Drag preview failed: {}", e);
                Cow::Borrowed(store)
            }
        }
    }

    /// Where the held card appears in the preview.
    pub fn held_at(&self) -> Location {
        self.hover.unwrap_or(self.source)
    }
}
