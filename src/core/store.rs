//! # Item Store
//!
//! The whole itinerary: two named, ordered lists of items.
//!
//! ```text
//! ItemStore
//! ├── timeline: Vec<Item>   // scheduled, every item dated
//! └── pool: Vec<Item>       // unscheduled, no item dated
//! ```
//!
//! The store only holds data. Moving items is the reconciler's job; the
//! store is replaced wholesale with its output.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::core::item::Item;

/// One of the two fixed lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListId {
    Timeline,
    Pool,
}

impl ListId {
    pub fn as_str(self) -> &'static str {
        match self {
            ListId::Timeline => "timeline",
            ListId::Pool => "pool",
        }
    }

    /// The list that is not `self`.
    pub fn other(self) -> Self {
        match self {
            ListId::Timeline => ListId::Pool,
            ListId::Pool => ListId::Timeline,
        }
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownListError(pub String);

impl fmt::Display for UnknownListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown list '{}' (expected 'timeline' or 'pool')", self.0)
    }
}

impl std::error::Error for UnknownListError {}

impl FromStr for ListId {
    type Err = UnknownListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "timeline" => Ok(ListId::Timeline),
            "pool" => Ok(ListId::Pool),
            other => Err(UnknownListError(other.to_string())),
        }
    }
}

/// Invariant violations found in externally supplied store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateId(String),
    /// A timeline item has no date (or an empty one).
    MissingDate(String),
    /// A pool item carries a date.
    UnexpectedDate(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "item id '{id}' appears more than once"),
            StoreError::MissingDate(id) => write!(f, "timeline item '{id}' has no date"),
            StoreError::UnexpectedDate(id) => write!(f, "pool item '{id}' must not have a date"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStore {
    #[serde(default)]
    pub timeline: Vec<Item>,
    #[serde(default)]
    pub pool: Vec<Item>,
}

impl ItemStore {
    pub fn new(timeline: Vec<Item>, pool: Vec<Item>) -> Self {
        Self { timeline, pool }
    }

    /// The built-in starting itinerary: a trip through France with Italy still to plan.
    pub fn seeded() -> Self {
        Self {
            timeline: vec![
                Item::new(
                    "event1",
                    "Flight to Paris",
                    "Departing from JFK Airport to Charles de Gaulle Airport",
                    "plane",
                    "bg-blue-500",
                )
                .with_date("June 1, 2024"),
                Item::new(
                    "event2",
                    "Train to Lyon",
                    "Taking the TGV from Paris to Lyon",
                    "train",
                    "bg-green-500",
                )
                .with_date("June 3, 2024"),
            ],
            pool: vec![
                Item::new(
                    "place1",
                    "Drive to Marseille",
                    "Rent a car and drive from Lyon to Marseille",
                    "car",
                    "bg-yellow-500",
                ),
                Item::new(
                    "place2",
                    "Cruise to Naples",
                    "Board a cruise ship from Marseille to Naples",
                    "ship",
                    "bg-purple-500",
                ),
                Item::new(
                    "place3",
                    "Visit Rome",
                    "Take a train from Naples to Rome",
                    "train",
                    "bg-red-500",
                ),
            ],
        }
    }

    pub fn list(&self, id: ListId) -> &[Item] {
        match id {
            ListId::Timeline => &self.timeline,
            ListId::Pool => &self.pool,
        }
    }

    pub(crate) fn list_mut(&mut self, id: ListId) -> &mut Vec<Item> {
        match id {
            ListId::Timeline => &mut self.timeline,
            ListId::Pool => &mut self.pool,
        }
    }

    /// Total number of items across both lists.
    pub fn len(&self) -> usize {
        self.timeline.len() + self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty() && self.pool.is_empty()
    }

    /// Every item id, timeline first, in list order.
    pub fn ids(&self) -> Vec<&str> {
        self.timeline
            .iter()
            .chain(self.pool.iter())
            .map(|item| item.id.as_str())
            .collect()
    }

    /// Finds an item by id, returning the list it lives in and its index.
    pub fn locate(&self, id: &str) -> Option<(ListId, usize)> {
        [ListId::Timeline, ListId::Pool].into_iter().find_map(|list| {
            self.list(list)
                .iter()
                .position(|item| item.id == id)
                .map(|index| (list, index))
        })
    }

    /// Swap in a new pair of lists.
    pub fn replace(&mut self, next: ItemStore) {
        *self = next;
    }

    /// Check the store invariants for contents that did not come from the reconciler.
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for item in self.timeline.iter().chain(self.pool.iter()) {
            if !seen.insert(item.id.as_str()) {
                return Err(StoreError::DuplicateId(item.id.clone()));
            }
        }
        if let Some(item) = self
            .timeline
            .iter()
            .find(|item| item.date.as_deref().is_none_or(str::is_empty))
        {
            return Err(StoreError::MissingDate(item.id.clone()));
        }
        if let Some(item) = self.pool.iter().find(|item| item.date.is_some()) {
            return Err(StoreError::UnexpectedDate(item.id.clone()));
        }
        Ok(())
    }
}
