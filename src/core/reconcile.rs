//! # Reconciler
//!
//! Turns a finished drag gesture into the next [`ItemStore`].
//!
//! ```text
//! ItemStore + Gesture  →  reconcile()  →  ItemStore'
//! ```
//!
//! Three cases:
//!
//! - **No destination**: the drag was dropped outside both lists. Nothing changes.
//! - **Same list**: remove at the source index, insert at the destination index
//!   of the shortened list.
//! - **Across lists**: remove from the source, stamp today's date (into the
//!   timeline) or clear it (into the pool), insert into the destination.
//!
//! Indices are checked before anything moves. An out-of-range index is
//! reported as [`ReconcileError::InvalidIndex`] and the input store is left
//! as it was.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::clock::Clock;
use crate::core::store::{ItemStore, ListId};

/// A position in one of the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub list: ListId,
    pub index: usize,
}

impl Location {
    pub fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.list, self.index)
    }
}

/// A completed drag: where it started and, unless cancelled, where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    pub source: Location,
    pub destination: Option<Location>,
}

impl Gesture {
    pub fn moved(source: Location, destination: Location) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(source: Location) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Text form: `pool/0>timeline/1`, or `pool/0>-` for a cancelled drag.
impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destination {
            Some(destination) => write!(f, "{}>{}", self.source, destination),
            None => write!(f, "{}>-", self.source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureParseError {
    MissingSeparator(String),
    BadLocation(String),
}

impl fmt::Display for GestureParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureParseError::MissingSeparator(s) => {
                write!(f, "gesture '{s}' must look like <list>/<index>><list>/<index>")
            }
            GestureParseError::BadLocation(s) => {
                write!(f, "'{s}' is not a <list>/<index> location")
            }
        }
    }
}

impl std::error::Error for GestureParseError {}

impl FromStr for Location {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GestureParseError::BadLocation(s.to_string());
        let (list, index) = s.trim().split_once('/').ok_or_else(bad)?;
        let list = list.parse::<ListId>().map_err(|_| bad())?;
        let index = index.trim().parse::<usize>().map_err(|_| bad())?;
        Ok(Location { list, index })
    }
}

impl FromStr for Gesture {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, destination) = s
            .split_once('>')
            .ok_or_else(|| GestureParseError::MissingSeparator(s.to_string()))?;
        let source = source.parse::<Location>()?;
        let destination = match destination.trim() {
            "" | "-" => None,
            other => Some(other.parse::<Location>()?),
        };
        Ok(Gesture {
            source,
            destination,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// `index` is out of bounds for `list`, which held `len` items at call time.
    InvalidIndex {
        list: ListId,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::InvalidIndex { list, index, len } => {
                write!(f, "index {index} is out of range for {list} ({len} items)")
            }
        }
    }
}

impl std::error::Error for ReconcileError {}

/// Compute the store that results from `gesture`.
///
/// `clock` supplies the date stamped on items entering the timeline.
pub fn reconcile(
    store: &ItemStore,
    gesture: &Gesture,
    clock: &dyn Clock,
) -> Result<ItemStore, ReconcileError> {
    let Some(destination) = gesture.destination else {
        return Ok(store.clone());
    };
    let source = gesture.source;

    let source_len = store.list(source.list).len();
    if source.index >= source_len {
        return Err(ReconcileError::InvalidIndex {
            list: source.list,
            index: source.index,
            len: source_len,
        });
    }

    // Insertion bound is measured after the removal
    let destination_len = if source.list == destination.list {
        source_len - 1
    } else {
        store.list(destination.list).len()
    };
    if destination.index > destination_len {
        return Err(ReconcileError::InvalidIndex {
            list: destination.list,
            index: destination.index,
            len: destination_len,
        });
    }

    let mut next = store.clone();
    let mut item = next.list_mut(source.list).remove(source.index);
    if source.list != destination.list {
        item.date = match destination.list {
            ListId::Timeline => Some(clock.today_label()),
            ListId::Pool => None,
        };
    }
    next.list_mut(destination.list).insert(destination.index, item);
    Ok(next)
}
