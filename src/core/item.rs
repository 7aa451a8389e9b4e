//! # Items
//!
//! A single travel entry and its icon tag. The core treats everything here
//! as opaque display data except `id` (identity) and `date` (which tracks
//! the list the item lives in).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon tag attached to an item.
///
/// The known tags map to dedicated glyphs in the adapter. Anything else is
/// kept verbatim in `Other` so it survives every move unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Plane,
    Train,
    Car,
    Ship,
    Other(String),
}

impl Icon {
    pub fn as_str(&self) -> &str {
        match self {
            Icon::Plane => "plane",
            Icon::Train => "train",
            Icon::Car => "car",
            Icon::Ship => "ship",
            Icon::Other(tag) => tag,
        }
    }
}

/// A missing tag is an empty `Other`, drawn with the fallback marker.
impl Default for Icon {
    fn default() -> Self {
        Icon::Other(String::new())
    }
}

impl From<String> for Icon {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "plane" => Icon::Plane,
            "train" => Icon::Train,
            "car" => Icon::Car,
            "ship" => Icon::Ship,
            _ => Icon::Other(tag),
        }
    }
}

impl From<&str> for Icon {
    fn from(tag: &str) -> Self {
        Icon::from(tag.to_string())
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A travel entry.
///
/// `date` is present exactly when the item sits in the timeline. The
/// reconciler stamps it on pool → timeline moves and clears it on the way back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub color: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<Icon>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: None,
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
