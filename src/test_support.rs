//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::clock::FixedClock;
use crate::core::state::App;
use crate::core::store::ItemStore;

/// The label `fixed_clock()` stamps on items entering the timeline.
pub const TODAY_LABEL: &str = "October 17, 2026";

pub fn fixed_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date"))
}

/// Creates a test App over the seeded store with a pinned clock.
pub fn test_app() -> App {
    test_app_with(ItemStore::seeded())
}

pub fn test_app_with(store: ItemStore) -> App {
    App::new(store, Arc::new(fixed_clock()))
}
