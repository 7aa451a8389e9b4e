//! # Application State
//!
//! Core business state for the itinerary editor. This module contains
//! domain state only; cursors, drag previews and scroll offsets live in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── store: ItemStore           // timeline + pool
//! ├── clock: Arc<dyn Clock>      // date source for stamping
//! ├── title: String              // heading above the timeline
//! ├── pool_title: String         // heading above the pool
//! ├── show_descriptions: bool    // render description lines on cards
//! ├── status_message: String     // status bar text
//! └── last_error: Option<String> // last rejected gesture
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::config::{DEFAULT_POOL_TITLE, DEFAULT_TITLE, ResolvedConfig};
use crate::core::store::ItemStore;

pub struct App {
    pub store: ItemStore,
    pub clock: Arc<dyn Clock>,
    pub title: String,
    pub pool_title: String,
    pub show_descriptions: bool,
    pub status_message: String,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(store: ItemStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            title: DEFAULT_TITLE.to_string(),
            pool_title: DEFAULT_POOL_TITLE.to_string(),
            show_descriptions: true,
            status_message: String::from("Drag a card to plan your trip"),
            last_error: None,
        }
    }

    pub fn from_config(store: ItemStore, clock: Arc<dyn Clock>, config: &ResolvedConfig) -> Self {
        Self {
            title: config.title.clone(),
            pool_title: config.pool_title.clone(),
            show_descriptions: config.show_descriptions,
            ..Self::new(store, clock)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.title, "My Travel Itinerary");
        assert_eq!(app.pool_title, "Available Places");
        assert!(app.show_descriptions);
        assert!(app.last_error.is_none());
        assert_eq!(app.store.len(), 5);
    }
}
