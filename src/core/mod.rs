//! # Core Itinerary Logic
//!
//! This module contains the itinerary's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ItemStore (data)     │
//!                    │  • reconcile() (moves)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Headless  │
//!            │  Adapter   │            │  --apply   │
//!            │ (ratatui)  │            │  (main.rs) │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item` and its `Icon` tag
//! - [`store`]: `ItemStore`, the timeline + pool pair
//! - [`reconcile`]: `Gesture` and the `reconcile()` function
//! - [`clock`]: date source for stamping timeline items
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file, env and seed loading (the only I/O here)

pub mod action;
pub mod clock;
pub mod config;
pub mod item;
pub mod reconcile;
pub mod state;
pub mod store;

pub use item::{Icon, Item};
pub use reconcile::{Gesture, Location, ReconcileError, reconcile};
pub use store::{ItemStore, ListId};
