//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: itinerary title and status message
//! - `HelpBar`: key hints for the current mode
//! - `Card`: one item, with icon, date and description
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ItemList`: a scrollable column of cards with layout caching and hit
//!   testing. Its persistent half, `ItemListState`, lives in `TuiState`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (Top status bar)
//! ├── help_bar.rs   (Bottom key hints)
//! ├── card.rs       (Single item card, icon lookup)
//! └── item_list.rs  (Scrollable card column)
//! ```

pub mod card;
mod help_bar;
pub mod item_list;
mod title_bar;

pub use card::Card;
pub use help_bar::HelpBar;
pub use item_list::{ItemList, ItemListState};
pub use title_bar::TitleBar;
