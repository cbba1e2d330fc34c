//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: The two navigation tabs and their highlight
//! - `StatusBar`: Status message, loading spinner, key hints
//! - `CardWidget`: One card (list entry or detail)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `CardList`: Scrollable, selectable list of cards with layout caching
//! - `DetailPane`: Scrollable single card with a focused back control
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: `CardListState` lives in `TuiState`, `CardList` is created each
//! frame with borrowed state and the cards as props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── nav_bar.rs     (Top navigation tabs)
//! ├── status_bar.rs  (Bottom status line)
//! ├── card.rs        (Single card renderer)
//! ├── card_list.rs   (Scrollable card container)
//! └── detail.rs      (Single artwork view)
//! ```

pub mod card;
pub mod card_list;
pub mod detail;
mod nav_bar;
mod status_bar;

pub use card::CardWidget;
pub use card_list::{CardList, CardListEvent, CardListState};
pub use detail::{DetailEvent, DetailPane, DetailState};
pub use nav_bar::NavBar;
pub use status_bar::{Hints, StatusBar};
