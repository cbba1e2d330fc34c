//! # Application State
//!
//! Core business state for Gallery. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── collection: Arc<dyn Collection>   // where records come from
//! ├── images: ImageService              // image + record URL templates
//! ├── tab: Option<Tab>                  // highlighted navigation tab
//! ├── view: View                        // display region contents
//! ├── revision: u64                     // bumped on every view commit
//! ├── generation: u64                   // id of the latest request
//! ├── discard_stale: bool               // drop responses to older requests
//! ├── is_loading: bool                  // latest request still in flight
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{Collection, ImageService};
use crate::core::config::ResolvedConfig;
use crate::core::view::View;

/// The two navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Artworks,
    Artists,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Artworks, Tab::Artists];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Artworks => "Artworks",
            Tab::Artists => "Artists",
        }
    }

    /// The fetch this tab triggers.
    pub fn request(self) -> Request {
        match self {
            Tab::Artworks => Request::Artworks,
            Tab::Artists => Request::Artists,
        }
    }

    pub fn other(self) -> Tab {
        match self {
            Tab::Artworks => Tab::Artists,
            Tab::Artists => Tab::Artworks,
        }
    }
}

/// One fetch against the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Artworks,
    Artists,
    ArtworkDetail(u64),
}

pub struct App {
    pub collection: Arc<dyn Collection>,
    pub images: ImageService,
    /// `None` until the first explicit navigation, even though the artworks
    /// list is loaded on start.
    pub tab: Option<Tab>,
    pub view: View,
    /// Incremented every time `view` is replaced.
    pub revision: u64,
    pub generation: u64,
    pub discard_stale: bool,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    pub fn new(collection: Arc<dyn Collection>, images: ImageService) -> Self {
        Self {
            collection,
            images,
            tab: None,
            view: View::Loading,
            revision: 0,
            generation: 0,
            discard_stale: false,
            is_loading: false,
            status_message: String::from("Welcome to Gallery!"),
        }
    }

    pub fn from_config(collection: Arc<dyn Collection>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(
            collection,
            ImageService::new(config.image_base_url.clone(), config.website_url.clone()),
        );
        app.discard_stale = config.discard_stale_responses;
        app
    }

    /// The only way the highlighted tab changes. Exactly one tab ends up active.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = Some(tab);
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.tab == Some(tab)
    }

    /// Replace the display region wholesale.
    pub fn commit(&mut self, view: View) {
        self.view = view;
        self.revision += 1;
    }

    /// Claim a generation number for a new request.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
