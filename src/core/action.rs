//! # Actions
//!
//! Everything that can happen in Gallery becomes an `Action`.
//! User presses `2`? That's `Action::Navigate(Tab::Artists)`.
//! API responds? That's `Action::Loaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the `Effect` the event loop should carry out. No I/O
//! happens here: fetching is an effect, not a call.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Overlapping requests
//!
//! Requests are never cancelled. By default whichever response arrives last
//! owns the display region. With `discard_stale` set, a response carrying an
//! older generation than the latest request is dropped instead.

use log::{debug, error, info};

use crate::api::{ArtistSummary, ArtworkDetail, ArtworkSummary, FetchError};
use crate::core::state::{App, Request, Tab};
use crate::core::view;

#[derive(Debug)]
pub enum Action {
    /// First frame: load the artworks list without highlighting a tab.
    Start,
    Navigate(Tab),
    OpenArtwork(u64),
    Back,
    Loaded { generation: u64, payload: Payload },
    Failed { generation: u64, error: FetchError },
    Quit,
}

/// A successful response, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Artworks(Vec<ArtworkSummary>),
    Artists(Vec<ArtistSummary>),
    Artwork(ArtworkDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch { request: Request, generation: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => begin(app, Request::Artworks),
        Action::Navigate(tab) => {
            app.select_tab(tab);
            begin(app, tab.request())
        }
        Action::OpenArtwork(id) => begin(app, Request::ArtworkDetail(id)),
        // Always a fresh fetch, never the list we showed before
        Action::Back => begin(app, Request::Artworks),
        Action::Loaded { generation, payload } => {
            if is_stale(app, generation) {
                return Effect::None;
            }
            settle(app, generation);
            let (next, status) = match payload {
                Payload::Artworks(artworks) => (
                    view::artwork_list(&artworks, &app.images),
                    format!("{} artworks", artworks.len()),
                ),
                Payload::Artists(artists) => (
                    view::artist_list(&artists),
                    format!("{} artists", artists.len()),
                ),
                Payload::Artwork(artwork) => (
                    view::artwork_detail(&artwork, &app.images),
                    format!("Artwork {}", artwork.id),
                ),
            };
            app.commit(next);
            app.status_message = status;
            Effect::None
        }
        Action::Failed { generation, error } => {
            if is_stale(app, generation) {
                return Effect::None;
            }
            settle(app, generation);
            error!("An error occurred: {}", error);
            app.commit(view::View::Error(error.user_message().to_string()));
            app.status_message = String::from("Request failed");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin(app: &mut App, request: Request) -> Effect {
    let generation = app.next_generation();
    info!("Requesting {:?} (generation {})", request, generation);
    app.is_loading = true;
    app.status_message = String::from("Loading...");
    Effect::Fetch {
        request,
        generation,
    }
}

fn is_stale(app: &App, generation: u64) -> bool {
    let stale = app.discard_stale && generation != app.generation;
    if stale {
        debug!(
            "Dropping response for generation {} (latest is {})",
            generation, app.generation
        );
    }
    stale
}

/// The spinner stops only when the latest request has answered.
fn settle(app: &mut App, generation: u64) {
    if generation == app.generation {
        app.is_loading = false;
    }
}
