//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! terminal event ──► event_to_action ──► update() ──► Effect::Fetch
//!                                                          │
//!                              tokio::spawn(perform_fetch) ◄┘
//!                                          │
//!       update(Loaded | Failed) ◄── mpsc ◄─┘
//! ```
//!
//! - **Loading**: redraws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::api::{Collection, MuseumClient};
use crate::core::action::{Action, Effect, Payload, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Request, Tab};
use crate::core::view::View;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardListEvent, CardListState, DetailEvent, DetailState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub card_list: CardListState,
    pub detail: DetailState,
    /// `App::revision` the presentation state was last reset for
    pub seen_revision: u64,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            card_list: CardListState::new(),
            detail: DetailState::new(),
            seen_revision: 0,
        }
    }

    /// Drop selection and scroll when the display region was replaced.
    pub fn sync(&mut self, app: &App) {
        if self.seen_revision != app.revision {
            self.card_list.reset();
            self.detail.reset();
            self.seen_revision = app.revision;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the collection client from a resolved config.
pub fn build_collection(config: &ResolvedConfig) -> Arc<dyn Collection> {
    Arc::new(MuseumClient::new(
        config.api_base_url.clone(),
        config.artworks_limit,
        config.artists_limit,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let collection = build_collection(&config);
    let mut app = App::from_config(collection, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = TerminalModeGuard::new();
        event_loop(&mut terminal, &mut app, &mut tui)
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    // Artworks load on start, without highlighting a tab
    dispatch(app, Action::Start, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(app);

        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = event_to_action(&event, app, tui, frame_area)
                && dispatch(app, action, &tx)
            {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(app, action, &tx);
        }
    }

    Ok(())
}

/// Run an action through `update` and carry out its effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Fetch {
            request,
            generation,
        } => {
            spawn_fetch(app.collection.clone(), request, generation, tx.clone());
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

/// Translate a terminal event into a core action, updating presentation
/// state (selection, scroll) along the way.
pub fn event_to_action(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::ShowArtworks => Some(Action::Navigate(Tab::Artworks)),
        TuiEvent::ShowArtists => Some(Action::Navigate(Tab::Artists)),
        // Nothing highlighted yet means the artworks list is showing
        TuiEvent::ToggleTab => Some(Action::Navigate(
            app.tab.map(Tab::other).unwrap_or(Tab::Artists),
        )),
        TuiEvent::MouseClick(column, row) => {
            match ui::hit_test(*column, *row, frame_area, app, tui)? {
                Hit::Tab(tab) => Some(Action::Navigate(tab)),
                Hit::Back => Some(Action::Back),
                Hit::Card(index) => {
                    tui.card_list.selected_index = Some(index);
                    card_target(app, index).map(Action::OpenArtwork)
                }
            }
        }
        _ => match &app.view {
            View::List(_) => match tui.card_list.handle_event(event)? {
                CardListEvent::Activate(index) => card_target(app, index).map(Action::OpenArtwork),
            },
            View::Detail(_) => match tui.detail.handle_event(event)? {
                DetailEvent::Back => Some(Action::Back),
            },
            View::Loading | View::Error(_) => None,
        },
    }
}

fn card_target(app: &App, index: usize) -> Option<u64> {
    match &app.view {
        View::List(cards) => cards.get(index).and_then(|card| card.target()),
        _ => None,
    }
}

/// Perform one request against the collection and wrap the outcome as an action.
pub async fn perform_fetch(collection: &dyn Collection, request: Request, generation: u64) -> Action {
    let result = match request {
        Request::Artworks => collection.fetch_artworks().await.map(Payload::Artworks),
        Request::Artists => collection.fetch_artists().await.map(Payload::Artists),
        Request::ArtworkDetail(id) => collection
            .fetch_artwork_details(id)
            .await
            .map(Payload::Artwork),
    };
    match result {
        Ok(payload) => Action::Loaded {
            generation,
            payload,
        },
        Err(error) => Action::Failed { generation, error },
    }
}

fn spawn_fetch(
    collection: Arc<dyn Collection>,
    request: Request,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning {:?} fetch from {} (generation {})",
        request,
        collection.name(),
        generation
    );
    tokio::spawn(async move {
        let action = perform_fetch(collection.as_ref(), request, generation).await;
        if tx.send(action).is_err() {
            warn!(
                "Failed to send fetch result for generation {}: receiver dropped",
                generation
            );
        }
    });
}
