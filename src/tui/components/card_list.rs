//! # CardList Component
//!
//! Scrollable list of cards for the artworks and artists views.
//!
//! `CardList` is a transient component (created each frame) that wraps
//! `&'a mut CardListState` (persistent state) and the cards (props). The
//! render pass measures every card, caches the heights for hit testing, and
//! keeps the selected card in view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::Card;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::card::CardWidget;
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the card list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct CardListState {
    pub scroll_state: ScrollViewState,
    /// Currently selected card (keyboard or click)
    pub selected_index: Option<usize>,
    /// Height of each card from the last render
    pub heights: Vec<u16>,
    /// Running totals of `heights`: `prefix_heights[i]` is the bottom edge of card `i`
    pub prefix_heights: Vec<u16>,
    /// Last known viewport height
    pub viewport_height: u16,
}

/// Events emitted by the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardListEvent {
    /// Enter pressed on the card at this index.
    Activate(usize),
}

impl CardListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget selection and scroll position (new content was committed).
    pub fn reset(&mut self) {
        *self = Self {
            viewport_height: self.viewport_height,
            ..Self::default()
        };
    }

    fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn select_next(&mut self) {
        if self.len() == 0 {
            return;
        }
        let next = match self.selected_index {
            Some(i) => (i + 1).min(self.len() - 1),
            None => 0,
        };
        self.selected_index = Some(next);
        self.scroll_to_selected();
    }

    pub fn select_previous(&mut self) {
        if self.len() == 0 {
            return;
        }
        let prev = match self.selected_index {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected_index = Some(prev);
        self.scroll_to_selected();
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let item_top = if idx == 0 { 0 } else { self.prefix_heights[idx - 1] };
        let item_bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom
                .saturating_sub(self.viewport_height)
                .min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Which card sits at `content_y` (a row inside the list area, 0 = top
    /// of the viewport)?
    pub fn hit_test(&self, content_y: u16) -> Option<usize> {
        let y = content_y + self.scroll_state.offset().y;
        self.prefix_heights.iter().position(|&bottom| y < bottom)
    }

    fn rebuild_layout(&mut self, cards: &[Card], width: u16) {
        self.heights = cards
            .iter()
            .map(|card| CardWidget::calculate_height(card, width))
            .collect();
        let mut total = 0u16;
        self.prefix_heights = self
            .heights
            .iter()
            .map(|h| {
                total = total.saturating_add(*h);
                total
            })
            .collect();
        if let Some(idx) = self.selected_index
            && idx >= cards.len()
        {
            self.selected_index = None;
        }
    }

    fn clamp_scroll(&mut self) {
        let total: u16 = self.prefix_heights.last().copied().unwrap_or(0);
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for CardListState {
    type Event = CardListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.select_previous();
                None
            }
            TuiEvent::CursorDown => {
                self.select_next();
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::Activate => self.selected_index.map(CardListEvent::Activate),
            _ => None,
        }
    }
}

pub struct CardList<'a> {
    pub state: &'a mut CardListState,
    pub cards: &'a [Card],
}

impl<'a> CardList<'a> {
    pub fn new(state: &'a mut CardListState, cards: &'a [Card]) -> Self {
        Self { state, cards }
    }
}

impl<'a> Component for CardList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.cards.is_empty() {
            self.state.heights.clear();
            self.state.prefix_heights.clear();
            let empty = Paragraph::new("Nothing to show.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        self.state.viewport_height = area.height;
        self.state.rebuild_layout(self.cards, content_width);
        self.state.clamp_scroll();

        let total_height = self.state.prefix_heights.last().copied().unwrap_or(0);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = 0u16;
        for (i, card) in self.cards.iter().enumerate() {
            let height = self.state.heights[i];
            let rect = Rect::new(0, y_offset, content_width, height);
            let is_selected = self.state.selected_index == Some(i);
            scroll_view.render_widget(CardWidget::new(card, is_selected), rect);
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
