//! # Detail Pane
//!
//! Full-height view of a single artwork card. The back control is the first
//! line of the card and is drawn focused, so Enter always means "back".

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::view::Card;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::card::{CardWidget, card_paragraph};
use crate::tui::event::TuiEvent;

/// Rows between the top of the pane and the back control (the card border).
pub const BACK_ROW: u16 = 1;

#[derive(Debug, Default)]
pub struct DetailState {
    /// Vertical scroll offset in lines
    pub offset: u16,
    /// Largest useful offset, from the last render
    pub max_offset: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Is the back control drawn at `row` (relative to the pane's top)?
    pub fn hit_back(&self, row: u16) -> bool {
        self.offset == 0 && row == BACK_ROW
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.offset as i32 + delta).clamp(0, self.max_offset as i32);
        self.offset = next as u16;
    }
}

impl EventHandler for DetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Activate | TuiEvent::Back => Some(DetailEvent::Back),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_by(-1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_by(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_by(-10);
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_by(10);
                None
            }
            _ => None,
        }
    }
}

pub struct DetailPane<'a> {
    pub state: &'a mut DetailState,
    pub card: &'a Card,
}

impl<'a> DetailPane<'a> {
    pub fn new(state: &'a mut DetailState, card: &'a Card) -> Self {
        Self { state, card }
    }
}

impl<'a> Component for DetailPane<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = card_paragraph(self.card, true, true);
        // Same measurement as the list, so borders and padding are counted
        let total = CardWidget::calculate_height(self.card, area.width);
        self.state.max_offset = total.saturating_sub(area.height);
        self.state.offset = self.state.offset.min(self.state.max_offset);
        frame.render_widget(paragraph.scroll((self.state.offset, 0)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{Element, Image};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn detail_card(text_lines: usize) -> Card {
        let mut elements = vec![
            Element::Back {
                label: "Back to Artworks".to_string(),
            },
            Element::Heading("The Old Guitarist".to_string()),
        ];
        for i in 0..text_lines {
            elements.push(Element::Text(format!("line {i}")));
        }
        elements.push(Element::Attribution("Artist: Pablo Picasso".to_string()));
        Card { elements }
    }

    fn render(state: &mut DetailState, card: &Card, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut pane = DetailPane::new(state, card);
                pane.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_back_control_is_first_row_inside_border() {
        let mut state = DetailState::new();
        let rows = render(&mut state, &detail_card(1), 50, 12);
        assert!(rows[BACK_ROW as usize].contains("← Back to Artworks"));
        assert!(rows[3].contains("The Old Guitarist"));
        assert!(state.hit_back(BACK_ROW));
    }

    #[test]
    fn test_enter_and_back_both_go_back() {
        let mut state = DetailState::new();
        assert_eq!(state.handle_event(&TuiEvent::Activate), Some(DetailEvent::Back));
        assert_eq!(state.handle_event(&TuiEvent::Back), Some(DetailEvent::Back));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = DetailState::new();
        let card = detail_card(30);
        render(&mut state, &card, 50, 10);
        assert!(state.max_offset > 0);

        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert_eq!(state.offset, state.max_offset);
        assert!(!state.hit_back(BACK_ROW));

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.offset, state.max_offset - 1);
    }

    #[test]
    fn test_long_card_scrolls_to_image_url() {
        let mut state = DetailState::new();
        let description = (0..120).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let card = Card {
            elements: vec![
                Element::Back {
                    label: "Back to Artworks".to_string(),
                },
                Element::Heading("Nighthawks".to_string()),
                Element::Text(description),
                Element::Attribution("Artist: Edward Hopper".to_string()),
                Element::Image(Image {
                    url: "https://x/abc.jpg".to_string(),
                    alt: "Nighthawks".to_string(),
                    opens: None,
                }),
            ],
        };

        render(&mut state, &card, 30, 10);
        for _ in 0..50 {
            state.handle_event(&TuiEvent::ScrollPageDown);
        }
        let rows = render(&mut state, &card, 30, 10);

        assert_eq!(state.offset, state.max_offset);
        assert!(rows.iter().any(|row| row.contains("Artist: Edward Hopper")));
        assert!(rows.iter().any(|row| row.contains("https://x/abc.jpg")));
    }

    #[test]
    fn test_short_card_does_not_scroll() {
        let mut state = DetailState::new();
        render(&mut state, &detail_card(1), 50, 20);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.offset, 0);
    }
}
