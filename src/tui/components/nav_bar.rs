//! # NavBar Component
//!
//! The two navigation controls. At most one carries the active highlight;
//! on start-up neither does, even though the artworks list is already
//! loading.
//!
//! Stateless: it receives the active tab as a prop. Tab positions are a pure
//! function of the area, so the event loop can hit-test clicks with
//! [`NavBar::tab_at`] without keeping any render state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::Tab;
use crate::tui::component::Component;

const TITLE: &str = " Gallery ";
const TAB_GAP: u16 = 2;

pub struct NavBar {
    pub active: Option<Tab>,
}

impl NavBar {
    pub fn new(active: Option<Tab>) -> Self {
        Self { active }
    }

    fn tab_text(index: usize, tab: Tab) -> String {
        format!(" {} {} ", index + 1, tab.label())
    }

    /// Horizontal span `[start, end)` of each tab, in screen columns.
    pub fn tab_columns(area: Rect) -> Vec<(Tab, u16, u16)> {
        // Inside the left border, one space of margin
        let mut x = area.x + 2;
        Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, &tab)| {
                let width = Self::tab_text(i, tab).width() as u16;
                let span = (tab, x, x + width);
                x += width + TAB_GAP;
                span
            })
            .collect()
    }

    /// The tab under a click, if any.
    pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
        // Tabs sit on the middle row of the bordered bar
        if row != area.y + 1 {
            return None;
        }
        Self::tab_columns(area)
            .into_iter()
            .find(|&(_, start, end)| column >= start && column < end)
            .map(|(tab, _, _)| tab)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (i, &tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(TAB_GAP as usize)));
            }
            let style = if self.active == Some(tab) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(Self::tab_text(i, tab), style));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(Span::styled(
                TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(active: Option<Tab>) -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                NavBar::new(active).render(f, f.area());
            })
            .unwrap();
        terminal
    }

    fn is_highlighted(terminal: &Terminal<TestBackend>, tab: Tab) -> bool {
        let area = Rect::new(0, 0, 60, 3);
        let (_, start, _) = NavBar::tab_columns(area)
            .into_iter()
            .find(|(t, _, _)| *t == tab)
            .unwrap();
        terminal.backend().buffer()[(start + 1, 1)].bg == Color::Yellow
    }

    #[test]
    fn test_renders_both_tabs() {
        let terminal = render(None);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Gallery"));
        assert!(text.contains("1 Artworks"));
        assert!(text.contains("2 Artists"));
    }

    #[test]
    fn test_no_tab_highlighted_initially() {
        let terminal = render(None);
        assert!(!is_highlighted(&terminal, Tab::Artworks));
        assert!(!is_highlighted(&terminal, Tab::Artists));
    }

    #[test]
    fn test_highlight_is_exclusive() {
        let terminal = render(Some(Tab::Artists));
        assert!(is_highlighted(&terminal, Tab::Artists));
        assert!(!is_highlighted(&terminal, Tab::Artworks));

        let terminal = render(Some(Tab::Artworks));
        assert!(is_highlighted(&terminal, Tab::Artworks));
        assert!(!is_highlighted(&terminal, Tab::Artists));
    }

    #[test]
    fn test_tab_at_hits_tabs_on_middle_row() {
        let area = Rect::new(0, 0, 60, 3);
        let columns = NavBar::tab_columns(area);
        let (_, artworks_start, _) = columns[0];
        let (_, artists_start, artists_end) = columns[1];

        assert_eq!(NavBar::tab_at(area, artworks_start, 1), Some(Tab::Artworks));
        assert_eq!(NavBar::tab_at(area, artists_start + 2, 1), Some(Tab::Artists));
        assert_eq!(NavBar::tab_at(area, artists_end, 1), None);
        assert_eq!(NavBar::tab_at(area, artworks_start, 0), None);
    }
}
