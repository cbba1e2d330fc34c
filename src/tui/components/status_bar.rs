//! # StatusBar Component
//!
//! Bottom line: status message on the left, key hints on the right.
//!
//! Stateless. The hints depend only on which kind of view is showing, so the
//! parent passes a [`Hints`] value rather than the whole view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hints {
    List,
    Detail,
    Other,
}

impl Hints {
    fn text(self) -> &'static str {
        match self {
            Hints::List => "1/2 Switch  ↑↓ Select  Enter Open  q Quit ",
            Hints::Detail => "Enter/b Back  ↑↓ Scroll  1/2 Switch  q Quit ",
            Hints::Other => "1/2 Switch  q Quit ",
        }
    }
}

pub struct StatusBar {
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub hints: Hints,
}

impl StatusBar {
    pub fn new(status_message: String, is_loading: bool, spinner_frame: usize, hints: Hints) -> Self {
        Self {
            status_message,
            is_loading,
            spinner_frame,
            hints,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = self.hints.text();
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints.width() as u16)])
                .areas(area);

        let mut spans = Vec::new();
        if self.is_loading {
            spans.push(Span::styled(
                format!(" {} ", SPINNER[self.spinner_frame % SPINNER.len()]),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(self.status_message.clone()));

        frame.render_widget(Line::from(spans), left);
        frame.render_widget(
            Line::from(Span::styled(
                hints,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ))
            .right_aligned(),
            right,
        );
    }
}
