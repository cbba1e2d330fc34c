use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::{App, Tab};
use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardList, DetailPane, Hints, NavBar, StatusBar};

/// Screen regions: navigation bar, display region, status line.
pub struct ScreenLayout {
    pub nav: Rect,
    pub main: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [nav, main, status] = Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);
    ScreenLayout { nav, main, status }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let layout = screen_layout(frame.area());

    NavBar::new(app.tab).render(frame, layout.nav);

    // The display region holds exactly one view
    let hints = match &app.view {
        View::Loading => {
            draw_message(frame, layout.main, "Loading...", Color::DarkGray);
            Hints::Other
        }
        View::List(cards) => {
            CardList::new(&mut tui.card_list, cards).render(frame, layout.main);
            Hints::List
        }
        View::Detail(card) => {
            DetailPane::new(&mut tui.detail, card).render(frame, layout.main);
            Hints::Detail
        }
        View::Error(message) => {
            draw_error_view(frame, layout.main, message);
            Hints::Other
        }
    };

    StatusBar::new(app.status_message.clone(), app.is_loading, spinner_frame, hints)
        .render(frame, layout.status);
}

fn draw_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(Tab),
    Card(usize),
    Back,
}

/// Hit test: given a screen position, find the control under it.
/// Relies on the layout cached by the last render.
pub fn hit_test(column: u16, row: u16, frame_area: Rect, app: &App, tui: &TuiState) -> Option<Hit> {
    let layout = screen_layout(frame_area);

    if let Some(tab) = NavBar::tab_at(layout.nav, column, row) {
        return Some(Hit::Tab(tab));
    }

    let main = layout.main;
    if row < main.y || row >= main.y + main.height || column < main.x || column >= main.x + main.width {
        return None;
    }
    let content_y = row - main.y;

    match &app.view {
        View::List(_) => tui.card_list.hit_test(content_y).map(Hit::Card),
        View::Detail(_) if tui.detail.hit_back(content_y) => Some(Hit::Back),
        _ => None,
    }
}
