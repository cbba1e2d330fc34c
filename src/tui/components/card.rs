use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::view::{Card, Element, Image};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one [`Card`] inside a rounded border.
///
/// Used for both list cards and the detail card. Images cannot be drawn in
/// the terminal, so an image element shows its alt text and the URL it would
/// load.
#[derive(Clone, Copy)]
pub struct CardWidget<'a> {
    pub card: &'a Card,
    pub is_selected: bool,
    /// Draw the back control as focused (detail view).
    pub focus_back: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: &'a Card, is_selected: bool) -> Self {
        Self {
            card,
            is_selected,
            focus_back: false,
        }
    }

    pub fn with_back_focus(mut self) -> Self {
        self.focus_back = true;
        self
    }

    /// Calculate the height required for this card given a width.
    ///
    /// Uses `textwrap` with options matching the `Paragraph` wrap so the list
    /// can lay out its scroll canvas before anything is rendered.
    pub fn calculate_height(card: &Card, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace)
            .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);

        let content_lines: usize = card_lines(card, false)
            .iter()
            .map(|line| {
                let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                textwrap::wrap(&text, &options).len().max(1)
            })
            .sum();

        (content_lines as u16).max(1) + VERTICAL_OVERHEAD
    }
}

/// Flatten a card into styled lines, one or more per element.
pub fn card_lines(card: &Card, focus_back: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for element in &card.elements {
        match element {
            Element::Back { label } => {
                let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
                if focus_back {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::from(Span::styled(format!("← {label}"), style)));
                lines.push(Line::default());
            }
            Element::Heading(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            Element::Text(text) => {
                lines.extend(text.lines().map(|l| Line::from(l.to_string())));
            }
            Element::Attribution(text) => {
                let style = Style::default().add_modifier(Modifier::ITALIC);
                lines.extend(text.lines().map(|l| Line::from(Span::styled(l.to_string(), style))));
            }
            Element::Image(Image { url, alt, opens }) => {
                let mut spans = vec![Span::styled(
                    format!("▣ {alt}"),
                    Style::default().fg(Color::Green),
                )];
                if opens.is_some() {
                    spans.push(Span::styled(
                        "  (Enter to view)",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.push(Line::from(spans));
                lines.push(Line::from(Span::styled(
                    url.clone(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED),
                )));
            }
            Element::Note(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )));
            }
            Element::Link(url) => {
                lines.push(Line::from(Span::styled(
                    url.clone(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                )));
            }
        }
    }
    lines
}

/// The bordered paragraph a card is drawn as. Shared by the list and detail
/// views so both wrap identically.
pub fn card_paragraph(card: &Card, is_selected: bool, focus_back: bool) -> Paragraph<'static> {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .padding(Padding::horizontal(CONTENT_PAD_H));

    Paragraph::new(card_lines(card, focus_back))
        .block(block)
        .wrap(Wrap { trim: true })
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        card_paragraph(self.card, self.is_selected, self.focus_back).render(area, buf);
    }
}

impl<'a> Component for CardWidget<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
