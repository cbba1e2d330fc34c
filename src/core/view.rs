//! # Views
//!
//! Pure functions from API records to a declarative description of what the
//! display region should contain. No terminal types here: the TUI adapter
//! walks a [`View`] and draws it, and tests can assert on it directly.
//!
//! ```text
//! records ──► artwork_list / artist_list / artwork_detail ──► View ──► tui adapter
//! ```

use crate::api::{ArtistSummary, ArtworkDetail, ArtworkSummary, ImageService};
use crate::core::sanitize::plain_text;

pub const BACK_LABEL: &str = "Back to Artworks";
pub const NO_IMAGE_NOTE: &str = "No image available";
pub const DEFAULT_IMAGE_ALT: &str = "Artwork Image";

/// Everything the display region can hold. Exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Nothing has arrived yet.
    Loading,
    List(Vec<Card>),
    Detail(Card),
    Error(String),
}

/// One piece of a card, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Control that returns to a freshly fetched artworks list.
    Back { label: String },
    Heading(String),
    Text(String),
    Attribution(String),
    Image(Image),
    Note(String),
    Link(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub alt: String,
    /// Artwork to open when the image is activated.
    pub opens: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub elements: Vec<Element>,
}

impl Card {
    /// The artwork this card opens, if it carries a clickable image.
    pub fn target(&self) -> Option<u64> {
        self.elements.iter().find_map(|element| match element {
            Element::Image(Image { opens, .. }) => *opens,
            _ => None,
        })
    }

    pub fn heading(&self) -> Option<&str> {
        self.elements.iter().find_map(|element| match element {
            Element::Heading(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.elements.iter().filter_map(|element| match element {
            Element::Image(image) => Some(image),
            _ => None,
        })
    }

    pub fn has_back(&self) -> bool {
        matches!(self.elements.first(), Some(Element::Back { .. }))
    }
}

/// One card per artwork: title, description, and either a clickable thumbnail
/// or a placeholder note with a link to the public record.
pub fn artwork_list(artworks: &[ArtworkSummary], images: &ImageService) -> View {
    let cards = artworks
        .iter()
        .map(|artwork| {
            let mut elements = vec![Element::Heading(artwork.display_title().to_string())];
            if let Some(text) = plain_text(artwork.description.as_deref()) {
                elements.push(Element::Text(text));
            }
            match artwork.image_id() {
                Some(image_id) => elements.push(Element::Image(Image {
                    url: images.thumbnail_url(image_id),
                    alt: alt_text(artwork.title.as_deref()),
                    opens: Some(artwork.id),
                })),
                None => {
                    elements.push(Element::Note(NO_IMAGE_NOTE.to_string()));
                    elements.push(Element::Link(images.record_url(artwork.id)));
                }
            }
            Card { elements }
        })
        .collect();
    View::List(cards)
}

pub fn artist_list(artists: &[ArtistSummary]) -> View {
    let cards = artists
        .iter()
        .map(|artist| {
            let mut elements = vec![Element::Heading(artist.display_name().to_string())];
            if let Some(text) = plain_text(artist.description.as_deref()) {
                elements.push(Element::Text(text));
            }
            Card { elements }
        })
        .collect();
    View::List(cards)
}

/// The expanded view of one artwork. The back control always comes first so
/// it is the first thing focused.
pub fn artwork_detail(artwork: &ArtworkDetail, images: &ImageService) -> View {
    let mut elements = vec![
        Element::Back {
            label: BACK_LABEL.to_string(),
        },
        Element::Heading(artwork.display_title().to_string()),
    ];
    if let Some(text) = plain_text(artwork.description.as_deref()) {
        elements.push(Element::Text(text));
    }
    elements.push(Element::Attribution(format!("Artist: {}", artwork.attribution())));
    if let Some(image_id) = artwork.image_id() {
        elements.push(Element::Image(Image {
            url: images.detail_url(image_id),
            alt: alt_text(artwork.title.as_deref()),
            opens: None,
        }));
    }
    View::Detail(Card { elements })
}

fn alt_text(title: Option<&str>) -> String {
    title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_IMAGE_ALT)
        .to_string()
}
