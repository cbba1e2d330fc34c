use serde::{Deserialize, Serialize};

/// Every endpoint wraps its payload in a `data` field.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// One artwork as returned by the list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtworkSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    /// HTML fragment, e.g. `<p>Oil on <em>canvas</em></p>`.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
}

/// A single artwork fetched by id. Same shape as the summary plus attribution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtworkDetail {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
}

/// An agent record. The API names artists through `title`; some records
/// only carry `name`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtistSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ATTRIBUTION: &str = "Unknown";

/// Returns the value if it holds something other than whitespace.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ArtworkSummary {
    pub fn display_title(&self) -> &str {
        present(&self.title).unwrap_or(UNTITLED)
    }

    pub fn image_id(&self) -> Option<&str> {
        present(&self.image_id)
    }
}

impl ArtworkDetail {
    pub fn display_title(&self) -> &str {
        present(&self.title).unwrap_or(UNTITLED)
    }

    pub fn attribution(&self) -> &str {
        present(&self.artist_display).unwrap_or(UNKNOWN_ATTRIBUTION)
    }

    pub fn image_id(&self) -> Option<&str> {
        present(&self.image_id)
    }
}

impl ArtistSummary {
    pub fn display_name(&self) -> &str {
        present(&self.title)
            .or_else(|| present(&self.name))
            .unwrap_or(UNKNOWN_ARTIST)
    }
}
