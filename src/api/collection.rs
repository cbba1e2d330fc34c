use std::fmt;

use async_trait::async_trait;

use super::types::{ArtistSummary, ArtworkDetail, ArtworkSummary};

pub const NETWORK_ERROR_MESSAGE: &str = "There was a network error, please check your connections";
pub const FETCH_ERROR_MESSAGE: &str = "Could not fetch artwork. Please try again.";

/// Errors that can occur while talking to the collection API.
///
/// Only two kinds matter to the user: no response at all (`Network`), or a
/// response we could not use (`Status`, `Parse`).
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, reset mid-body).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, url: String },
    /// The body was not the JSON shape we expected.
    Parse(String),
}

impl FetchError {
    /// The text shown in the display region for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => NETWORK_ERROR_MESSAGE,
            FetchError::Status { .. } | FetchError::Parse(_) => FETCH_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, url } => write!(f, "HTTP error! Status: {status} ({url})"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of collection records.
///
/// `MuseumClient` is the real implementation; tests substitute their own.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Returns the name of the collection, used in logs.
    fn name(&self) -> &str;

    async fn fetch_artworks(&self) -> Result<Vec<ArtworkSummary>, FetchError>;

    async fn fetch_artists(&self) -> Result<Vec<ArtistSummary>, FetchError>;

    async fn fetch_artwork_details(&self, id: u64) -> Result<ArtworkDetail, FetchError>;
}
