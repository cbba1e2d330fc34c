//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{ArtistSummary, ArtworkDetail, ArtworkSummary, Collection, FetchError, ImageService};

/// A collection for tests that don't need real API calls.
/// Lists are empty and every artwork lookup is a 404.
pub struct NoopCollection;

#[async_trait]
impl Collection for NoopCollection {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_artworks(&self) -> Result<Vec<ArtworkSummary>, FetchError> {
        Ok(Vec::new())
    }

    async fn fetch_artists(&self) -> Result<Vec<ArtistSummary>, FetchError> {
        Ok(Vec::new())
    }

    async fn fetch_artwork_details(&self, id: u64) -> Result<ArtworkDetail, FetchError> {
        Err(FetchError::Status {
            status: 404,
            url: format!("noop://artworks/{id}"),
        })
    }
}

/// Creates a test App with a NoopCollection.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopCollection), ImageService::default())
}
