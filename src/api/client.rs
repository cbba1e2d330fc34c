//! HTTP client for the Art Institute of Chicago public API.
//!
//! Three read-only endpoints, each a single GET with a fixed field list:
//!
//! ```text
//! GET {base}/artworks?limit=N&fields=id,title,description,image_id
//! GET {base}/agents?limit=N&fields=id,title,description
//! GET {base}/artworks/{id}?fields=id,title,description,artist_display,image_id
//! ```
//!
//! No retries and no timeout of our own: whatever reqwest reports is final.

use async_trait::async_trait;
use log::{debug, error, info};
use serde::de::DeserializeOwned;

use super::collection::{Collection, FetchError};
use super::types::{ApiResponse, ArtistSummary, ArtworkDetail, ArtworkSummary};

pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_ARTWORKS_LIMIT: u32 = 10;
pub const DEFAULT_ARTISTS_LIMIT: u32 = 15;

const ARTWORK_LIST_FIELDS: &str = "id,title,description,image_id";
const ARTIST_LIST_FIELDS: &str = "id,title,description";
const ARTWORK_DETAIL_FIELDS: &str = "id,title,description,artist_display,image_id";

pub struct MuseumClient {
    base_url: String,
    artworks_limit: u32,
    artists_limit: u32,
    client: reqwest::Client,
}

impl MuseumClient {
    pub fn new(base_url: impl Into<String>, artworks_limit: u32, artists_limit: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            artworks_limit,
            artists_limit,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url`, check the status, and unwrap the `data` envelope.
    async fn get_data<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        info!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("An error occurred: request to {} failed: {}", url, e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("Response status for {}: {}", url, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            error!("An error occurred: HTTP error! Status: {} - {}", status.as_u16(), body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        // Read the body first so a dropped connection stays a network error
        // and only a bad payload becomes a parse error.
        let body = response.text().await.map_err(|e| {
            error!("An error occurred: reading body from {} failed: {}", url, e);
            FetchError::Network(e.to_string())
        })?;

        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            error!("An error occurred: unexpected body from {}: {}", url, e);
            FetchError::Parse(e.to_string())
        })?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl Collection for MuseumClient {
    fn name(&self) -> &str {
        "artic"
    }

    async fn fetch_artworks(&self) -> Result<Vec<ArtworkSummary>, FetchError> {
        let artworks: Vec<ArtworkSummary> = self
            .get_data(
                format!("{}/artworks", self.base_url),
                &[
                    ("limit", self.artworks_limit.to_string()),
                    ("fields", ARTWORK_LIST_FIELDS.to_string()),
                ],
            )
            .await?;
        info!("Fetched {} artworks", artworks.len());
        Ok(artworks)
    }

    async fn fetch_artists(&self) -> Result<Vec<ArtistSummary>, FetchError> {
        let artists: Vec<ArtistSummary> = self
            .get_data(
                format!("{}/agents", self.base_url),
                &[
                    ("limit", self.artists_limit.to_string()),
                    ("fields", ARTIST_LIST_FIELDS.to_string()),
                ],
            )
            .await?;
        info!("Fetched {} artists", artists.len());
        Ok(artists)
    }

    async fn fetch_artwork_details(&self, id: u64) -> Result<ArtworkDetail, FetchError> {
        let artwork: ArtworkDetail = self
            .get_data(
                format!("{}/artworks/{}", self.base_url, id),
                &[("fields", ARTWORK_DETAIL_FIELDS.to_string())],
            )
            .await?;
        info!("Fetched artwork {} ({})", artwork.id, artwork.display_title());
        Ok(artwork)
    }
}
