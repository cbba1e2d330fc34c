//! URL templates for artwork images and public record pages.
//!
//! Images are served by an IIIF image server:
//!
//! ```text
//! {base}/{image_id}/full/{width},/0/default.jpg
//! ```

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://www.artic.edu/iiif/2";
pub const DEFAULT_WEBSITE_URL: &str = "https://www.artic.edu";

/// Width of list thumbnails, in pixels.
pub const THUMBNAIL_WIDTH: u32 = 200;
/// Width of the detail view image, in pixels.
pub const DETAIL_WIDTH: u32 = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageService {
    base_url: String,
    website_url: String,
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL, DEFAULT_WEBSITE_URL)
    }
}

impl ImageService {
    pub fn new(base_url: impl Into<String>, website_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            website_url: website_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn image_url(&self, image_id: &str, width: u32) -> String {
        format!("{}/{}/full/{},/0/default.jpg", self.base_url, image_id, width)
    }

    pub fn thumbnail_url(&self, image_id: &str) -> String {
        self.image_url(image_id, THUMBNAIL_WIDTH)
    }

    pub fn detail_url(&self, image_id: &str) -> String {
        self.image_url(image_id, DETAIL_WIDTH)
    }

    /// The canonical public page for an artwork.
    pub fn record_url(&self, artwork_id: u64) -> String {
        format!("{}/artworks/{}", self.website_url, artwork_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url_uses_400_width() {
        let images = ImageService::default();
        assert_eq!(
            images.detail_url("abc123"),
            "https://www.artic.edu/iiif/2/abc123/full/400,/0/default.jpg"
        );
    }

    #[test]
    fn test_thumbnail_url_uses_200_width() {
        let images = ImageService::default();
        assert_eq!(
            images.thumbnail_url("abc123"),
            "https://www.artic.edu/iiif/2/abc123/full/200,/0/default.jpg"
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let images = ImageService::new("http://localhost:9000/iiif/", "http://localhost:9000/");
        assert_eq!(
            images.image_url("x", 50),
            "http://localhost:9000/iiif/x/full/50,/0/default.jpg"
        );
        assert_eq!(images.record_url(129884), "http://localhost:9000/artworks/129884");
    }
}
