pub mod client;
pub mod collection;
pub mod images;
pub mod types;

pub use client::MuseumClient;
pub use collection::{Collection, FetchError};
pub use images::ImageService;
pub use types::{ArtistSummary, ArtworkDetail, ArtworkSummary};
