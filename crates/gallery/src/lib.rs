//! Gallery client for Sketchbook
//!
//! Wraps the remote persistence and rating service behind [`PaintingBackend`]
//! and adds the client-side pieces: listing and rating caches that are
//! invalidated by writes, rating summaries, and default painting titles.

mod client;
mod memory;
mod rating;
mod title;
mod types;

pub use client::GalleryClient;
pub use memory::{InMemoryBackend, InMemorySession};
pub use rating::RatingSummary;
pub use title::default_title;
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Unable to connect to the backend")]
    NotReady,

    #[error("Nothing to submit: the exported image is empty")]
    EmptyImage,

    #[error("Rating must be between 1 and 10, got {0}")]
    InvalidPoints(u8),

    #[error("Painting not found: {0}")]
    NotFound(PaintingId),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Trait for the remote persistence and rating service
///
/// Calls are made on behalf of the backend's authenticated caller.
#[allow(async_fn_in_trait)]
pub trait PaintingBackend {
    /// Store a finished painting and return its id
    async fn complete_painting(
        &self,
        image: Vec<u8>,
        title: String,
    ) -> Result<PaintingId, GalleryError>;

    /// List every painting in the shared gallery
    async fn gallery(&self) -> Result<Vec<Painting>, GalleryError>;

    /// Rate a painting as the caller; re-rating replaces the previous value
    async fn rate(&self, painting: &PaintingId, points: Points) -> Result<(), GalleryError>;

    /// All ratings for a painting
    async fn ratings(&self, painting: &PaintingId) -> Result<Vec<RatingEntry>, GalleryError>;
}
