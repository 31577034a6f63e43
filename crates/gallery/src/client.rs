//! Cached client over a [`PaintingBackend`]

use std::collections::HashMap;

use tracing::{debug, info};

use crate::rating::RatingSummary;
use crate::types::{Painting, PaintingId, Points, RatingEntry, UserId};
use crate::{GalleryError, PaintingBackend};

/// Client-side view of the gallery service
///
/// Reads are cached; writes invalidate what they affect. With no backend
/// connected, reads return empty results and writes fail with
/// [`GalleryError::NotReady`].
pub struct GalleryClient<B> {
    backend: Option<B>,
    gallery: Option<Vec<Painting>>,
    ratings: HashMap<PaintingId, Vec<RatingEntry>>,
}

impl<B: PaintingBackend> GalleryClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Some(backend),
            gallery: None,
            ratings: HashMap::new(),
        }
    }

    /// A client with no backend connection yet
    pub fn disconnected() -> Self {
        Self {
            backend: None,
            gallery: None,
            ratings: HashMap::new(),
        }
    }

    /// Check if the backend is connected
    pub fn is_ready(&self) -> bool {
        self.backend.is_some()
    }

    /// Attach (or replace) the backend, dropping every cached read
    pub fn connect(&mut self, backend: B) {
        self.backend = Some(backend);
        self.gallery = None;
        self.ratings.clear();
    }

    /// Submit an exported image
    ///
    /// An empty export means nothing was produced and is rejected before
    /// reaching the backend. On success the cached gallery is invalidated.
    pub async fn complete_painting(
        &mut self,
        image: Vec<u8>,
        title: impl Into<String>,
    ) -> Result<PaintingId, GalleryError> {
        if image.is_empty() {
            return Err(GalleryError::EmptyImage);
        }
        let backend = self.backend.as_ref().ok_or(GalleryError::NotReady)?;

        let title = title.into();
        let size = image.len();
        let id = backend.complete_painting(image, title.clone()).await?;

        self.gallery = None;
        info!("Completed painting {id} \"{title}\" ({size} bytes)");
        Ok(id)
    }

    /// Every painting in the gallery
    pub async fn gallery(&mut self) -> Result<&[Painting], GalleryError> {
        if self.gallery.is_none() {
            let listing = match &self.backend {
                Some(backend) => backend.gallery().await?,
                None => Vec::new(),
            };
            debug!("Fetched gallery ({} paintings)", listing.len());
            self.gallery = Some(listing);
        }
        Ok(self.gallery.as_deref().unwrap_or_default())
    }

    /// Look a painting up in the gallery listing
    pub async fn painting(&mut self, id: &PaintingId) -> Result<Option<&Painting>, GalleryError> {
        let gallery = self.gallery().await?;
        Ok(gallery.iter().find(|p| &p.id == id))
    }

    /// Whether the gallery listing is currently cached
    pub fn is_gallery_cached(&self) -> bool {
        self.gallery.is_some()
    }

    /// Rate a painting as the backend's caller
    pub async fn rate(&mut self, id: &PaintingId, points: u8) -> Result<(), GalleryError> {
        let points = Points::new(points)?;
        let backend = self.backend.as_ref().ok_or(GalleryError::NotReady)?;

        backend.rate(id, points).await?;
        self.ratings.remove(id);
        debug!("Rated {id}: {}/10", points.get());
        Ok(())
    }

    /// All ratings for a painting
    pub async fn ratings(&mut self, id: &PaintingId) -> Result<&[RatingEntry], GalleryError> {
        if !self.ratings.contains_key(id) {
            let entries = match &self.backend {
                Some(backend) => backend.ratings(id).await?,
                None => Vec::new(),
            };
            self.ratings.insert(id.clone(), entries);
        }
        Ok(self.ratings.get(id).map(Vec::as_slice).unwrap_or_default())
    }

    /// Average, count and the viewer's own rating for a painting
    pub async fn rating_summary(
        &mut self,
        id: &PaintingId,
        viewer: Option<&UserId>,
    ) -> Result<RatingSummary, GalleryError> {
        let entries = self.ratings(id).await?;
        Ok(RatingSummary::from_entries(entries, viewer))
    }
}
