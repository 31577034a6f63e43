//! In-process backend holding the gallery in memory

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::types::{Painting, PaintingId, Points, RatingEntry, UserId};
use crate::{GalleryError, PaintingBackend};

#[derive(Default)]
struct Store {
    paintings: Vec<Painting>,
    ratings: HashMap<PaintingId, Vec<RatingEntry>>,
    next_id: u64,
}

/// Shared in-memory gallery
///
/// Cloning shares the same store. Use [`InMemoryBackend::session`] to act
/// as a particular user.
#[derive(Clone)]
pub struct InMemoryBackend {
    store: Arc<RwLock<Store>>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend handle whose calls are made as `caller`
    pub fn session(&self, caller: UserId) -> InMemorySession {
        InMemorySession {
            backend: self.clone(),
            caller,
        }
    }

    /// Simulate the service going away (every call fails) or coming back
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), GalleryError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(GalleryError::Backend("service unavailable".into()))
        }
    }
}

/// [`InMemoryBackend`] acting on behalf of one user
#[derive(Clone)]
pub struct InMemorySession {
    backend: InMemoryBackend,
    caller: UserId,
}

impl PaintingBackend for InMemorySession {
    async fn complete_painting(
        &self,
        image: Vec<u8>,
        title: String,
    ) -> Result<PaintingId, GalleryError> {
        self.backend.check_available()?;
        let mut store = self.backend.store.write().await;

        store.next_id += 1;
        let id = PaintingId(format!("painting-{}", store.next_id));
        let created_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        debug!("Storing {id} by {} ({} bytes)", self.caller, image.len());
        store.paintings.push(Painting {
            id: id.clone(),
            title,
            created_ms,
            author: self.caller.clone(),
            image,
        });
        Ok(id)
    }

    async fn gallery(&self) -> Result<Vec<Painting>, GalleryError> {
        self.backend.check_available()?;
        Ok(self.backend.store.read().await.paintings.clone())
    }

    async fn rate(&self, painting: &PaintingId, points: Points) -> Result<(), GalleryError> {
        self.backend.check_available()?;
        let mut store = self.backend.store.write().await;

        if !store.paintings.iter().any(|p| &p.id == painting) {
            return Err(GalleryError::NotFound(painting.clone()));
        }

        let entries = store.ratings.entry(painting.clone()).or_default();
        match entries.iter_mut().find(|e| e.user == self.caller) {
            Some(existing) => existing.points = points,
            None => entries.push(RatingEntry {
                user: self.caller.clone(),
                points,
            }),
        }
        Ok(())
    }

    async fn ratings(&self, painting: &PaintingId) -> Result<Vec<RatingEntry>, GalleryError> {
        self.backend.check_available()?;
        let store = self.backend.store.read().await;

        if !store.paintings.iter().any(|p| &p.id == painting) {
            return Err(GalleryError::NotFound(painting.clone()));
        }
        Ok(store.ratings.get(painting).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rerating_replaces_previous() {
        let backend = InMemoryBackend::new();
        let alice = backend.session(UserId::from("alice"));

        let id = alice
            .complete_painting(vec![1, 2, 3], "Sunset".into())
            .await
            .unwrap();
        alice.rate(&id, Points::new(3).unwrap()).await.unwrap();
        alice.rate(&id, Points::new(8).unwrap()).await.unwrap();

        let ratings = alice.ratings(&id).await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].points.get(), 8);
    }

    #[tokio::test]
    async fn test_sessions_share_store() {
        let backend = InMemoryBackend::new();
        let alice = backend.session(UserId::from("alice"));
        let bob = backend.session(UserId::from("bob"));

        let id = alice
            .complete_painting(vec![9], "Cat".into())
            .await
            .unwrap();
        bob.rate(&id, Points::new(10).unwrap()).await.unwrap();

        let gallery = bob.gallery().await.unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].author, UserId::from("alice"));
        assert_eq!(alice.ratings(&id).await.unwrap()[0].user, UserId::from("bob"));
    }

    #[tokio::test]
    async fn test_unknown_painting() {
        let backend = InMemoryBackend::new();
        let alice = backend.session(UserId::from("alice"));
        let missing = PaintingId::from("painting-404");

        assert!(matches!(
            alice.rate(&missing, Points::new(5).unwrap()).await,
            Err(GalleryError::NotFound(_))
        ));
        assert!(matches!(
            alice.ratings(&missing).await,
            Err(GalleryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unavailable() {
        let backend = InMemoryBackend::new();
        let alice = backend.session(UserId::from("alice"));
        backend.set_available(false);

        assert!(matches!(
            alice.gallery().await,
            Err(GalleryError::Backend(_))
        ));
    }
}
