use painting::{DrawingSurface, Point, Rgb, StrokeStyle, Tool, decode_png};
use pretty_assertions::assert_eq;
use sketchbook_gallery::{
    GalleryClient, GalleryError, InMemoryBackend, PaintingId, RatingSummary, UserId, default_title,
};

fn drawn_surface() -> DrawingSurface {
    let mut surface = DrawingSurface::with_size(48, 48).unwrap();
    let style = StrokeStyle::new(Rgb::new(255, 0, 0), 6, 1.0);
    surface.begin(Point::new(4.0, 4.0), Tool::Line);
    surface.end(Point::new(44.0, 44.0), &style);
    surface
}

#[tokio::test]
async fn completing_a_painting_invalidates_the_gallery_listing() {
    let backend = InMemoryBackend::new();
    let mut client = GalleryClient::new(backend.session(UserId::from("alice")));

    assert!(client.gallery().await.unwrap().is_empty());
    assert!(client.is_gallery_cached());

    let surface = drawn_surface();
    let id = client
        .complete_painting(surface.export_bytes(), default_title(0))
        .await
        .unwrap();
    assert!(!client.is_gallery_cached());

    let gallery = client.gallery().await.unwrap();
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].id, id);
    assert_eq!(gallery[0].title, "Painting 1970-01-01");

    let stored = decode_png(&gallery[0].image).unwrap();
    assert_eq!(stored.as_raw().as_slice(), surface.surface().as_bytes());
}

#[tokio::test]
async fn failed_submission_keeps_cached_listing() {
    let backend = InMemoryBackend::new();
    let mut client = GalleryClient::new(backend.session(UserId::from("alice")));
    client.gallery().await.unwrap();

    backend.set_available(false);
    let result = client
        .complete_painting(drawn_surface().export_bytes(), "Offline")
        .await;

    assert!(matches!(result, Err(GalleryError::Backend(_))));
    assert!(client.is_gallery_cached());
}

#[tokio::test]
async fn ratings_are_refetched_after_rating() {
    let backend = InMemoryBackend::new();
    let alice = UserId::from("alice");
    let bob = UserId::from("bob");

    let mut author = GalleryClient::new(backend.session(alice.clone()));
    let id = author
        .complete_painting(drawn_surface().export_bytes(), "Diagonal")
        .await
        .unwrap();

    let summary = author.rating_summary(&id, Some(&alice)).await.unwrap();
    assert_eq!(summary.average, None);

    let mut viewer = GalleryClient::new(backend.session(bob.clone()));
    viewer.rate(&id, 6).await.unwrap();
    viewer.rate(&id, 9).await.unwrap();
    author.rate(&id, 3).await.unwrap();

    let summary = viewer.rating_summary(&id, Some(&bob)).await.unwrap();
    assert_eq!(
        summary,
        RatingSummary {
            average: Some(6.0),
            total: 2,
            viewer_rating: Some(9),
        }
    );

    // The author's own client dropped its cached ratings when it rated
    let summary = author.rating_summary(&id, Some(&alice)).await.unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.viewer_rating, Some(3));
}

#[tokio::test]
async fn painting_lookup_by_id() {
    let backend = InMemoryBackend::new();
    let mut client = GalleryClient::new(backend.session(UserId::from("alice")));
    let id = client
        .complete_painting(drawn_surface().export_bytes(), "Lookup")
        .await
        .unwrap();

    let painting = client.painting(&id).await.unwrap().unwrap();
    assert_eq!(painting.title, "Lookup");
    assert!(
        client
            .painting(&PaintingId::from("painting-999"))
            .await
            .unwrap()
            .is_none()
    );
}
