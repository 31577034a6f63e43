use serde::Serialize;

use crate::types::{RatingEntry, UserId};

/// Ratings for one painting as seen by one viewer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Arithmetic mean of all points; None when nobody has rated
    pub average: Option<f64>,
    pub total: usize,
    /// The viewer's own rating, if any
    pub viewer_rating: Option<u8>,
}

impl RatingSummary {
    pub fn from_entries(entries: &[RatingEntry], viewer: Option<&UserId>) -> Self {
        let total = entries.len();
        let average = (total > 0).then(|| {
            let sum: u32 = entries.iter().map(|e| u32::from(e.points.get())).sum();
            f64::from(sum) / total as f64
        });
        let viewer_rating = viewer.and_then(|viewer| {
            entries
                .iter()
                .find(|e| &e.user == viewer)
                .map(|e| e.points.get())
        });

        Self {
            average,
            total,
            viewer_rating,
        }
    }
}
