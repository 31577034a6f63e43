//! Gallery data types shared with the backend

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GalleryError;

/// Lowest accepted rating
pub const MIN_POINTS: u8 = 1;

/// Highest accepted rating
pub const MAX_POINTS: u8 = 10;

/// Backend-assigned painting identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaintingId(pub String);

impl fmt::Display for PaintingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaintingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Opaque identity of an authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A completed painting as listed in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Painting {
    pub id: PaintingId,
    pub title: String,
    /// Creation time, milliseconds since the Unix epoch
    pub created_ms: u64,
    pub author: UserId,
    /// PNG bytes as exported by the drawing surface
    pub image: Vec<u8>,
}

/// One user's rating of a painting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub user: UserId,
    pub points: Points,
}

/// A rating in 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Points(u8);

impl Points {
    pub fn new(points: u8) -> Result<Self, GalleryError> {
        if (MIN_POINTS..=MAX_POINTS).contains(&points) {
            Ok(Self(points))
        } else {
            Err(GalleryError::InvalidPoints(points))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Points {
    type Error = GalleryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Points> for u8 {
    fn from(value: Points) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_range() {
        assert!(Points::new(0).is_err());
        assert_eq!(Points::new(1).unwrap().get(), 1);
        assert_eq!(Points::new(10).unwrap().get(), 10);
        assert!(matches!(
            Points::new(11),
            Err(GalleryError::InvalidPoints(11))
        ));
    }

    #[test]
    fn test_rating_entry_serde() {
        let entry = RatingEntry {
            user: UserId::from("alice"),
            points: Points::new(7).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"user":"alice","points":7}"#);

        let bad = serde_json::from_str::<RatingEntry>(r#"{"user":"bob","points":12}"#);
        assert!(bad.is_err());
    }
}
