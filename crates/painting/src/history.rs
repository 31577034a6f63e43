//! Bounded snapshot history for undo

use std::collections::VecDeque;

use tracing::debug;

use crate::surface::Pixel;

/// A full copy of the raster pixels at one point in time
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    pixels: Vec<Pixel>,
}

impl Snapshot {
    pub fn new(pixels: &[Pixel]) -> Self {
        Self {
            pixels: pixels.to_vec(),
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("pixels", &self.pixels.len())
            .finish()
    }
}

/// Capped FIFO of snapshots, most recent at the back
///
/// Always holds between 1 and `capacity` entries. When full, the oldest
/// snapshot is evicted and its allocation reused for the new one.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// Create a history seeded with the initial state
    ///
    /// `capacity` is raised to 1 if zero.
    pub fn new(initial: &[Pixel], capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity);
        entries.push_back(Snapshot::new(initial));
        Self { entries, capacity }
    }

    /// Number of stored snapshots
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `pop` would do anything
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Snapshot that `pop` would expose, if any
    pub fn previous(&self) -> Option<&Snapshot> {
        let len = self.entries.len();
        if len < 2 {
            return None;
        }
        self.entries.get(len - 2)
    }

    /// Record the given pixels as the newest snapshot
    pub fn push(&mut self, pixels: &[Pixel]) {
        if self.entries.len() >= self.capacity {
            if let Some(mut recycled) = self.entries.pop_front() {
                debug!("History full ({}), evicting oldest snapshot", self.capacity);
                recycled.pixels.clear();
                recycled.pixels.extend_from_slice(pixels);
                self.entries.push_back(recycled);
                return;
            }
        }
        self.entries.push_back(Snapshot::new(pixels));
    }

    /// Drop the newest snapshot and return the one now on top
    ///
    /// Returns None (and changes nothing) when only one snapshot remains.
    pub fn pop(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.entries.pop_back();
        self.entries.back()
    }
}
