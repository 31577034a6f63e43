//! Undo for the drawing surface

use tracing::debug;

use super::DrawingSurface;

impl DrawingSurface {
    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Number of snapshots held, including the blank (or oldest kept) one
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Undo the last committed stroke
    ///
    /// Drops the newest snapshot and repaints the buffer from the one below.
    /// Returns true if an undo was performed, false if only one snapshot
    /// remains.
    pub fn undo(&mut self) -> bool {
        if self.gesture.is_active() {
            debug!("Undo requested mid-gesture; restoring last committed state");
        }

        let Some(previous) = self.history.previous() else {
            debug!("Undo: no entries available");
            return false;
        };

        if !self.surface.restore_from(previous.pixels()) {
            debug!("Undo: snapshot size mismatch, buffer and history left unchanged");
            return false;
        }
        self.history.pop();

        debug!("Undo: restored snapshot, {} entries left", self.history.len());
        true
    }
}
