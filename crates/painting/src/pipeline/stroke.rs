//! Gesture handling for the drawing surface

use tracing::debug;

use crate::gesture::{Gesture, GestureState};
use crate::raster::stroke_segment;
use crate::types::{Point, StrokeStyle, Tool};

use super::DrawingSurface;

impl DrawingSurface {
    /// Begin a gesture at `point` (logical surface coordinates)
    ///
    /// Brush and pencil open a path here; line remembers the point as its
    /// anchor. Nothing is drawn yet. A gesture already in progress is
    /// abandoned without recording history.
    pub fn begin(&mut self, point: Point, tool: Tool) {
        if let Some(previous) = self.gesture.gesture() {
            debug!("begin: abandoning unfinished {:?} gesture", previous.tool);
        }
        debug!("begin: {:?} at ({:.1}, {:.1})", tool, point.x, point.y);
        self.gesture = GestureState::Gesturing(Gesture::start(tool, point));
    }

    /// Continue the gesture to `point`
    ///
    /// Brush and pencil draw one segment from the last recorded point. The
    /// line tool ignores moves and draws only on release.
    pub fn extend(&mut self, point: Point, style: &StrokeStyle) {
        let Some(gesture) = self.gesture.gesture_mut() else {
            debug!("extend: no active gesture, ignoring");
            return;
        };
        if !gesture.tool.is_freehand() {
            return;
        }

        let from = gesture.last;
        let tool = gesture.tool;
        gesture.last = point;
        self.draw_segment(from, point, tool, style);
    }

    /// End the gesture at `point`, commit the stroke and record a snapshot
    ///
    /// Does nothing when no gesture is active.
    pub fn end(&mut self, point: Point, style: &StrokeStyle) {
        let Some(gesture) = self.gesture.take() else {
            debug!("end: no active gesture, ignoring");
            return;
        };

        if let Some(anchor) = gesture.anchor {
            self.draw_segment(anchor, point, gesture.tool, style);
        }

        self.drawing_opacity = 1.0;
        self.history.push(self.surface.pixels());
        debug!(
            "end: committed {:?} stroke, history now {} entries",
            gesture.tool,
            self.history.len()
        );
    }

    /// Pointer pressed at a client-space position
    pub fn pointer_down(&mut self, client: Point, tool: Tool) {
        let point = self.origin.to_local(client);
        self.begin(point, tool);
    }

    /// Pointer moved to a client-space position
    pub fn pointer_move(&mut self, client: Point, style: &StrokeStyle) {
        let point = self.origin.to_local(client);
        self.extend(point, style);
    }

    /// Pointer released at a client-space position
    pub fn pointer_up(&mut self, client: Point, style: &StrokeStyle) {
        let point = self.origin.to_local(client);
        self.end(point, style);
    }

    /// Pointer left the surface; treated the same as a release
    pub fn pointer_leave(&mut self, client: Point, style: &StrokeStyle) {
        self.pointer_up(client, style);
    }

    fn draw_segment(&mut self, from: Point, to: Point, tool: Tool, style: &StrokeStyle) {
        self.drawing_opacity = style.opacity;
        let region = stroke_segment(
            &mut self.surface,
            from,
            to,
            tool.line_width(style),
            self.scale,
            style.color.to_rgba(),
            self.drawing_opacity,
        );
        debug!(
            "  segment ({:.1}, {:.1}) -> ({:.1}, {:.1}), tool={:?}, color={}, affected={:?}",
            from.x, from.y, to.x, to.y, tool, style.color, region
        );
    }
}
