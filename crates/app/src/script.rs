//! Pointer-event scripts replayed against a drawing surface

use painting::{DrawingSurface, Point, Rgb, SurfaceOrigin, Tool, ToolController};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One host-side event: a pointer event, a toolbar action or a layout change
///
/// Pointer coordinates are client-space; the surface subtracts its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ScriptEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerLeave { x: f32, y: f32 },
    Undo,
    SetTool(Tool),
    SetColor(Rgb),
    /// Raw text typed into the custom color field
    SetCustomColor(String),
    SetPreset(usize),
    SetWidth(u32),
    SetOpacity(f32),
    SetOrigin { left: f32, top: f32 },
}

/// Host state: the tool controller plus the surface it drives
pub struct DrawSession {
    pub controller: ToolController,
    pub surface: DrawingSurface,
}

impl DrawSession {
    pub fn new(surface: DrawingSurface) -> Self {
        Self {
            controller: ToolController::new(),
            surface,
        }
    }

    /// Apply one event
    pub fn apply(&mut self, event: &ScriptEvent) {
        let style = self.controller.style();
        match *event {
            ScriptEvent::PointerDown { x, y } => {
                self.surface
                    .pointer_down(Point::new(x, y), self.controller.tool());
            }
            ScriptEvent::PointerMove { x, y } => {
                self.surface.pointer_move(Point::new(x, y), &style);
            }
            ScriptEvent::PointerUp { x, y } => {
                self.surface.pointer_up(Point::new(x, y), &style);
            }
            ScriptEvent::PointerLeave { x, y } => {
                self.surface.pointer_leave(Point::new(x, y), &style);
            }
            ScriptEvent::Undo => {
                self.surface.undo();
            }
            ScriptEvent::SetTool(tool) => self.controller.set_tool(tool),
            ScriptEvent::SetColor(color) => self.controller.set_color(color),
            ScriptEvent::SetCustomColor(ref text) => {
                self.controller.set_custom_color_text(text.as_str());
            }
            ScriptEvent::SetPreset(index) => {
                self.controller.select_preset(index);
            }
            ScriptEvent::SetWidth(width) => self.controller.set_width(width),
            ScriptEvent::SetOpacity(opacity) => self.controller.set_opacity(opacity),
            ScriptEvent::SetOrigin { left, top } => {
                self.surface.set_origin(SurfaceOrigin::new(left, top));
            }
        }
    }

    /// Apply every event in order
    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a ScriptEvent>) -> usize {
        let mut count = 0;
        for event in events {
            self.apply(event);
            count += 1;
        }
        debug!(
            "Replayed {count} events, history {} entries",
            self.surface.history_len()
        );
        count
    }
}

/// Parse a JSON array of events
pub fn parse_script(json: &str) -> serde_json::Result<Vec<ScriptEvent>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = r##"[
        { "type": "SetOrigin", "data": { "left": 10, "top": 10 } },
        { "type": "SetColor", "data": "#0000FF" },
        { "type": "SetWidth", "data": 4 },
        { "type": "PointerDown", "data": { "x": 20, "y": 30 } },
        { "type": "PointerMove", "data": { "x": 60, "y": 30 } },
        { "type": "PointerUp", "data": { "x": 60, "y": 30 } },
        { "type": "SetTool", "data": "line" },
        { "type": "SetCustomColor", "data": "#zzz" },
        { "type": "PointerDown", "data": { "x": 20, "y": 50 } },
        { "type": "PointerLeave", "data": { "x": 60, "y": 50 } },
        { "type": "Undo" }
    ]"##;

    #[test]
    fn test_parse_script() {
        let events = parse_script(SCRIPT).unwrap();
        assert_eq!(events.len(), 11);
        assert_eq!(events[1], ScriptEvent::SetColor(Rgb::new(0, 0, 255)));
        assert_eq!(events[6], ScriptEvent::SetTool(Tool::Line));
        assert_eq!(events[10], ScriptEvent::Undo);
    }

    #[test]
    fn test_replay() {
        let surface = DrawingSurface::with_size(64, 64).unwrap();
        let mut session = DrawSession::new(surface);
        let events = parse_script(SCRIPT).unwrap();

        assert_eq!(session.replay(&events), 11);

        // Brush stroke survives, line stroke was undone
        assert_eq!(session.surface.history_len(), 2);
        assert_eq!(session.surface.get_pixel(30, 20), Some([0, 0, 255, 255]));
        assert_eq!(session.surface.get_pixel(30, 40), Some([255, 255, 255, 255]));

        // Malformed custom color text did not replace the active color
        assert_eq!(session.controller.custom_color_text(), "#zzz");
        assert_eq!(session.controller.color(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_malformed_script() {
        assert!(parse_script(r#"[{ "type": "Scribble" }]"#).is_err());
    }
}
