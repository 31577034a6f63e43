//! Tool and style selection owned by the host

use tracing::debug;

use crate::constants::{DEFAULT_STROKE_WIDTH, PRESET_COLORS};
use crate::types::{Rgb, StrokeStyle, Tool};
use crate::validation::{clamp_opacity, clamp_stroke_width, parse_hex_color};

/// Current tool, color, width and opacity selections
///
/// The custom color text field is kept separately from the active color:
/// any text is retained, but only a strict `#RRGGBB` value becomes active.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolController {
    tool: Tool,
    color: Rgb,
    width: u32,
    opacity: f32,
    custom_color_text: String,
}

impl Default for ToolController {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: Rgb::BLACK,
            width: DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
            custom_color_text: Rgb::BLACK.to_hex(),
        }
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Set the active color directly (palette swatch or color picker)
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.custom_color_text = color.to_hex();
    }

    /// Select one of the palette swatches; out-of-range indices are ignored
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(color) = PRESET_COLORS
            .get(index)
            .and_then(|hex| parse_hex_color(hex).ok())
        else {
            debug!("select_preset: no swatch at index {index}");
            return false;
        };
        self.color = color;
        true
    }

    pub fn custom_color_text(&self) -> &str {
        &self.custom_color_text
    }

    /// Update the custom color text field
    ///
    /// The text is always stored; the active color changes only when the text
    /// is a valid `#RRGGBB` value. Returns whether the active color changed.
    pub fn set_custom_color_text(&mut self, text: impl Into<String>) -> bool {
        self.custom_color_text = text.into();
        match parse_hex_color(&self.custom_color_text) {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(err) => {
                debug!("Keeping color {}: {err}", self.color);
                false
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the stroke width, clamped to 1..=50
    pub fn set_width(&mut self, width: u32) {
        self.width = clamp_stroke_width(width);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped to 0.0..=1.0
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = clamp_opacity(opacity);
    }

    /// Render parameters for the drawing surface
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.width, self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let controller = ToolController::new();
        assert_eq!(controller.tool(), Tool::Brush);
        assert_eq!(controller.style(), StrokeStyle::default());
        assert_eq!(controller.custom_color_text(), "#000000");
    }

    #[test]
    fn test_malformed_custom_color_is_retained_but_inactive() {
        let mut controller = ToolController::new();
        controller.set_color(Rgb::new(255, 0, 0));

        assert!(!controller.set_custom_color_text("#12"));
        assert_eq!(controller.custom_color_text(), "#12");
        assert_eq!(controller.color(), Rgb::new(255, 0, 0));

        assert!(controller.set_custom_color_text("#123abc"));
        assert_eq!(controller.color(), Rgb::new(0x12, 0x3A, 0xBC));
    }

    #[test]
    fn test_width_and_opacity_are_clamped() {
        let mut controller = ToolController::new();
        controller.set_width(200);
        controller.set_opacity(-1.0);
        assert_eq!(controller.width(), 50);
        assert_eq!(controller.opacity(), 0.0);
    }

    #[test]
    fn test_select_preset() {
        let mut controller = ToolController::new();
        assert!(controller.select_preset(8));
        assert_eq!(controller.color(), Rgb::new(0xFF, 0xA5, 0x00));
        assert!(!controller.select_preset(PRESET_COLORS.len()));
        assert_eq!(controller.color(), Rgb::new(0xFF, 0xA5, 0x00));
    }
}
