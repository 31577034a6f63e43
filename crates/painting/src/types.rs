use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::PENCIL_WIDTH_FACTOR;
use crate::validation::{ColorError, clamp_opacity, clamp_stroke_width, parse_hex_color};

/// Rendering mode for a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand path at the configured width
    #[default]
    Brush,
    /// Freehand path at half the configured width
    Pencil,
    /// Straight segment from press to release, no preview
    Line,
}

impl Tool {
    /// Stroke width this tool renders for the given style, in logical pixels
    pub fn line_width(self, style: &StrokeStyle) -> f32 {
        match self {
            Tool::Pencil => style.width as f32 * PENCIL_WIDTH_FACTOR,
            Tool::Brush | Tool::Line => style.width as f32,
        }
    }

    /// Whether pointer moves draw segments while the gesture is active
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Pencil)
    }
}

/// A point in logical surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// On-screen position of the surface's top-left corner, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceOrigin {
    pub left: f32,
    pub top: f32,
}

impl SurfaceOrigin {
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Translate a client-space pointer position into surface space
    #[inline]
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }
}

/// Opaque RGB stroke color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Opaque RGBA pixel value
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex_color(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Style parameters supplied by the host on every render-affecting call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Configured width in logical px (1..=50)
    pub width: u32,
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            width: crate::constants::DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Create a style, clamping width and opacity into their valid ranges
    pub fn new(color: Rgb, width: u32, opacity: f32) -> Self {
        Self {
            color,
            width: clamp_stroke_width(width),
            opacity: clamp_opacity(opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pencil_is_half_width() {
        let style = StrokeStyle::new(Rgb::BLACK, 12, 1.0);
        assert_eq!(Tool::Brush.line_width(&style), 12.0);
        assert_eq!(Tool::Line.line_width(&style), 12.0);
        assert_eq!(Tool::Pencil.line_width(&style), 6.0);
    }

    #[test]
    fn test_style_clamps() {
        let style = StrokeStyle::new(Rgb::BLACK, 0, 1.5);
        assert_eq!(style.width, 1);
        assert_eq!(style.opacity, 1.0);

        let style = StrokeStyle::new(Rgb::BLACK, 80, -0.2);
        assert_eq!(style.width, 50);
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn test_origin_mapping() {
        let origin = SurfaceOrigin::new(100.0, 40.0);
        assert_eq!(origin.to_local(Point::new(110.0, 45.5)), Point::new(10.0, 5.5));
    }

    #[test]
    fn test_rgb_serde_as_hex() {
        let json = serde_json::to_string(&Rgb::new(0xFF, 0xA5, 0x00)).unwrap();
        assert_eq!(json, "\"#FFA500\"");

        let parsed: Rgb = serde_json::from_str("\"#4b0082\"").unwrap();
        assert_eq!(parsed, Rgb::new(0x4B, 0x00, 0x82));

        assert!(serde_json::from_str::<Rgb>("\"4b0082\"").is_err());
    }

    #[test]
    fn test_tool_serde_lowercase() {
        let tool: Tool = serde_json::from_str("\"pencil\"").unwrap();
        assert_eq!(tool, Tool::Pencil);
        assert!(!Tool::Line.is_freehand());
    }
}
