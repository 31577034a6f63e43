use sketchbook_config::DisplayConfig;
use thiserror::Error;

use crate::constants::{MAX_CANVAS_SIZE, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::types::Rgb;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Expected #RRGGBB, got {0:?}")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Surface {width}x{height} exceeds maximum edge of {}", MAX_CANVAS_SIZE)]
    TooLarge { width: u32, height: u32 },
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f32),
    #[error("History must hold at least one entry")]
    EmptyHistory,
}

/// Parse a strict `#RRGGBB` color (case-insensitive hex digits)
pub fn parse_hex_color(text: &str) -> Result<Rgb, ColorError> {
    let malformed = || ColorError::Malformed(text.to_string());

    let digits = text.strip_prefix('#').ok_or_else(malformed)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| malformed());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Clamp a stroke width into 1..=50
pub fn clamp_stroke_width(width: u32) -> u32 {
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}

/// Clamp opacity into 0.0..=1.0; NaN becomes fully opaque
pub fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

/// Validate logical dimensions and scale, returning the physical buffer size
pub fn physical_size(display: &DisplayConfig) -> Result<(u32, u32), SurfaceError> {
    if !display.scale.is_finite() || display.scale <= 0.0 {
        return Err(SurfaceError::InvalidScale(display.scale));
    }

    let physical_width = display.scaled_width();
    let physical_height = display.scaled_height();

    if physical_width == 0 || physical_height == 0 {
        return Err(SurfaceError::InvalidSize {
            width: display.width,
            height: display.height,
        });
    }
    if physical_width > MAX_CANVAS_SIZE || physical_height > MAX_CANVAS_SIZE {
        return Err(SurfaceError::TooLarge {
            width: physical_width,
            height: physical_height,
        });
    }

    Ok((physical_width, physical_height))
}
