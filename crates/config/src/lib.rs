//! Shared configuration for Sketchbook
//!
//! This crate provides the single source of truth for canvas dimensions,
//! display density and undo depth, shared by the drawing surface and the host.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default canvas width in logical pixels
pub const DEFAULT_WIDTH: u32 = 672;

/// Default canvas height in logical pixels (the canvas is square)
pub const DEFAULT_HEIGHT: u32 = 672;

/// Default scale factor (1.0 = one physical pixel per logical pixel)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default number of raster snapshots kept for undo
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Default background fill (opaque white)
pub const DEFAULT_BACKGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Environment variable overriding the logical canvas size (`WIDTHxHEIGHT`)
pub const ENV_CANVAS_SIZE: &str = "SKETCHBOOK_CANVAS_SIZE";

/// Environment variable overriding the display scale factor
pub const ENV_SCALE: &str = "SKETCHBOOK_SCALE";

/// Environment variable overriding the undo depth
pub const ENV_HISTORY: &str = "SKETCHBOOK_HISTORY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Display configuration for the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Canvas width in logical pixels
    pub width: u32,
    /// Canvas height in logical pixels
    pub height: u32,
    /// Physical pixels per logical pixel (device pixel ratio)
    pub scale: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl DisplayConfig {
    /// Create a new display config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: DEFAULT_SCALE,
        }
    }

    /// Builder-style scale override
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Get scaled width (for physical pixel calculations)
    pub fn scaled_width(&self) -> u32 {
        (self.width as f32 * self.scale) as u32
    }

    /// Get scaled height (for physical pixel calculations)
    pub fn scaled_height(&self) -> u32 {
        (self.height as f32 * self.scale) as u32
    }
}

/// Full configuration for one drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub display: DisplayConfig,
    /// Maximum number of history snapshots, including the blank one
    pub max_history: usize,
    /// Background fill as RGB
    pub background: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            max_history: DEFAULT_MAX_HISTORY,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl CanvasConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply `SKETCHBOOK_*` overrides using the given variable lookup
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ENV_CANVAS_SIZE) {
            let (width, height) = parse_size(&value).ok_or(ConfigError::InvalidValue {
                name: ENV_CANVAS_SIZE,
                value: value.clone(),
            })?;
            self.display.width = width;
            self.display.height = height;
        }

        if let Some(value) = lookup(ENV_SCALE) {
            self.display.scale = value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or(ConfigError::InvalidValue {
                    name: ENV_SCALE,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(ENV_HISTORY) {
            self.max_history = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or(ConfigError::InvalidValue {
                    name: ENV_HISTORY,
                    value: value.clone(),
                })?;
        }

        Ok(())
    }
}

/// Parse `WIDTHxHEIGHT`
fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let width = w.trim().parse().ok()?;
    let height = h.trim().parse().ok()?;
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_scaled_dimensions() {
        let config = DisplayConfig::new(400, 300).with_scale(2.0);
        assert_eq!(config.scaled_width(), 800);
        assert_eq!(config.scaled_height(), 600);
    }

    #[test]
    fn test_overrides() {
        let mut config = CanvasConfig::default();
        config
            .apply_overrides(|name| match name {
                ENV_CANVAS_SIZE => Some("320x240".to_string()),
                ENV_SCALE => Some("1.5".to_string()),
                ENV_HISTORY => Some("5".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.display, DisplayConfig::new(320, 240).with_scale(1.5));
        assert_eq!(config.max_history, 5);
    }

    #[test]
    fn test_invalid_overrides() {
        let mut config = CanvasConfig::default();
        let result = config.apply_overrides(|name| (name == ENV_SCALE).then(|| "0".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: ENV_SCALE, .. })
        ));

        let result =
            config.apply_overrides(|name| (name == ENV_CANVAS_SIZE).then(|| "wide".to_string()));
        assert!(result.is_err());

        let result = config.apply_overrides(|name| (name == ENV_HISTORY).then(|| "0".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{ "display": { "width": 64, "height": 32, "scale": 2.0 } }"#)
                .unwrap();
        assert_eq!(config.display.scaled_width(), 128);
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
        assert_eq!(config.background, DEFAULT_BACKGROUND);
    }
}
