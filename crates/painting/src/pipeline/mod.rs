//! Drawing surface
//!
//! This module connects:
//! - Pointer input (begin / extend / end, or the client-space pointer wrappers)
//! - Segment rasterization onto the CPU surface
//! - Snapshot history for undo
//! - PNG export for upload
//!
//! All operations are synchronous and take `&mut self`; the surface is owned
//! by exactly one host.

mod export;
mod stroke;
mod undo;

use sketchbook_config::CanvasConfig;
use tracing::info;

use crate::gesture::GestureState;
use crate::history::History;
use crate::surface::CpuSurface;
use crate::types::{Rgb, SurfaceOrigin};
use crate::validation::{SurfaceError, physical_size};

pub use export::decode_png;

/// Interactive raster drawing surface
///
/// Workflow:
/// 1. `begin` on pointer-down opens a gesture for the chosen tool
/// 2. `extend` on pointer-move draws freehand segments
/// 3. `end` on pointer-up/leave commits the stroke and records a snapshot
/// 4. `undo` restores the previous snapshot, `export_bytes` encodes a PNG
pub struct DrawingSurface {
    /// Pixel buffer at physical resolution
    pub(crate) surface: CpuSurface,
    /// Physical pixels per logical pixel
    pub(crate) scale: f32,
    /// Logical size (before scaling)
    pub(crate) logical_width: u32,
    pub(crate) logical_height: u32,
    /// Background fill
    pub(crate) background: Rgb,
    /// Client-space position of the surface's top-left corner
    pub(crate) origin: SurfaceOrigin,
    /// Idle / Gesturing
    pub(crate) gesture: GestureState,
    /// Opacity applied to the segment being drawn; 1.0 between gestures
    pub(crate) drawing_opacity: f32,
    /// Undo snapshots (most recent at end)
    pub(crate) history: History,
}

impl DrawingSurface {
    /// Create a surface from a canvas config
    ///
    /// The buffer is allocated at `logical size x scale`, filled with the
    /// background, and recorded as the first history entry.
    pub fn new(config: &CanvasConfig) -> Result<Self, SurfaceError> {
        let display_config = &config.display;
        let (physical_width, physical_height) = physical_size(display_config)?;
        if config.max_history == 0 {
            return Err(SurfaceError::EmptyHistory);
        }

        let background = Rgb::from(config.background);
        let surface = CpuSurface::new(physical_width, physical_height, background.to_rgba());
        let history = History::new(surface.pixels(), config.max_history);

        info!(
            "Created drawing surface {}x{} (physical {}x{}, scale {}, history {})",
            display_config.width,
            display_config.height,
            physical_width,
            physical_height,
            display_config.scale,
            config.max_history
        );

        Ok(Self {
            surface,
            scale: display_config.scale,
            logical_width: display_config.width,
            logical_height: display_config.height,
            background,
            origin: SurfaceOrigin::default(),
            gesture: GestureState::Idle,
            drawing_opacity: 1.0,
            history,
        })
    }

    /// Create a surface of the given logical size with default settings
    pub fn with_size(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let mut config = CanvasConfig::default();
        config.display.width = width;
        config.display.height = height;
        Self::new(&config)
    }

    /// Logical width (pointer coordinate space)
    pub fn width(&self) -> u32 {
        self.logical_width
    }

    /// Logical height (pointer coordinate space)
    pub fn height(&self) -> u32 {
        self.logical_height
    }

    /// Buffer width in physical pixels
    pub fn physical_width(&self) -> u32 {
        self.surface.width
    }

    /// Buffer height in physical pixels
    pub fn physical_height(&self) -> u32 {
        self.surface.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Update the surface's on-screen position (after layout changes)
    pub fn set_origin(&mut self, origin: SurfaceOrigin) {
        self.origin = origin;
    }

    pub fn origin(&self) -> SurfaceOrigin {
        self.origin
    }

    /// Current gesture state
    pub fn gesture_state(&self) -> &GestureState {
        &self.gesture
    }

    /// Check if a gesture is in progress
    pub fn is_gesturing(&self) -> bool {
        self.gesture.is_active()
    }

    /// Opacity used by the last drawn segment; 1.0 whenever Idle
    pub fn drawing_opacity(&self) -> f32 {
        self.drawing_opacity
    }

    /// Read-only view of the pixel buffer
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    /// Get a single pixel in physical coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.surface.get_pixel(x, y)
    }
}
