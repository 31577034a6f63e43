//! Sketchbook painting system - raster drawing surface
//!
//! This crate provides the interactive drawing surface and its parts:
//! - [`pipeline::DrawingSurface`] - gesture state machine, undo and PNG export
//! - [`surface`] - CPU 8-bit RGBA pixel buffer
//! - [`raster`] - round-capped segment rasterization
//! - [`history`] - bounded snapshot history
//! - [`gesture`] - Idle / Gesturing state
//! - [`controller`] - host-side tool and style selection
//! - [`validation`] - color parsing, range clamping and size checks

pub mod constants;
pub mod controller;
pub mod gesture;
pub mod history;
pub mod pipeline;
pub mod raster;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use controller::*;
pub use gesture::*;
pub use history::*;
pub use pipeline::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
