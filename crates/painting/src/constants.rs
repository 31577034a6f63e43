/// Maximum physical canvas edge. Not a magic number - may change.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Smallest stroke width the host can select (logical px).
pub const MIN_STROKE_WIDTH: u32 = 1;

/// Largest stroke width the host can select (logical px).
pub const MAX_STROKE_WIDTH: u32 = 50;

/// Pencil strokes render at this fraction of the configured width.
pub const PENCIL_WIDTH_FACTOR: f32 = 0.5;

/// Stroke width the tool controller starts with.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Swatches offered by the color palette.
pub const PRESET_COLORS: [&str; 15] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#FFA500", "#800080", "#FFC0CB", "#A52A2A", "#808080", "#FFD700", "#4B0082",
];
