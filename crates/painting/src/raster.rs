//! Segment rasterization with round caps

use tracing::debug;

use crate::surface::{CpuSurface, Pixel};
use crate::types::Point;

/// Stroke one segment from `from` to `to` onto the surface
///
/// Coordinates and width are in logical units; `scale` converts them to
/// physical pixels. Each pixel is blended with the fraction of its area the
/// stroke covers (see [`pixel_coverage`]), measured from the distance of its
/// center to the segment. Round caps at both ends let consecutive segments of
/// one path join without gaps. Covered pixels are blended once per call.
///
/// Returns the affected region (x, y, width, height) in physical pixels, or
/// None if nothing was drawn.
pub fn stroke_segment(
    surface: &mut CpuSurface,
    from: Point,
    to: Point,
    width: f32,
    scale: f32,
    color: Pixel,
    opacity: f32,
) -> Option<(u32, u32, u32, u32)> {
    let radius = width * scale / 2.0;
    if radius <= 0.0 || opacity <= 0.0 {
        debug!("stroke_segment: skipped, radius={radius:.2}, opacity={opacity:.2}");
        return None;
    }

    let (ax, ay) = (from.x * scale, from.y * scale);
    let (bx, by) = (to.x * scale, to.y * scale);

    // Bounding box of the capsule
    let x_min_f = (ax.min(bx) - radius).floor();
    let y_min_f = (ay.min(by) - radius).floor();
    let x_max_f = (ax.max(bx) + radius).ceil();
    let y_max_f = (ay.max(by) + radius).ceil();

    // Clamp to surface bounds
    let x_min = (x_min_f.max(0.0) as u32).min(surface.width);
    let y_min = (y_min_f.max(0.0) as u32).min(surface.height);
    let x_max = (x_max_f.max(0.0) as u32).min(surface.width);
    let y_max = (y_max_f.max(0.0) as u32).min(surface.height);

    if x_min >= x_max || y_min >= y_max {
        debug!("stroke_segment: outside surface bounds");
        return None;
    }

    // Pixels whose center is further than this are untouched
    let reach_sq = (radius + 0.5) * (radius + 0.5);
    for py in y_min..y_max {
        for px in x_min..x_max {
            let cx = px as f32 + 0.5;
            let cy = py as f32 + 0.5;
            let distance_sq = distance_sq_to_segment(cx, cy, ax, ay, bx, by);
            if distance_sq >= reach_sq {
                continue;
            }
            let coverage = pixel_coverage(distance_sq.sqrt(), radius);
            if coverage > 0.0 {
                surface.blend_pixel(px, py, color, opacity * coverage);
            }
        }
    }

    Some((x_min, y_min, x_max - x_min, y_max - y_min))
}

/// Fraction of a pixel covered by a band of half-width `radius`
///
/// `distance` is from the pixel center to the band's center line. This is the
/// exact one-dimensional box filter, so a straight stroke deposits `2 * radius`
/// pixels of ink across its width whatever its width or sub-pixel offset.
#[inline]
pub fn pixel_coverage(distance: f32, radius: f32) -> f32 {
    let near = (distance - radius).max(-0.5);
    let far = (distance + radius).min(0.5);
    (far - near).clamp(0.0, 1.0)
}

/// Squared distance from (px, py) to the segment a-b
#[inline]
pub fn distance_sq_to_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let nx = ax + dx * t - px;
    let ny = ay + dy * t - py;
    nx * nx + ny * ny
}
