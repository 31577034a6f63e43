//! CPU raster surface - 8-bit RGBA storage

/// One RGBA pixel, 8 bits per channel
pub type Pixel = [u8; 4];

/// An 8-bit RGBA CPU surface for painting
/// Stores pixels in row-major order, straight (non-premultiplied) alpha
pub struct CpuSurface {
    /// Surface dimensions in physical pixels
    pub width: u32,
    pub height: u32,
    pixels: Vec<Pixel>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, filled with `fill`
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; pixel_count],
        }
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Blend an opaque color onto an existing pixel (source-over)
    /// Formula: out = src * opacity + dst * (1 - opacity)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Pixel, opacity: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = blend(self.pixels[index], color, opacity);
    }

    /// Raw pixel data as bytes (RGBA8, row-major)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Overwrite every pixel from a snapshot of the same size
    ///
    /// Returns false (and leaves the surface untouched) on a size mismatch.
    pub fn restore_from(&mut self, pixels: &[Pixel]) -> bool {
        if pixels.len() != self.pixels.len() {
            return false;
        }
        self.pixels.copy_from_slice(pixels);
        true
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Source-over compositing of `src` (alpha scaled by `opacity`) onto `dst`
#[inline]
fn blend(dst: Pixel, src: Pixel, opacity: f32) -> Pixel {
    let src_alpha = (src[3] as f32 / 255.0) * opacity.clamp(0.0, 1.0);
    if src_alpha >= 1.0 {
        return src;
    }
    let inv_src_alpha = 1.0 - src_alpha;

    let channel = |s: u8, d: u8| (s as f32 * src_alpha + d as f32 * inv_src_alpha).round() as u8;
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * inv_src_alpha;

    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ]
}
