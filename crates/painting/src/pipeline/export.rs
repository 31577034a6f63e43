//! PNG export for the drawing surface

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageFormat, RgbaImage};
use tracing::{info, warn};

use super::DrawingSurface;

impl DrawingSurface {
    /// Encode the current buffer as PNG (lossless, RGBA8, physical size)
    ///
    /// Returns an empty Vec if encoding fails; hosts treat a zero-length
    /// export as "nothing to submit".
    pub fn export_bytes(&self) -> Vec<u8> {
        match self.encode_png() {
            Ok(bytes) => {
                info!(
                    "Exported {}x{} surface ({} bytes)",
                    self.surface.width,
                    self.surface.height,
                    bytes.len()
                );
                bytes
            }
            Err(err) => {
                warn!("PNG export failed: {err}");
                Vec::new()
            }
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>, ImageError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.surface.as_bytes(),
            self.surface.width,
            self.surface.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}

/// Decode PNG bytes produced by `export_bytes` back into RGBA8 pixels
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    Ok(image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8())
}
