//! Host-memory pixel surfaces
//!
//! A [`Surface`] is the staging buffer between image decoding (or text
//! rasterization) and GPU upload. Pixels are always tightly packed RGBA8;
//! the buffer is released by drop once the render context has consumed it.

use std::path::Path;

use crate::assets::AssetError;
use crate::render::Color;

/// Decoded pixel data ready for GPU upload
#[derive(Debug, Clone)]
pub struct Surface {
    /// Raw RGBA pixel data, 4 bytes per pixel
    pub data: Vec<u8>,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Surface {
    /// Load a surface from an image file
    ///
    /// # Errors
    /// Returns [`AssetError::LoadFailed`] when the file cannot be opened or
    /// decoded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image: {}", e)))?;

        // RGBA8 is the standard format for GPU upload
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Load a surface from encoded image bytes (useful for embedded resources)
    ///
    /// # Errors
    /// Returns [`AssetError::LoadFailed`] when the bytes cannot be decoded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color surface (useful for testing and defaults)
    #[must_use]
    pub fn solid_color(width: u32, height: u32, color: Color) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }

        Self {
            data,
            width,
            height,
        }
    }

    /// Make every pixel matching the given RGB value fully transparent
    ///
    /// The alpha channel of the key color is ignored; only the RGB channels
    /// are compared.
    ///
    /// # Errors
    /// Returns [`AssetError::InvalidData`] when the pixel buffer does not
    /// match the declared dimensions.
    pub fn set_color_key(&mut self, key: Color) -> Result<(), AssetError> {
        let expected = (self.width * self.height) as usize * 4;
        if self.data.len() != expected {
            return Err(AssetError::InvalidData(format!(
                "Pixel buffer is {} bytes, expected {} for {}x{} RGBA",
                self.data.len(),
                expected,
                self.width,
                self.height
            )));
        }

        for pixel in self.data.chunks_exact_mut(4) {
            if pixel[0] == key.r && pixel[1] == key.g && pixel[2] == key.b {
                pixel[3] = 0;
            }
        }

        Ok(())
    }

    /// Get the size of the pixel data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
