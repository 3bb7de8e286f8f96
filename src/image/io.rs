//! I/O collaborators backed by the `image` crate.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an interleaved RGB8 buffer.
//! - `save_image`: encode a pixel buffer back to disk, repacking rows when
//!   the stride carries padding.
use super::PixelBuffer;
use crate::filter::FilterError;
use image::{DynamicImage, ImageBuffer, Rgb, Rgba};
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<PixelBuffer, FilterError> {
    let img = image::open(path)
        .map_err(|e| FilterError::Decode(format!("failed to open {}: {e}", path.display())))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    PixelBuffer::from_raw(width, height, 3, width * 3, data)
        .map_err(|e| FilterError::Decode(e.to_string()))
}

/// Encode an RGB or RGBA buffer to disk; the format follows the extension.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<(), FilterError> {
    let width = buffer.width();
    let height = buffer.height();
    let mut tight = Vec::with_capacity(width * buffer.channels() * height);
    for y in 0..height {
        tight.extend_from_slice(buffer.row(y));
    }

    let dynamic = match buffer.channels() {
        3 => ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(width as u32, height as u32, tight)
            .map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width as u32, height as u32, tight)
            .map(DynamicImage::ImageRgba8),
        n => {
            return Err(FilterError::Encode(format!(
                "cannot encode a {n}-channel buffer"
            )))
        }
    }
    .ok_or_else(|| FilterError::Encode("failed to create image buffer".to_string()))?;

    dynamic
        .save(path)
        .map_err(|e| FilterError::Encode(format!("failed to save {}: {e}", path.display())))
}
