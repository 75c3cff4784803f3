//! PNG encoding for export.
//!
//! This module provides PNG encoding using the `image` crate's PNG encoder.
//! PNG is lossless and keeps the alpha channel, so an exported edit matches
//! the on-screen canvas exactly.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA image to PNG bytes.
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```
/// use toolhub_core::{encode::encode_png, PixelBuffer};
///
/// let image = PixelBuffer::blank(10, 10);
/// let png = encode_png(&image).unwrap();
///
/// // Verify PNG signature
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(
            image.pixels(),
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    log::debug!(
        "Encoded {}x{} image as PNG ({} bytes)",
        image.width,
        image.height,
        buffer.get_ref().len()
    );

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let image = PixelBuffer::new(100, 100, vec![128u8; 100 * 100 * 4]).unwrap();

        let png = encode_png(&image).unwrap();

        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_small_image() {
        // 1x1 pixel image
        let image = PixelBuffer::new(1, 1, vec![255, 0, 0, 255]).unwrap();

        let png = encode_png(&image).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_non_square() {
        // Wide image
        let result = encode_png(&PixelBuffer::blank(200, 50));
        assert!(result.is_ok());

        // Tall image
        let result = encode_png(&PixelBuffer::blank(50, 200));
        assert!(result.is_ok());
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&PixelBuffer::blank(0, 100));
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let result = encode_png(&PixelBuffer::blank(100, 0));
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}
