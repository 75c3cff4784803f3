//! Resampling to exact dimensions.
//!
//! Uses the `image` crate's Lanczos3 kernel on all four channels. The aspect
//! ratio is not preserved; the caller picks both dimensions.

use image::imageops::{self, FilterType};
use thiserror::Error;

use crate::buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// Target width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Source has no pixels to sample from
    #[error("Cannot resize an empty {width}x{height} image")]
    EmptySource { width: u32, height: u32 },

    #[error("Resize failed: {0}")]
    Failed(String),
}

/// Resample an image to `width x height` with a Lanczos3 filter.
///
/// Returns a new buffer; the input is untouched. Same-size requests return
/// a copy without resampling.
///
/// # Example
///
/// ```
/// use toolhub_core::{transform::resize, PixelBuffer};
///
/// let image = PixelBuffer::blank(40, 20);
/// let small = resize(&image, 10, 5).unwrap();
/// assert_eq!((small.width, small.height), (10, 5));
/// ```
pub fn resize(image: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer, ResizeError> {
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }
    if image.is_empty() {
        return Err(ResizeError::EmptySource {
            width: image.width,
            height: image.height,
        });
    }

    if (image.width, image.height) == (width, height) {
        return Ok(image.clone());
    }

    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| ResizeError::Failed("Failed to create RgbaImage".to_string()))?;

    let resized = imageops::resize(&rgba, width, height, FilterType::Lanczos3);

    log::debug!(
        "Resized {}x{} -> {}x{}",
        image.width,
        image.height,
        width,
        height
    );

    Ok(PixelBuffer::from_rgba_image(resized))
}
