//! RGBA pixel buffer shared by the decoder, filters and rotation.

use thiserror::Error;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Errors raised when pixel data does not describe a valid RGBA image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Pixel data is not made of whole RGBA pixels
    #[error("Invalid pixel data: {0} bytes is not a multiple of 4")]
    PartialPixel(usize),
}

/// Check that a raw buffer holds whole RGBA pixels.
pub fn check_rgba_len(len: usize) -> Result<(), BufferError> {
    if len % CHANNELS != 0 {
        return Err(BufferError::PartialPixel(len));
    }
    Ok(())
}

/// An image as RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, checking that `pixels` holds exactly `width * height` RGBA pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let expected = expected_len(width, height);
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a fully transparent black buffer.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; expected_len(width, height)],
        }
    }

    /// Create a PixelBuffer from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Copy into an image::RgbaImage for the `image` crate's operations.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA value at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_buffer_creation() {
        let img = PixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 4]).unwrap();
        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 20000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_pixel_buffer_rejects_wrong_length() {
        let result = PixelBuffer::new(2, 2, vec![0u8; 15]);
        assert_eq!(
            result,
            Err(BufferError::LengthMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_pixel_buffer_empty() {
        let img = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert!(img.is_empty());
        assert_eq!(img.byte_size(), 0);
    }

    #[test]
    fn test_pixel_access() {
        let mut img = PixelBuffer::blank(3, 2);
        img.set_pixel(2, 1, [10, 20, 30, 40]);
        assert_eq!(img.pixel(2, 1), [10, 20, 30, 40]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(&img.pixels()[20..24], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_rgba_image_round_trip() {
        let img = PixelBuffer::new(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let rgba = img.to_rgba_image().unwrap();
        assert_eq!(rgba.dimensions(), (1, 2));
        assert_eq!(PixelBuffer::from_rgba_image(rgba), img);
    }

    #[test]
    fn test_check_rgba_len() {
        assert!(check_rgba_len(0).is_ok());
        assert!(check_rgba_len(8).is_ok());
        assert_eq!(check_rgba_len(6), Err(BufferError::PartialPixel(6)));
    }

    #[test]
    fn test_buffer_error_display() {
        let err = BufferError::PartialPixel(7);
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: 7 bytes is not a multiple of 4"
        );
    }
}
