//! Image file decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{DecodeError, Orientation};
use crate::buffer::PixelBuffer;

/// Decode an image file (PNG or JPEG) into RGBA pixels.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
///
/// # Returns
///
/// A `PixelBuffer` with RGBA pixel data and EXIF orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::Empty` if no bytes were given.
/// Returns `DecodeError::InvalidFormat` if the format is not recognized.
/// Returns `DecodeError::CorruptedFile` if the image is corrupted.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let Some(format) = reader.format() else {
        log::warn!("Rejected image: unrecognized format ({} bytes)", bytes.len());
        return Err(DecodeError::InvalidFormat);
    };

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let orientation = get_orientation(bytes);
    log::debug!(
        "Decoded {:?} image {}x{} ({:?})",
        format,
        img.width(),
        img.height(),
        orientation
    );

    let upright = orientation.apply(img);
    Ok(PixelBuffer::from_rgba_image(upright.into_rgba8()))
}

/// EXIF orientation of an image file. Files without EXIF data, PNGs
/// included, are upright.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from_exif)
        .unwrap_or_default()
}
