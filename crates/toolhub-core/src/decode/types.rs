//! Decode errors and EXIF orientation.

use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Empty image file")]
    Empty,

    /// Neither PNG nor JPEG.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// How the camera was held, from the EXIF `Orientation` tag (values 1-8).
///
/// Variant names describe the transform that makes the stored pixels
/// upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Upright,
    Mirror,
    Rotate180,
    MirrorRotate180,
    MirrorRotate90,
    Rotate90,
    MirrorRotate270,
    Rotate270,
}

impl Orientation {
    /// Map an EXIF tag value. Values outside 1-8 are treated as upright.
    pub fn from_exif(value: u32) -> Self {
        match value {
            2 => Orientation::Mirror,
            3 => Orientation::Rotate180,
            4 => Orientation::MirrorRotate180,
            5 => Orientation::MirrorRotate90,
            6 => Orientation::Rotate90,
            7 => Orientation::MirrorRotate270,
            8 => Orientation::Rotate270,
            _ => Orientation::Upright,
        }
    }

    /// Turn decoded pixels upright, the way a browser does when drawing the
    /// image.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Orientation::Upright => img,
            Orientation::Mirror => img.fliph(),
            Orientation::Rotate180 => img.rotate180(),
            Orientation::MirrorRotate180 => img.flipv(),
            Orientation::MirrorRotate90 => img.rotate90().fliph(),
            Orientation::Rotate90 => img.rotate90(),
            Orientation::MirrorRotate270 => img.rotate270().fliph(),
            Orientation::Rotate270 => img.rotate270(),
        }
    }
}
