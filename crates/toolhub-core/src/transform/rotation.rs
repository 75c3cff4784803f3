//! Quarter-turn rotation state and pixel remapping.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output surface we
//! look up the single source pixel that lands there. Quarter turns map pixel
//! centers exactly onto pixel centers, so no interpolation is involved and
//! pixel values are copied unchanged.
//!
//! For a `w x h` source, clockwise:
//! ```text
//!  90: src_x = dst_y,          src_y = h - 1 - dst_x
//! 180: src_x = w - 1 - dst_x,  src_y = h - 1 - dst_y
//! 270: src_x = w - 1 - dst_y,  src_y = dst_x
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Step applied by [`Rotation::rotate`].
const QUARTER_TURN: u16 = 90;
const FULL_TURN: u16 = 360;

/// Errors for rotation angles that are not quarter turns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("Rotation must be a multiple of 90 degrees, got {0}")]
    NotQuarterTurn(u32),
}

/// Cumulative rotation angle of the editing session.
///
/// Always one of 0, 90, 180 or 270 degrees (clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rotation(u16);

impl Rotation {
    pub const NONE: Rotation = Rotation(0);

    /// Create a rotation from an angle in degrees.
    ///
    /// Any multiple of 90 is accepted and normalized into `0..360`.
    pub fn from_degrees(degrees: u32) -> Result<Self, RotationError> {
        if degrees % QUARTER_TURN as u32 != 0 {
            return Err(RotationError::NotQuarterTurn(degrees));
        }
        Ok(Rotation((degrees % FULL_TURN as u32) as u16))
    }

    /// Angle in degrees, in `0..360`.
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Advance by 90 degrees, wrapping at 360: 0 -> 90 -> 180 -> 270 -> 0.
    ///
    /// Returns the new rotation.
    pub fn rotate(&mut self) -> Rotation {
        self.0 = (self.0 + QUARTER_TURN) % FULL_TURN;
        *self
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self.0, 90 | 270)
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl TryFrom<u32> for Rotation {
    type Error = RotationError;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for u32 {
    fn from(rotation: Rotation) -> Self {
        rotation.0 as u32
    }
}

/// Compute the dimensions of the surface an image is drawn onto.
///
/// # Example
///
/// ```
/// use toolhub_core::transform::{compute_rotated_bounds, Rotation};
///
/// let quarter = Rotation::from_degrees(90).unwrap();
/// assert_eq!(compute_rotated_bounds(100, 50, quarter), (50, 100));
/// assert_eq!(compute_rotated_bounds(100, 50, Rotation::NONE), (100, 50));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, rotation: Rotation) -> (u32, u32) {
    if rotation.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Draw an image through a rotation onto a new surface.
///
/// For 90 and 270 degrees the output has swapped dimensions. Pixel values,
/// alpha included, are copied without modification.
pub fn apply_rotation(image: &PixelBuffer, rotation: Rotation) -> PixelBuffer {
    // Fast path: no rotation needed
    if rotation.is_none() {
        return image.clone();
    }

    let (src_w, src_h) = (image.width, image.height);
    let (dst_w, dst_h) = compute_rotated_bounds(src_w, src_h, rotation);

    log::debug!(
        "Rotating {}x{} image by {} onto {}x{} surface",
        src_w,
        src_h,
        rotation,
        dst_w,
        dst_h
    );

    let mut output = PixelBuffer::blank(dst_w, dst_h);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (src_x, src_y) = match rotation.degrees() {
                90 => (dst_y, src_h - 1 - dst_x),
                180 => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                _ => (src_w - 1 - dst_y, dst_x),
            };
            output.set_pixel(dst_x, dst_y, image.pixel(src_x, src_y));
        }
    }

    output
}
