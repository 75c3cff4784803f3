//! Luminance calculation using ITU-R BT.601 (NTSC) coefficients.
//!
//! The grayscale filter collapses each pixel to this weighted average.
//! Arithmetic is `f64` so 8-bit results agree with a browser canvas, which
//! evaluates the same sum in double precision.

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f64 = 0.114;

/// Calculate luminance from channel values without rounding.
///
/// Inputs may be normalized (0.0 to 1.0) or 8-bit scale (0.0 to 255.0);
/// the result is on the same scale.
#[inline]
pub fn calculate_luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// Clamps and rounds half to even, the conversion a `Uint8ClampedArray`
/// store applies.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = calculate_luminance(f64::from(r), f64::from(g), f64::from(b));
    lum.clamp(0.0, 255.0).round_ties_even() as u8
}
