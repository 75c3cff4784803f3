//! Per-pixel color filters for the image editor.
//!
//! Each filter rewrites the R, G and B channels of every RGBA pixel and
//! leaves alpha untouched. Weighted sums are computed in `f64`, clamped to
//! `0..=255` and rounded half to even, which is what storing the same
//! expression into a canvas `Uint8ClampedArray` produces.
//!
//! ## Filters
//! - `grayscale`: BT.601 luminance copied into all three channels
//! - `sepia`: fixed 3x3 color matrix, computed from the original channels
//! - `brightness`: constant offset added to each channel

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::{check_rgba_len, BufferError, PixelBuffer, CHANNELS};
use crate::luminance::calculate_luminance_u8;
use crate::FilterOptions;

/// Sepia color matrix, one row per output channel.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Errors that can occur while filtering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The filter selector is not one of the known filters.
    #[error("Unknown filter: {0:?} (expected grayscale, sepia or brightness)")]
    UnknownFilter(String),

    /// The pixel data is not a valid RGBA buffer.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// The available filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Grayscale,
    Sepia,
    Brightness,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Brightness,
    ];

    /// Selector string used by the front end.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Sepia => "sepia",
            FilterKind::Brightness => "brightness",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// Apply a filter to RGBA pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `kind` - The filter to apply
/// * `options` - Filter parameters (brightness offset)
///
/// An empty buffer is a no-op. A buffer whose length is not a multiple of 4
/// is rejected before any pixel is touched.
pub fn apply_filter(
    pixels: &mut [u8],
    kind: FilterKind,
    options: &FilterOptions,
) -> Result<(), FilterError> {
    check_rgba_len(pixels.len())?;

    log::debug!(
        "Applying {} filter to {} pixels",
        kind,
        pixels.len() / CHANNELS
    );

    match kind {
        FilterKind::Grayscale => for_each_rgb(pixels, grayscale),
        FilterKind::Sepia => for_each_rgb(pixels, sepia),
        FilterKind::Brightness => {
            let offset = options.brightness_offset;
            for_each_rgb(pixels, |rgb| brightness(rgb, offset))
        }
    }

    Ok(())
}

impl PixelBuffer {
    /// Return a filtered copy of this buffer with identical dimensions.
    pub fn filtered(&self, kind: FilterKind, options: &FilterOptions) -> Result<Self, FilterError> {
        let mut out = self.clone();
        apply_filter(out.pixels_mut(), kind, options)?;
        Ok(out)
    }
}

#[inline]
fn for_each_rgb(pixels: &mut [u8], f: impl Fn([u8; 3]) -> [u8; 3]) {
    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let [r, g, b] = f([chunk[0], chunk[1], chunk[2]]);
        chunk[0] = r;
        chunk[1] = g;
        chunk[2] = b;
        // chunk[3] (alpha) is left as is
    }
}

/// Clamp a channel value and round it into a byte.
#[inline]
fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Luminance-weighted gray in all three channels.
#[inline]
fn grayscale([r, g, b]: [u8; 3]) -> [u8; 3] {
    let gray = calculate_luminance_u8(r, g, b);
    [gray, gray, gray]
}

/// Sepia tone. All outputs read the original channels.
#[inline]
fn sepia([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    SEPIA.map(|[kr, kg, kb]| to_channel(kr * r + kg * g + kb * b))
}

#[inline]
fn brightness([r, g, b]: [u8; 3], offset: u8) -> [u8; 3] {
    [
        r.saturating_add(offset),
        g.saturating_add(offset),
        b.saturating_add(offset),
    ]
}
