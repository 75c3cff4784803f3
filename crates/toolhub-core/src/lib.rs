//! Toolhub Core - client-side productivity tools
//!
//! This crate provides the processing behind the Toolhub front end:
//! pixel filters, quarter-turn rotation and resizing for the image editor, the
//! per-country unit converter, and PDF merge/split on top of `lopdf`.

pub mod buffer;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod filter;
pub mod luminance;
pub mod pdf;
pub mod session;
pub mod transform;

pub use buffer::{BufferError, PixelBuffer};
pub use convert::{convert, convert_units, units, Category, Conversion, ConvertError, Country};
pub use filter::{apply_filter, FilterError, FilterKind};
pub use session::EditSession;
pub use transform::{
    apply_rotation, compute_rotated_bounds, resize, ResizeError, Rotation, RotationError,
};

/// Default amount added to each color channel by the brightness filter.
pub const DEFAULT_BRIGHTNESS_OFFSET: u8 = 50;

/// Tunable filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Offset added to R, G and B by the brightness filter (saturates at 255)
    pub brightness_offset: u8,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            brightness_offset: DEFAULT_BRIGHTNESS_OFFSET,
        }
    }
}

impl FilterOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_default() {
        let options = FilterOptions::new();
        assert!(options.is_default());
        assert_eq!(options.brightness_offset, 50);
    }

    #[test]
    fn test_filter_options_not_default() {
        let mut options = FilterOptions::new();
        options.brightness_offset = 10;
        assert!(!options.is_default());
    }
}
