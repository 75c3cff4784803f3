//! Image decoding for the editor.
//!
//! This module turns the bytes of a user-selected image file into an RGBA
//! [`PixelBuffer`](crate::PixelBuffer), the same data a canvas hands out from
//! `getImageData`. EXIF orientation is applied, matching how browsers draw
//! photos taken on phones.
//!
//! # Examples
//!
//! ```ignore
//! use toolhub_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod load;
mod types;

pub use load::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation};
