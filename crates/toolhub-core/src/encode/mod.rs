//! Image encoding for download.
//!
//! The editor exports its current output as a PNG file, keeping alpha.
//!
//! # Examples
//!
//! ```ignore
//! use toolhub_core::{encode::encode_png, PixelBuffer};
//!
//! let image = PixelBuffer::blank(100, 100);
//! let png_bytes = encode_png(&image).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError};
