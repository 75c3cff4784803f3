//! Resize WASM binding.

use crate::types::JsPixelBuffer;
use toolhub_core::transform;
use wasm_bindgen::prelude::*;

/// Resample an image to exact dimensions with a Lanczos3 filter.
///
/// The aspect ratio is not preserved. Fails if either dimension is zero or
/// the image is empty.
///
/// # Example
///
/// ```typescript
/// const resized = resize_image(image, 800, 600);
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(resized.pixels()), 800, 600), 0, 0);
/// ```
#[wasm_bindgen]
pub fn resize_image(image: &JsPixelBuffer, width: u32, height: u32) -> Result<JsPixelBuffer, JsValue> {
    transform::resize(image.buffer(), width, height)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
