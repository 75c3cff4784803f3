//! Filter WASM bindings.
//!
//! One-shot filters on a `JsPixelBuffer` plus the `FilterOptions`
//! wrapper. The stateful editor lives in `session`.

use crate::types::JsPixelBuffer;
use toolhub_core::FilterKind;
use wasm_bindgen::prelude::*;

/// Filter options wrapper for JavaScript
#[wasm_bindgen]
pub struct FilterOptions {
    inner: toolhub_core::FilterOptions,
}

#[wasm_bindgen]
impl FilterOptions {
    /// Create options with default values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: toolhub_core::FilterOptions::new(),
        }
    }

    /// Get the brightness offset
    #[wasm_bindgen(getter)]
    pub fn brightness_offset(&self) -> u8 {
        self.inner.brightness_offset
    }

    /// Set the brightness offset
    #[wasm_bindgen(setter)]
    pub fn set_brightness_offset(&mut self, value: u8) {
        self.inner.brightness_offset = value;
    }

    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON. Missing fields take their defaults.
    pub fn from_json(value: JsValue) -> Result<FilterOptions, JsValue> {
        let inner: toolhub_core::FilterOptions =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterOptions {
    pub(crate) fn inner(&self) -> &toolhub_core::FilterOptions {
        &self.inner
    }
}

/// Apply a filter ("grayscale", "sepia" or "brightness") with default
/// options, returning a new image.
///
/// # Example (TypeScript)
/// ```typescript
/// const data = ctx.getImageData(0, 0, w, h);
/// const img = new JsPixelBuffer(w, h, new Uint8Array(data.data.buffer));
/// const sepia = apply_filter(img, 'sepia');
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsPixelBuffer, selector: &str) -> Result<JsPixelBuffer, JsValue> {
    apply_filter_with_options(image, selector, &FilterOptions::new())
}

/// Apply a filter with explicit options.
#[wasm_bindgen]
pub fn apply_filter_with_options(
    image: &JsPixelBuffer,
    selector: &str,
    options: &FilterOptions,
) -> Result<JsPixelBuffer, JsValue> {
    let kind: FilterKind = selector
        .parse()
        .map_err(|e: toolhub_core::FilterError| JsValue::from_str(&e.to_string()))?;
    image
        .buffer()
        .filtered(kind, options.inner())
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Selectors accepted by `apply_filter`, in display order.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    FilterKind::ALL
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_pixel() -> JsPixelBuffer {
        JsPixelBuffer::new(1, 1, vec![100, 100, 100, 200]).unwrap()
    }

    #[test]
    fn test_filter_options_defaults() {
        let options = FilterOptions::new();
        assert_eq!(options.brightness_offset(), 50);
        assert!(options.is_default());
    }

    #[test]
    fn test_filter_options_setter() {
        let mut options = FilterOptions::default();
        options.set_brightness_offset(10);
        assert_eq!(options.brightness_offset(), 10);
        assert!(!options.is_default());
    }

    #[test]
    fn test_apply_filter_sepia() {
        let out = apply_filter(&gray_pixel(), "sepia").unwrap();
        assert_eq!(out.pixels(), vec![135, 120, 94, 200]);
    }

    #[test]
    fn test_apply_filter_with_options() {
        let mut options = FilterOptions::new();
        options.set_brightness_offset(5);
        let out = apply_filter_with_options(&gray_pixel(), "Brightness", &options).unwrap();
        assert_eq!(out.pixels(), vec![105, 105, 105, 200]);
    }

    #[test]
    fn test_source_image_untouched() {
        let img = gray_pixel();
        apply_filter(&img, "grayscale").unwrap();
        apply_filter(&img, "brightness").unwrap();
        assert_eq!(img.pixels(), vec![100, 100, 100, 200]);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(filter_names(), vec!["grayscale", "sepia", "brightness"]);
    }
}
