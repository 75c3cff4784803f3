//! Image editor WASM bindings.
//!
//! Exposed to JavaScript as `EditSession`. The front end keeps one per open
//! image and redraws its canvas from `output()` after each action.

use crate::filter::FilterOptions;
use crate::types::JsPixelBuffer;
use toolhub_core::session::EXPORT_FILE_NAME;
use toolhub_core::EditSession;
use wasm_bindgen::prelude::*;

/// Stateful image editor for JavaScript.
///
/// # Example (TypeScript)
/// ```typescript
/// const session = EditSession.fromBytes(bytes);
/// session.rotate();                       // 90
/// const img = session.applyFilter('grayscale');
/// download(session.exportPng(), exportFileName());
/// ```
#[wasm_bindgen(js_name = EditSession)]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen(js_class = EditSession)]
impl JsEditSession {
    /// Start a session on already decoded canvas pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(image: &JsPixelBuffer) -> JsEditSession {
        Self {
            inner: EditSession::new(image.buffer().clone()),
        }
    }

    /// Start a session from the bytes of a PNG or JPEG file.
    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8]) -> Result<JsEditSession, JsValue> {
        EditSession::from_bytes(bytes)
            .map(|inner| Self { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current rotation in degrees (0, 90, 180 or 270)
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> u32 {
        u32::from(self.inner.rotation())
    }

    /// Name of the filter behind the current output, if any
    #[wasm_bindgen(getter, js_name = lastFilter)]
    pub fn last_filter(&self) -> Option<String> {
        self.inner.last_filter().map(|kind| kind.as_str().to_string())
    }

    /// Advance the rotation by 90 degrees clockwise and return the new
    /// angle. Takes effect on the next `applyFilter`.
    pub fn rotate(&mut self) -> u32 {
        u32::from(self.inner.rotate())
    }

    /// Resample the source so the preview is `width x height`. Drops the
    /// filtered output.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: &FilterOptions) {
        self.inner.set_options(*options.inner());
    }

    /// Draw the source through the current rotation and apply a filter.
    #[wasm_bindgen(js_name = applyFilter)]
    pub fn apply_filter(&mut self, selector: &str) -> Result<JsPixelBuffer, JsValue> {
        self.inner
            .apply_filter_named(selector)
            .map(|image| JsPixelBuffer::from_buffer(image.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The source drawn through the current rotation, unfiltered.
    pub fn preview(&self) -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(self.inner.preview())
    }

    /// The image a download would contain.
    pub fn output(&self) -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(self.inner.output())
    }

    /// Encode the output as PNG bytes.
    #[wasm_bindgen(js_name = exportPng)]
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Drop rotation and filter output.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Download name for an exported image.
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}
