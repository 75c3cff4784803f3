//! Toolhub WASM - WebAssembly bindings for Toolhub
//!
//! This crate exposes the toolhub-core functionality to the JavaScript
//! front end. Every fallible binding returns `Result<_, JsValue>` with the
//! error message as a string; nothing panics across the boundary.
//!
//! # Module Structure
//!
//! - `types` - `JsPixelBuffer`, the wrapper for canvas RGBA data
//! - `filter` - One-shot filters and the `FilterOptions` wrapper
//! - `session` - Stateful image editor (rotate, resize, filter, export)
//! - `transform` - One-shot Lanczos resize
//! - `convert` - Unit converter
//! - `pdf` - PDF merge, split and page extraction
//! - `logger` - `log` records forwarded to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { EditSession, convert, merge_pdfs } from '@toolhub/wasm';
//!
//! await init();
//!
//! const session = EditSession.fromBytes(new Uint8Array(await file.arrayBuffer()));
//! session.rotate();
//! const filtered = session.applyFilter('sepia');
//!
//! convert('length', 'US', 'meter', 'feet', 1); // "3.2808"
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod filter;
mod logger;
mod pdf;
mod session;
mod transform;
mod types;

pub use convert::{categories, convert, convert_record, countries, units};
pub use filter::{apply_filter, apply_filter_with_options, filter_names, FilterOptions};
pub use logger::set_log_level;
pub use pdf::{extract_pdf_page, merge_pdfs, merged_file_name, pdf_info, pdf_page_count, split_pdf};
pub use session::{export_file_name, JsEditSession};
pub use transform::resize_image;
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
