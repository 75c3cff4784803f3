//! PDF WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const merged = merge_pdfs([bytesA, bytesB]);
//! download(merged, merged_file_name());
//!
//! for (const page of split_pdf(bytes)) {
//!   download(page.bytes, page.fileName);
//! }
//! ```

use js_sys::{Array, Object, Reflect, Uint8Array};
use toolhub_core::pdf::{self, SplitPage, MERGED_FILE_NAME};
use wasm_bindgen::prelude::*;

/// Merge two or more PDFs, given as an array of `Uint8Array`, in order.
#[wasm_bindgen]
pub fn merge_pdfs(files: Array) -> Result<Vec<u8>, JsValue> {
    let documents = files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            file.dyn_into::<Uint8Array>()
                .map(|bytes| bytes.to_vec())
                .map_err(|_| JsValue::from_str(&format!("File {} is not a Uint8Array", i + 1)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pdf::merge_documents(&documents).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Split a PDF into single-page documents.
///
/// Returns `[{pageNumber, fileName, bytes}]` in page order.
#[wasm_bindgen]
pub fn split_pdf(bytes: &[u8]) -> Result<Array, JsValue> {
    let pages = pdf::split_document(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = Array::new();
    for page in &pages {
        result.push(&page_to_js(page)?);
    }
    Ok(result)
}

fn page_to_js(page: &SplitPage) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"pageNumber".into(), &page.page_number.into())?;
    Reflect::set(&obj, &"fileName".into(), &page.file_name().into())?;
    Reflect::set(
        &obj,
        &"bytes".into(),
        &Uint8Array::from(page.bytes.as_slice()).into(),
    )?;
    Ok(obj.into())
}

/// Extract a single page (1-based) as a standalone PDF.
#[wasm_bindgen]
pub fn extract_pdf_page(bytes: &[u8], page: u32) -> Result<Vec<u8>, JsValue> {
    pdf::extract_page(bytes, page).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Number of pages in a PDF.
#[wasm_bindgen]
pub fn pdf_page_count(bytes: &[u8]) -> Result<u32, JsValue> {
    pdf::page_count(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `{pageCount, fileSize, version}` for a PDF.
#[wasm_bindgen]
pub fn pdf_info(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let info = pdf::pdf_info(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&info)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Download name for a merged PDF.
#[wasm_bindgen]
pub fn merged_file_name() -> String {
    MERGED_FILE_NAME.to_string()
}
