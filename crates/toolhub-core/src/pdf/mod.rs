//! PDF merge and split.
//!
//! Parsing, object handling and serialization are delegated to `lopdf`;
//! this module only moves pages between documents.
//!
//! - `merge_documents`: concatenate the pages of two or more PDFs
//! - `split_document`: one single-page PDF per page
//! - `extract_page`: a single page by 1-based number

mod merge;
mod split;

use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use thiserror::Error;

pub use merge::merge_documents;
pub use split::{extract_page, split_document, SplitPage};

/// File name offered for a merged download.
pub const MERGED_FILE_NAME: &str = "merged-document.pdf";

/// Every PDF file starts with this header.
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("File is not a PDF")]
    NotPdf,

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("At least 2 PDF files are required for merging, got {0}")]
    NotEnoughDocuments(usize),

    #[error("Page {page} does not exist (document has {page_count} pages)")]
    PageOutOfRange { page: u32, page_count: u32 },

    #[error("PDF operation failed: {0}")]
    Operation(String),
}

/// Summary of a PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfInfo {
    pub page_count: u32,
    pub file_size: usize,
    pub version: String,
}

/// Parse PDF bytes and return page count
pub fn page_count(bytes: &[u8]) -> Result<u32, PdfError> {
    Ok(load(bytes)?.get_pages().len() as u32)
}

/// Parse PDF bytes and summarize them.
pub fn pdf_info(bytes: &[u8]) -> Result<PdfInfo, PdfError> {
    let doc = load(bytes)?;
    Ok(PdfInfo {
        page_count: doc.get_pages().len() as u32,
        file_size: bytes.len(),
        version: doc.version.clone(),
    })
}

/// Check the header and parse.
pub(crate) fn load(bytes: &[u8]) -> Result<Document, PdfError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(PdfError::NotPdf);
    }
    Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))
}

/// Serialize a document, compressing streams first.
pub(crate) fn save(mut doc: Document) -> Result<Vec<u8>, PdfError> {
    doc.compress();
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PdfError::Operation(format!("Failed to save PDF: {}", e)))?;
    Ok(buffer)
}

/// Object id of the root page tree node.
pub(crate) fn pages_root(doc: &Document) -> Result<ObjectId, PdfError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| PdfError::Operation("No Root in trailer".into()))?;

    doc.get_dictionary(catalog_id)
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|_| PdfError::Operation("No Pages in catalog".into()))
}

#[cfg(test)]
pub(crate) mod test_pdf {
    use lopdf::{Dictionary, Document, Object, Stream};

    /// Build a PDF whose pages have MediaBox widths `widths`, so page order
    /// can be checked after merging or splitting.
    ///
    /// With `inherit_media_box` the pages carry no MediaBox of their own and
    /// inherit a 300x300 box from the page tree root instead.
    pub fn build(widths: &[i64], inherit_media_box: bool) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut page_ids = Vec::new();
        for (i, width) in widths.iter().enumerate() {
            let content = format!("BT /F1 12 Tf 50 700 Td (Page {}) Tj ET", i + 1);
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

            let mut page = Dictionary::new();
            page.set("Type", Object::Name(b"Page".to_vec()));
            page.set("Parent", Object::Reference(pages_id));
            page.set("Contents", Object::Reference(content_id));
            if !inherit_media_box {
                page.set("MediaBox", media_box(*width));
            }
            page_ids.push(doc.add_object(page));
        }

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(page_ids.len() as i64));
        pages.set(
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        );
        if inherit_media_box {
            pages.set("MediaBox", media_box(300));
        }
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn media_box(width: i64) -> Object {
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(792),
        ])
    }

    /// MediaBox width of every page, in page order, following inheritance
    /// up the page tree.
    pub fn page_widths(bytes: &[u8]) -> Vec<i64> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|&id| {
                let mut node = doc.get_dictionary(id).unwrap();
                loop {
                    if let Ok(media_box) = node.get(b"MediaBox") {
                        break media_box.as_array().unwrap()[2].as_i64().unwrap();
                    }
                    let parent = node.get(b"Parent").and_then(Object::as_reference).unwrap();
                    node = doc.get_dictionary(parent).unwrap();
                }
            })
            .collect()
    }
}
