//! Break a PDF into single pages.

use lopdf::Document;
use serde::Serialize;

use super::{load, save, PdfError};

/// One page of a split document, as a standalone PDF.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPage {
    /// 1-based page number in the source document
    pub page_number: u32,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl SplitPage {
    /// Download name, `page-{n}.pdf`.
    pub fn file_name(&self) -> String {
        format!("page-{}.pdf", self.page_number)
    }
}

/// Split a PDF into one document per page, in page order.
pub fn split_document(bytes: &[u8]) -> Result<Vec<SplitPage>, PdfError> {
    let doc = load(bytes)?;
    let page_count = doc.get_pages().len() as u32;

    let pages = (1..=page_count)
        .map(|page_number| {
            keep_single_page(&doc, page_number, page_count).map(|bytes| SplitPage {
                page_number,
                bytes,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Split document into {} pages", pages.len());
    Ok(pages)
}

/// Extract one page (1-based) as a standalone PDF.
pub fn extract_page(bytes: &[u8], page: u32) -> Result<Vec<u8>, PdfError> {
    let doc = load(bytes)?;
    let page_count = doc.get_pages().len() as u32;
    if page == 0 || page > page_count {
        return Err(PdfError::PageOutOfRange { page, page_count });
    }
    keep_single_page(&doc, page, page_count)
}

/// Copy `doc`, delete every page but `keep`, and drop what is left
/// unreferenced.
fn keep_single_page(doc: &Document, keep: u32, page_count: u32) -> Result<Vec<u8>, PdfError> {
    let mut single = doc.clone();
    let others: Vec<u32> = (1..=page_count).filter(|&p| p != keep).collect();
    single.delete_pages(&others);
    single.prune_objects();
    save(single)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{page_count, test_pdf};

    #[test]
    fn test_split_every_page() {
        let pdf = test_pdf::build(&[101, 102, 103], false);
        let pages = split_document(&pdf).unwrap();

        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.page_number, i as u32 + 1);
            assert_eq!(page_count(&page.bytes).unwrap(), 1);
            assert_eq!(test_pdf::page_widths(&page.bytes), vec![101 + i as i64]);
        }
    }

    #[test]
    fn test_split_file_names() {
        let pdf = test_pdf::build(&[1, 2], false);
        let names: Vec<_> = split_document(&pdf)
            .unwrap()
            .iter()
            .map(SplitPage::file_name)
            .collect();
        assert_eq!(names, vec!["page-1.pdf", "page-2.pdf"]);
    }

    #[test]
    fn test_split_keeps_inherited_media_box() {
        let pdf = test_pdf::build(&[0, 0], true);
        let pages = split_document(&pdf).unwrap();
        assert_eq!(test_pdf::page_widths(&pages[1].bytes), vec![300]);
    }

    #[test]
    fn test_extract_page() {
        let pdf = test_pdf::build(&[10, 20, 30], false);
        let page = extract_page(&pdf, 2).unwrap();
        assert_eq!(test_pdf::page_widths(&page), vec![20]);
    }

    #[test]
    fn test_extract_page_out_of_range() {
        let pdf = test_pdf::build(&[10, 20], false);
        assert!(matches!(
            extract_page(&pdf, 0),
            Err(PdfError::PageOutOfRange {
                page: 0,
                page_count: 2
            })
        ));
        assert!(matches!(
            extract_page(&pdf, 3),
            Err(PdfError::PageOutOfRange {
                page: 3,
                page_count: 2
            })
        ));
    }

    #[test]
    fn test_split_rejects_non_pdf() {
        assert!(matches!(split_document(b"GIF89a"), Err(PdfError::NotPdf)));
    }
}
