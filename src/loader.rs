//! Plain text loading from PDF using lopdf
//!
//! Pages are extracted one at a time in page order and concatenated. Layout
//! is not reconstructed; the analysis only needs the character content.

use crate::PdfError;
use lopdf::Document;
use std::path::Path;

/// Text of a whole document plus page statistics
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    /// Concatenated text of every page, in page order
    pub text: String,
    /// Number of pages in the document
    pub page_count: u32,
    /// Pages whose content stream shows text (Tj/TJ operators)
    pub pages_with_text: u32,
}

impl ExtractedDocument {
    /// True when no page draws any text, i.e. the PDF is likely scanned
    pub fn looks_scanned(&self) -> bool {
        self.page_count > 0 && self.pages_with_text == 0
    }
}

/// Load a PDF file and return its text
pub fn load_pdf<P: AsRef<Path>>(path: P) -> Result<String, PdfError> {
    load_document(path).map(|doc| doc.text)
}

/// Load a PDF from a memory buffer and return its text
pub fn load_pdf_mem(buffer: &[u8]) -> Result<String, PdfError> {
    load_document_mem(buffer).map(|doc| doc.text)
}

/// Load a PDF file with page statistics
///
/// The file is read up front so that a missing or unreadable path surfaces
/// as [`PdfError::Io`] rather than a parse error.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ExtractedDocument, PdfError> {
    let path = path.as_ref();
    log::debug!("Loading PDF {}", path.display());
    let buffer = std::fs::read(path)?;
    load_document_mem(&buffer)
}

/// Load a PDF from a memory buffer with page statistics
pub fn load_document_mem(buffer: &[u8]) -> Result<ExtractedDocument, PdfError> {
    let mut doc = Document::load_mem(buffer)?;

    if doc.is_encrypted() {
        // Owner-password-only documents open with the empty user password
        doc.decrypt("").map_err(|_| PdfError::Encrypted)?;
    }

    let extracted = extract_from_doc(&doc)?;

    if extracted.looks_scanned() {
        log::warn!(
            "No page of the {}-page document draws text; it is probably scanned and OCR is not supported",
            extracted.page_count
        );
    }
    log::debug!(
        "Extracted {} bytes of text from {} pages ({} with text)",
        extracted.text.len(),
        extracted.page_count,
        extracted.pages_with_text
    );

    Ok(extracted)
}

/// Extract every page in order from a loaded document
fn extract_from_doc(doc: &Document) -> Result<ExtractedDocument, PdfError> {
    // get_pages is a BTreeMap keyed by page number, so iteration is in page order
    let pages = doc.get_pages();
    let mut extracted = ExtractedDocument {
        page_count: pages.len() as u32,
        ..Default::default()
    };

    for (&page_num, &page_id) in pages.iter() {
        let content = doc.get_page_content(page_id).unwrap_or_default();
        if count_text_operators(&content) > 0 {
            extracted.pages_with_text += 1;
        }

        let page_text = doc
            .extract_text(&[page_num])
            .map_err(|e| PdfError::Parse(format!("page {}: {}", page_num, e)))?;
        extracted.text.push_str(&page_text);
        // Words must not fuse across a page break
        if !extracted.text.is_empty() && !extracted.text.ends_with('\n') {
            extracted.text.push('\n');
        }
    }

    Ok(extracted)
}

/// Count text-showing operators (Tj, TJ) in a decoded content stream
fn count_text_operators(content: &[u8]) -> u32 {
    content
        .windows(2)
        .enumerate()
        .filter(|(i, pair)| {
            pair[0] == b'T'
                && (pair[1] == b'j' || pair[1] == b'J')
                && content
                    .get(i + 2)
                    .map_or(true, |next| next.is_ascii_whitespace())
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text_operators() {
        let content = b"BT /F1 12 Tf 100 700 Td (Hello World) Tj ET";
        assert_eq!(count_text_operators(content), 1);

        let content = b"BT /F1 12 Tf 100 700 Td [(H) 10 (ello)] TJ ET";
        assert_eq!(count_text_operators(content), 1);

        // Image placement only
        let content = b"q 100 0 0 100 50 700 cm /Img1 Do Q";
        assert_eq!(count_text_operators(content), 0);

        // Operator at the very end of the stream
        assert_eq!(count_text_operators(b"(a) Tj\n(b) Tj"), 2);
    }

    #[test]
    fn test_tj_inside_name_is_not_an_operator() {
        assert_eq!(count_text_operators(b"/TjFont 12 Tf"), 0);
    }

    #[test]
    fn test_looks_scanned() {
        let doc = ExtractedDocument {
            text: String::new(),
            page_count: 3,
            pages_with_text: 0,
        };
        assert!(doc.looks_scanned());

        let empty = ExtractedDocument::default();
        assert!(!empty.looks_scanned());
    }

    #[test]
    fn test_load_pdf_mem_rejects_garbage() {
        let result = load_pdf_mem(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
