//! Document handle: opens a PDF and exposes page text plus metadata.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect;
use crate::error::{Error, Result};

use super::content::extract_page_spans;
use super::page::{group_lines_into_blocks, group_spans_into_lines, PageText};

/// A PDF document opened for text extraction.
///
/// Wraps the underlying PDF library and exposes exactly what the outline
/// engine consumes: a page count, an optional metadata title, and per-page
/// text organized as blocks → lines → spans.
pub struct PdfText {
    doc: LopdfDocument,
}

impl PdfText {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        detect::check_pdf_file(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Ok(Self { doc })
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect::check_pdf_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Ok(Self { doc })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The document's metadata title, if the Info dictionary carries one.
    pub fn metadata_title(&self) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info_ref = info.as_reference().ok()?;
        let info_dict = self.doc.get_dictionary(info_ref).ok()?;
        pdf_string_value(info_dict, b"Title").filter(|t| !t.trim().is_empty())
    }

    /// Extract one page's text (0-indexed).
    pub fn extract_page(&self, index: usize) -> Result<PageText> {
        let pages = self.doc.get_pages();
        let page_id = pages
            .get(&((index + 1) as u32))
            .copied()
            .ok_or(Error::PageOutOfRange(index, pages.len()))?;

        let spans = extract_page_spans(&self.doc, page_id)?;
        let lines = group_spans_into_lines(spans);
        let blocks = group_lines_into_blocks(lines);
        Ok(PageText::new(index, blocks))
    }

    /// Extract every page's text in page order.
    ///
    /// A page whose content stream fails to decode yields an empty page
    /// rather than aborting the document.
    pub fn extract_pages(&self) -> Vec<PageText> {
        let count = self.page_count();
        let mut pages = Vec::with_capacity(count);

        for index in 0..count {
            match self.extract_page(index) {
                Ok(page) => pages.push(page),
                Err(e) => {
                    log::warn!("failed to extract text from page {}: {}", index, e);
                    pages.push(PageText::empty(index));
                }
            }
        }

        pages
    }
}

/// Read a string value out of a PDF dictionary, decoding UTF-16BE (BOM)
/// or falling back to UTF-8/Latin-1.
fn pdf_string_value(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        lopdf::Object::String(bytes, _) => {
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks(2)
                    .filter_map(|c| {
                        if c.len() == 2 {
                            Some(u16::from_be_bytes([c[0], c[1]]))
                        } else {
                            None
                        }
                    })
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                String::from_utf8(bytes.clone())
                    .ok()
                    .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
            }
        }
        _ => None,
    }
}
