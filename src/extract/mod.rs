//! Page text extraction.
//!
//! This module is the rendering-side collaborator of the outline engine: it
//! turns PDF page bytes into positioned text organized as blocks → lines →
//! spans, plus document-level metadata. It carries no heading logic: the
//! engine consumes `PageText` and never touches the PDF itself.

mod content;
mod document;
mod page;

pub use document::PdfText;
pub use page::{group_lines_into_blocks, group_spans_into_lines, Block, Line, PageText, Span};
