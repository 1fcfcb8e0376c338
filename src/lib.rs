//! # pdfoutline
//!
//! Infers a hierarchical document outline (a title plus H1/H2/H3 headings)
//! from a PDF's rendered text, using only typographic signals: font sizes,
//! span grouping, and position. No embedded bookmarks are consulted, so it
//! works on arbitrary, possibly multilingual PDFs from unknown authoring
//! tools.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{outline_file, render, JsonFormat};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let outline = outline_file("document.pdf")?;
//!     println!("title: {}", outline.title);
//!
//!     let json = render::to_json(&outline, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - **Histogram pass**: font sizes of every in-scope span are tallied
//!   (rounded to one decimal place); the most popular size above a cutoff
//!   is taken as body text.
//! - **Level map**: the top three sizes above the body threshold become
//!   H1, H2, H3.
//! - **Classification pass**: each line is NFKC-normalized, classified by
//!   its largest span's size, and deduplicated against the title and
//!   previously emitted headings.
//! - **Noise filters**: blocks of many short lines (tables) are excluded;
//!   dense single-page label outlines (forms) are discarded wholesale.
//!
//! Every heuristic cutoff is exposed on [`HeuristicConfig`].

pub mod detect;
pub mod engine;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use engine::{HeuristicConfig, OutlineEngine};
pub use error::{Error, Result};
pub use extract::{Block, Line, PageText, PdfText, Span};
pub use model::{DocumentOutline, HeadingEntry, HeadingLevel};
pub use render::{to_json, JsonFormat};

use std::path::Path;

/// Infer the outline of a PDF file with default heuristics.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::outline_file;
///
/// let outline = outline_file("manual.pdf").unwrap();
/// for entry in &outline.outline {
///     println!("{} {} (p. {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    outline_file_with_config(path, HeuristicConfig::default())
}

/// Infer the outline of a PDF file with custom heuristics.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{outline_file_with_config, HeuristicConfig};
///
/// let config = HeuristicConfig::new().with_body_popularity_cutoff(10);
/// let outline = outline_file_with_config("manual.pdf", config).unwrap();
/// ```
pub fn outline_file_with_config<P: AsRef<Path>>(
    path: P,
    config: HeuristicConfig,
) -> Result<DocumentOutline> {
    let path = path.as_ref();
    let doc = PdfText::open(path)?;
    let pages = doc.extract_pages();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());

    let engine = OutlineEngine::with_config(config);
    Ok(engine.infer(&pages, doc.metadata_title().as_deref(), stem.as_deref()))
}

/// Infer the outline of a PDF held in memory.
///
/// With no filename available, the title falls back from typographic
/// extraction to document metadata only.
pub fn outline_bytes(data: &[u8]) -> Result<DocumentOutline> {
    outline_bytes_with_config(data, HeuristicConfig::default())
}

/// Infer the outline of an in-memory PDF with custom heuristics.
pub fn outline_bytes_with_config(
    data: &[u8],
    config: HeuristicConfig,
) -> Result<DocumentOutline> {
    let doc = PdfText::from_bytes(data)?;
    let pages = doc.extract_pages();

    let engine = OutlineEngine::with_config(config);
    Ok(engine.infer(&pages, doc.metadata_title().as_deref(), None))
}
