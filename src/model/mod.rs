//! Output model types for inferred document outlines.
//!
//! These types form the single artifact the engine produces per document.
//! They are serde-serializable and carry no processing state.

mod outline;

pub use outline::{DocumentOutline, HeadingEntry, HeadingLevel};
