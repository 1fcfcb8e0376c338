//! PDF format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Verify that a file starts with a PDF header.
///
/// # Returns
/// * `Ok(())` if the file begins with `%PDF-`
/// * `Err(Error::UnknownFormat)` otherwise
pub fn check_pdf_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 8];
    reader.read_exact(&mut header)?;
    check_pdf_bytes(&header)
}

/// Verify that a byte slice starts with a PDF header.
pub fn check_pdf_bytes(data: &[u8]) -> Result<()> {
    if data.len() < PDF_MAGIC.len() || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check if bytes represent a PDF header without constructing an error.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    check_pdf_bytes(data).is_ok()
}
