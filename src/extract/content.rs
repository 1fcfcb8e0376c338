//! Content-stream walking: turns a page's drawing operations into text spans.

use std::collections::{BTreeMap, HashMap};

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};

use super::page::Span;

/// TJ adjustments beyond this many 1/1000 text-space units are treated as
/// word gaps. Varies by font, but holds for most body text.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Extract positioned text spans from one page's content stream.
pub(crate) fn extract_page_spans(doc: &LopdfDocument, page_id: ObjectId) -> Result<Vec<Span>> {
    let fonts = doc
        .get_page_fonts(page_id)
        .map_err(|e| Error::PdfParse(e.to_string()))?;

    // Resource name → base font name, for span labeling
    let mut base_names: HashMap<Vec<u8>, String> = HashMap::new();
    for (name, font) in &fonts {
        let base = font
            .get(b"BaseFont")
            .ok()
            .and_then(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string())
            .unwrap_or_else(|| String::from_utf8_lossy(name).to_string());
        base_names.insert(name.clone(), base);
    }

    let content = doc
        .get_page_content(page_id)
        .map_err(|e| Error::PdfParse(e.to_string()))?;
    let content =
        lopdf::content::Content::decode(&content).map_err(|e| Error::PdfParse(e.to_string()))?;

    let mut walker = ContentWalker::new(doc, &fonts, &base_names);
    for op in &content.operations {
        walker.step(op);
    }
    Ok(walker.finish())
}

/// Walks content-stream operations, tracking font state and the text matrix.
struct ContentWalker<'a> {
    doc: &'a LopdfDocument,
    fonts: &'a BTreeMap<Vec<u8>, &'a lopdf::Dictionary>,
    base_names: &'a HashMap<Vec<u8>, String>,
    spans: Vec<Span>,
    font_resource: Vec<u8>,
    font_name: String,
    font_size: f32,
    matrix: TextMatrix,
    in_text: bool,
}

impl<'a> ContentWalker<'a> {
    fn new(
        doc: &'a LopdfDocument,
        fonts: &'a BTreeMap<Vec<u8>, &'a lopdf::Dictionary>,
        base_names: &'a HashMap<Vec<u8>, String>,
    ) -> Self {
        Self {
            doc,
            fonts,
            base_names,
            spans: Vec::new(),
            font_resource: Vec::new(),
            font_name: String::new(),
            font_size: 12.0,
            matrix: TextMatrix::default(),
            in_text: false,
        }
    }

    fn step(&mut self, op: &lopdf::content::Operation) {
        match op.operator.as_str() {
            "BT" => {
                self.in_text = true;
                self.matrix = TextMatrix::default();
            }
            "ET" => self.in_text = false,
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Object::Name(name) = &op.operands[0] {
                        self.font_resource = name.clone();
                        self.font_name = self
                            .base_names
                            .get(name.as_slice())
                            .cloned()
                            .unwrap_or_else(|| String::from_utf8_lossy(name).to_string());
                    }
                    self.font_size = number(&op.operands[1]).unwrap_or(12.0);
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    let tx = number(&op.operands[0]).unwrap_or(0.0);
                    let ty = number(&op.operands[1]).unwrap_or(0.0);
                    self.matrix.translate(tx, ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    self.matrix.set(
                        number(&op.operands[0]).unwrap_or(1.0),
                        number(&op.operands[1]).unwrap_or(0.0),
                        number(&op.operands[2]).unwrap_or(0.0),
                        number(&op.operands[3]).unwrap_or(1.0),
                        number(&op.operands[4]).unwrap_or(0.0),
                        number(&op.operands[5]).unwrap_or(0.0),
                    );
                }
            }
            "T*" => self.matrix.next_line(),
            "Tj" => {
                if self.in_text {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        let text = self.decode(bytes);
                        self.emit(text);
                    }
                }
            }
            "TJ" => {
                if self.in_text {
                    if let Some(Object::Array(items)) = op.operands.first() {
                        let text = self.decode_tj(items);
                        self.emit(text);
                    }
                }
            }
            "'" | "\"" => {
                self.matrix.next_line();
                if self.in_text {
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let text = self.decode(bytes);
                        self.emit(text);
                    }
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Vec<Span> {
        self.spans
    }

    fn emit(&mut self, text: String) {
        if text.trim().is_empty() {
            return;
        }
        let (x, y) = self.matrix.position();
        let effective_size = self.font_size * self.matrix.scale();
        self.spans.push(Span::new(
            text,
            x,
            y,
            effective_size,
            self.font_name.clone(),
        ));
    }

    /// Decode string bytes through the current font's encoding, falling back
    /// to byte-level guessing when the font has none.
    fn decode(&self, bytes: &[u8]) -> String {
        let encoding = self
            .fonts
            .get(&self.font_resource)
            .and_then(|f| f.get_font_encoding(self.doc).ok());

        match encoding {
            Some(enc) => LopdfDocument::decode_text(&enc, bytes).unwrap_or_default(),
            None => decode_text_fallback(bytes),
        }
    }

    /// Decode a TJ array: strings interleaved with kerning adjustments.
    /// Large negative adjustments are rendered as word spaces, except
    /// between characters of scripts that do not use them.
    fn decode_tj(&self, items: &[Object]) -> String {
        let mut combined = String::new();

        for item in items {
            match item {
                Object::String(bytes, _) => combined.push_str(&self.decode(bytes)),
                Object::Integer(n) => {
                    maybe_push_space(&mut combined, -(*n as f32));
                }
                Object::Real(n) => {
                    maybe_push_space(&mut combined, -n);
                }
                _ => {}
            }
        }

        combined
    }
}

fn maybe_push_space(combined: &mut String, adjustment: f32) {
    if adjustment <= TJ_SPACE_THRESHOLD
        || combined.is_empty()
        || combined.ends_with(' ')
        || combined.ends_with('\u{00A0}')
    {
        return;
    }
    if let Some(c) = combined.chars().last() {
        if !is_spaceless_script_char(c) {
            combined.push(' ');
        }
    }
}

/// Text matrix for tracking position in a content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    #[allow(clippy::many_single_char_names)]
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default line leading; a TL operator would refine this
        self.f -= 12.0 * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Helper to extract a number from a PDF object.
fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Check if a character is from a script that does not use word spaces
/// (Chinese and Japanese; Korean uses spaces like English).
fn is_spaceless_script_char(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs and Extension A
    (0x4E00..=0x9FFF).contains(&code)
        || (0x3400..=0x4DBF).contains(&code)
        // Hiragana, Katakana
        || (0x3040..=0x309F).contains(&code)
        || (0x30A0..=0x30FF).contains(&code)
        // CJK Symbols and Punctuation
        || (0x3000..=0x303F).contains(&code)
}

/// Simple text decoding fallback when no font encoding is available.
fn decode_text_fallback(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
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
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}
