//! Positioned page text: spans, lines, and blocks.

/// A contiguous run of text sharing one font and size, as rendered on a page.
#[derive(Debug, Clone)]
pub struct Span {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline)
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    /// Base font name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl Span {
    /// Create a new span.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            font_name: font_name.into(),
        }
    }
}

/// A visual line composed of one or more spans on the same baseline.
#[derive(Debug, Clone)]
pub struct Line {
    /// The spans in this line, sorted by X position
    pub spans: Vec<Span>,
    /// Y position (baseline)
    pub y: f32,
}

impl Line {
    /// Create a line from spans, ordering them left to right.
    pub fn from_spans(mut spans: Vec<Span>) -> Self {
        spans.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        let y = spans.first().map(|s| s.y).unwrap_or(0.0);
        Self { spans, y }
    }

    /// Joined text: the spans' trimmed texts joined with single spaces.
    /// Spans that are pure whitespace contribute nothing.
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self
            .spans
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect();
        parts.join(" ")
    }

    /// Effective font size: the maximum size among the line's spans.
    /// Mixed-size lines are classified by their largest span.
    pub fn max_font_size(&self) -> f32 {
        self.spans
            .iter()
            .map(|s| s.font_size)
            .fold(0.0_f32, f32::max)
    }

    /// Check if the line is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

/// A layout region composed of one or more lines (a paragraph, a table, ...).
#[derive(Debug, Clone)]
pub struct Block {
    /// The lines in this block, in visual order
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block from lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

/// One page's extracted text, organized as blocks → lines → spans.
#[derive(Debug, Clone)]
pub struct PageText {
    /// 0-indexed page number
    pub index: usize,
    /// Layout blocks in visual order (top to bottom)
    pub blocks: Vec<Block>,
}

impl PageText {
    /// Create a page from blocks.
    pub fn new(index: usize, blocks: Vec<Block>) -> Self {
        Self { index, blocks }
    }

    /// An empty page.
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            blocks: Vec::new(),
        }
    }

    /// Iterate all lines on the page in visual order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.blocks.iter().flat_map(|b| b.lines.iter())
    }

    /// Total number of spans on the page.
    pub fn span_count(&self) -> usize {
        self.lines().map(|l| l.spans.len()).sum()
    }
}

/// Y tolerance for grouping spans into a line, as a fraction of font size.
const LINE_Y_TOLERANCE_FACTOR: f32 = 0.3;

/// A block break is declared when the gap between consecutive lines exceeds
/// this multiple of the page's average line spacing.
const BLOCK_GAP_FACTOR: f32 = 1.5;

/// Font-size jump between lines that forces a block break.
const BLOCK_SIZE_JUMP: f32 = 1.0;

/// Group spans into visual lines by Y proximity.
///
/// Spans are sorted top to bottom (PDF Y is bottom-up), then left to right;
/// a span joins the current line while its baseline is within a tolerance
/// proportional to its font size.
pub fn group_spans_into_lines(mut spans: Vec<Span>) -> Vec<Line> {
    if spans.is_empty() {
        return vec![];
    }

    spans.sort_by(|a, b| {
        let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal);
        if y_cmp == std::cmp::Ordering::Equal {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            y_cmp
        }
    });

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let tolerance = span.font_size * LINE_Y_TOLERANCE_FACTOR;
        match current_y {
            Some(y) if (span.y - y).abs() <= tolerance => current.push(span),
            _ => {
                if !current.is_empty() {
                    lines.push(Line::from_spans(std::mem::take(&mut current)));
                }
                current_y = Some(span.y);
                current.push(span);
            }
        }
    }

    if !current.is_empty() {
        lines.push(Line::from_spans(current));
    }

    lines
}

/// Group lines into layout blocks based on vertical spacing.
///
/// A new block starts when the gap to the previous line is noticeably larger
/// than the page average, or when the effective font size jumps.
pub fn group_lines_into_blocks(lines: Vec<Line>) -> Vec<Block> {
    if lines.is_empty() {
        return vec![];
    }

    let avg_spacing = average_line_spacing(&lines);

    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Vec<Line> = Vec::new();

    for line in lines {
        if let Some(prev) = current.last() {
            let gap = (prev.y - line.y).abs();
            let size_jump = (prev.max_font_size() - line.max_font_size()).abs();

            if gap > avg_spacing * BLOCK_GAP_FACTOR || size_jump > BLOCK_SIZE_JUMP {
                blocks.push(Block::new(std::mem::take(&mut current)));
            }
        }
        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(Block::new(current));
    }

    blocks
}

fn average_line_spacing(lines: &[Line]) -> f32 {
    if lines.len() < 2 {
        return 12.0;
    }

    let spacings: Vec<f32> = lines
        .windows(2)
        .map(|w| (w[0].y - w[1].y).abs())
        .filter(|s| *s > 0.1)
        .collect();

    if spacings.is_empty() {
        return 12.0;
    }

    spacings.iter().sum::<f32>() / spacings.len() as f32
}
