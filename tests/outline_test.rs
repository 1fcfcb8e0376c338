//! Integration tests for the outline engine, driven by synthetic page text.

use pdfoutline::engine::{FontHistogram, HeuristicConfig, LevelMap, OutlineEngine};
use pdfoutline::extract::{Block, Line, PageText, Span};
use pdfoutline::model::HeadingLevel;
use pdfoutline::render::{to_json, JsonFormat};

fn span(text: &str, x: f32, y: f32, size: f32) -> Span {
    Span::new(text, x, y, size, "Helvetica")
}

fn line(text: &str, y: f32, size: f32) -> Line {
    Line::from_spans(vec![span(text, 10.0, y, size)])
}

/// A block of long prose lines at the given size.
fn body_block(count: usize, size: f32, top_y: f32) -> Block {
    let lines = (0..count)
        .map(|i| {
            line(
                &format!("Paragraph prose line number {} with plenty of characters", i),
                top_y - i as f32 * 14.0,
                size,
            )
        })
        .collect();
    Block::new(lines)
}

#[test]
fn zero_span_document_yields_empty_outline_and_fallback_title() {
    let engine = OutlineEngine::new();

    let result = engine.infer(&[PageText::empty(0)], None, Some("annual-report"));
    assert!(result.outline.is_empty());
    assert_eq!(result.title, "annual-report");

    // Metadata wins over the filename when present
    let result = engine.infer(&[PageText::empty(0)], Some("Annual Report"), Some("stem"));
    assert_eq!(result.title, "Annual Report");

    // Never an empty title, even with no fallbacks at all
    let result = engine.infer(&[], None, None);
    assert!(!result.title.is_empty());
}

#[test]
fn level_map_is_bounded_and_size_ordered() {
    let mut hist = FontHistogram::new();
    for _ in 0..50 {
        hist.observe(10.5);
    }
    for (size, count) in [(12.0, 9), (14.5, 7), (16.0, 2), (22.0, 1), (11.0, 4)] {
        for _ in 0..count {
            hist.observe(size);
        }
    }

    let map = LevelMap::from_histogram(&hist, &HeuristicConfig::default());
    assert!(map.len() <= 3);

    let sizes: Vec<f32> = HeadingLevel::ALL
        .iter()
        .filter_map(|&l| map.size_for(l))
        .collect();
    for pair in sizes.windows(2) {
        assert!(pair[0] >= pair[1], "levels must be size-ordered: {:?}", sizes);
    }
}

#[test]
fn duplicate_headings_and_title_echoes_are_dropped() {
    let engine = OutlineEngine::new();

    let page0 = PageText::new(
        0,
        vec![Block::new(vec![line("Network Protocol Reference Guide", 500.0, 24.0)])],
    );
    // The running header repeats the title and a section heading on both pages
    let page1 = PageText::new(
        1,
        vec![
            Block::new(vec![line("Network Protocol Reference Guide", 520.0, 18.0)]),
            Block::new(vec![line("Packet Framing", 480.0, 18.0)]),
            body_block(35, 11.0, 440.0),
        ],
    );
    let page2 = PageText::new(
        2,
        vec![
            Block::new(vec![line("NETWORK PROTOCOL REFERENCE GUIDE", 520.0, 18.0)]),
            Block::new(vec![line("Packet  Framing", 480.0, 18.0)]),
            Block::new(vec![line("Checksum Rules", 440.0, 18.0)]),
            body_block(35, 11.0, 400.0),
        ],
    );

    let result = engine.infer(&[page0, page1, page2], None, None);

    assert_eq!(result.title, "Network Protocol Reference Guide");
    let texts: Vec<&str> = result.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Packet Framing", "Checksum Rules"]);
    assert_eq!(result.outline[0].page, 1);
}

#[test]
fn table_blocks_feed_neither_histogram_nor_outline() {
    let engine = OutlineEngine::new();

    let page0 = PageText::new(
        0,
        vec![Block::new(vec![line("Inventory Audit Summary Report", 500.0, 24.0)])],
    );

    // Six 3-character lines at the largest size on the page: a table block.
    // If it leaked into the histogram, 20.0 would outrank 18.0 for H1.
    let table = Block::new(vec![
        line("A-1", 500.0, 20.0),
        line("B-2", 490.0, 20.0),
        line("C-3", 480.0, 20.0),
        line("D-4", 470.0, 20.0),
        line("E-5", 460.0, 20.0),
        line("F-6", 450.0, 20.0),
    ]);
    let page1 = PageText::new(
        1,
        vec![
            table,
            Block::new(vec![line("Audit Findings", 420.0, 18.0)]),
            body_block(35, 11.0, 380.0),
        ],
    );

    let result = engine.infer(&[page0, page1], None, None);

    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].text, "Audit Findings");
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
    assert!(result.outline.iter().all(|e| !e.text.contains("A-1")));
}

#[test]
fn form_document_outline_is_suppressed_title_survives() {
    let engine = OutlineEngine::new();

    // Single page: title at 24.0, twenty heading-size labels (15 of them
    // bare "1.".."15."), and popular body text anchoring the threshold.
    let mut blocks = vec![Block::new(vec![line(
        "Vehicle Registration Renewal Form",
        700.0,
        24.0,
    )])];
    for i in 1..=15 {
        blocks.push(Block::new(vec![line(
            &format!("{}.", i),
            680.0 - i as f32 * 20.0,
            18.0,
        )]));
    }
    for (i, label) in ["Owner Name", "Plate Number", "Vehicle Make", "Issue Date", "Fee Paid"]
        .iter()
        .enumerate()
    {
        blocks.push(Block::new(vec![line(label, 360.0 - i as f32 * 20.0, 18.0)]));
    }
    blocks.push(body_block(35, 11.0, 240.0));

    let result = engine.infer(&[PageText::new(0, blocks)], None, None);

    assert_eq!(result.title, "Vehicle Registration Renewal Form");
    assert!(result.outline.is_empty());
}

#[test]
fn two_page_end_to_end_example() {
    let engine = OutlineEngine::new();

    // Page 0: one line at 24.0. Page 1: one heading at 18.0 and body
    // prose at 11.0 popular enough to clear the cutoff.
    let page0 = PageText::new(
        0,
        vec![Block::new(vec![line("Project Report", 500.0, 24.0)])],
    );

    let mut body_lines = Vec::new();
    for i in 0..5 {
        let y = 440.0 - i as f32 * 14.0;
        let spans = (0..7)
            .map(|j| span(&format!("word{}", j), 10.0 + j as f32 * 60.0, y, 11.0))
            .collect();
        body_lines.push(Line::from_spans(spans));
    }
    let page1 = PageText::new(
        1,
        vec![
            Block::new(vec![line("Introduction", 480.0, 18.0)]),
            Block::new(body_lines),
        ],
    );

    // "Project Report" is below the extractor's word minimum, so the
    // title comes from document metadata
    let result = engine.infer(&[page0, page1], Some("Project Report"), Some("report"));

    assert_eq!(result.title, "Project Report");
    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
    assert_eq!(result.outline[0].text, "Introduction");
    assert_eq!(result.outline[0].page, 1);
}

#[test]
fn repeated_runs_produce_identical_json() {
    let engine = OutlineEngine::new();

    let pages = vec![
        PageText::new(
            0,
            vec![Block::new(vec![line("Stability And Determinism Notes", 500.0, 24.0)])],
        ),
        PageText::new(
            1,
            vec![
                Block::new(vec![line("Reproducible Output", 480.0, 18.0)]),
                Block::new(vec![line("Ordering Guarantees", 440.0, 14.0)]),
                body_block(35, 11.0, 400.0),
            ],
        ),
    ];

    let first = engine.infer(&pages, None, Some("notes"));
    let second = engine.infer(&pages, None, Some("notes"));

    let json_a = to_json(&first, JsonFormat::Pretty).unwrap();
    let json_b = to_json(&second, JsonFormat::Pretty).unwrap();
    assert_eq!(json_a.as_bytes(), json_b.as_bytes());
}

#[test]
fn mixed_size_line_classified_by_largest_span() {
    let engine = OutlineEngine::new();

    let page0 = PageText::new(
        0,
        vec![Block::new(vec![line("Style Guide For Technical Writers", 500.0, 24.0)])],
    );
    // "3" sits in a smaller span than the rest of the heading line
    let heading = Line::from_spans(vec![
        span("3", 10.0, 480.0, 12.0),
        span("Citations and references", 30.0, 480.0, 18.0),
    ]);
    let page1 = PageText::new(
        1,
        vec![Block::new(vec![heading]), body_block(35, 11.0, 440.0)],
    );

    let result = engine.infer(&[page0, page1], None, None);

    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].text, "3 Citations and references");
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
}
