//! pdfoutline CLI - batch PDF outline inference
//!
//! Reads every `*.pdf` in an input directory and writes one `<stem>.json`
//! outline per document to an output directory. Failures on individual
//! documents are reported and skipped; the batch only fails as a whole
//! when the input directory is missing or nothing could be processed.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::{outline_file_with_config, render, HeuristicConfig, JsonFormat};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer document outlines (title + H1-H3 headings) from PDF typography", long_about = None)]
struct Cli {
    /// Input directory containing PDF files
    #[arg(value_name = "INPUT_DIR", default_value = "input")]
    input: PathBuf,

    /// Output directory for JSON outlines (created if absent)
    #[arg(value_name = "OUTPUT_DIR", default_value = "output")]
    output: PathBuf,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Body-text popularity cutoff (occurrences)
    #[arg(long, value_name = "COUNT")]
    body_cutoff: Option<usize>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.is_dir() {
        return Err(format!("input directory not found: {}", cli.input.display()).into());
    }

    let pdfs = collect_pdfs(&cli.input)?;
    log::debug!("found {} pdf files in {}", pdfs.len(), cli.input.display());
    if pdfs.is_empty() {
        return Err(format!("no PDF files in {}", cli.input.display()).into());
    }

    fs::create_dir_all(&cli.output)?;

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let mut config = HeuristicConfig::default();
    if let Some(cutoff) = cli.body_cutoff {
        config = config.with_body_popularity_cutoff(cutoff);
    }

    let pb = ProgressBar::new(pdfs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut processed = 0usize;
    let mut failed = 0usize;

    for pdf in &pdfs {
        let name = pdf
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match process_one(pdf, &cli.output, &config, format) {
            Ok(out_path) => {
                processed += 1;
                pb.println(format!(
                    "{} {} {} {}",
                    "Processed".green(),
                    name,
                    "→".dimmed(),
                    out_path.display()
                ));
            }
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {} | {}", "Failed".red().bold(), name, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "\n{} {} processed, {} failed",
        "Done!".green().bold(),
        processed,
        failed
    );

    if processed == 0 {
        return Err("no PDF files processed".into());
    }

    Ok(())
}

/// Collect `*.pdf` files (case-insensitive extension) in sorted order, so
/// repeated runs report and write in a stable sequence.
fn collect_pdfs(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut pdfs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
        })
        .collect();
    pdfs.sort();
    Ok(pdfs)
}

/// Process one document: infer its outline and write `<stem>.json`.
fn process_one(
    pdf: &Path,
    output_dir: &Path,
    config: &HeuristicConfig,
    format: JsonFormat,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let outline = outline_file_with_config(pdf, config.clone())?;
    let json = render::to_json(&outline, format)?;

    let stem = pdf
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "outline".to_string());
    let out_path = output_dir.join(format!("{}.json", stem));
    fs::write(&out_path, json)?;

    Ok(out_path)
}
