//! Command-line interface for font-previewer.
//!
//! This module handles CLI argument parsing and runs the `preview`, `list`
//! and `probe` subcommands against a writer (stdout in the binary).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use font_previewer_config::{LogLevel, PreviewConfig, printable_ascii};
use font_previewer_fonts::GlyphCoverage;
use serde::Serialize;

use crate::browser::{EntryKind, list_folder};
use crate::preview_grid::PreviewGrid;
use crate::previewer::{PreviewError, Previewer};
use crate::text_view;

/// font-previewer - Browse font files and preview their glyph coverage
#[derive(Parser, Debug)]
#[command(name = "font-previewer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render the glyph grid of a font or zip file
    Preview {
        /// Font (.ttf/.otf) or zip archive to preview
        path: PathBuf,

        /// Point size of the glyph cells (1-500)
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Render glyphs bold
        #[arg(long)]
        bold: bool,

        /// Render glyphs italic
        #[arg(long)]
        italic: bool,

        /// Code points per row
        #[arg(long)]
        columns: Option<usize>,

        /// Only preview printable ASCII
        #[arg(long)]
        ascii_only: bool,

        /// Sample text to check against the font
        #[arg(long)]
        text: Option<String>,

        /// Decimal alt code to append to the sample text (repeatable)
        #[arg(long = "alt-code", value_name = "CODE", allow_hyphen_values = true)]
        alt_codes: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the fonts and zip archives in a folder
    List {
        /// Folder to list (defaults to the configured font folder)
        dir: Option<PathBuf>,
    },

    /// Report whether a font covers specific code points
    Probe {
        /// Font (.ttf/.otf) or zip archive
        path: PathBuf,

        /// Code points as decimal, U+XXXX or 0xXXXX
        #[arg(required = true, value_parser = parse_code_point)]
        code_points: Vec<u32>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::List { dir: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a `--log-level` value.
pub fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| format!("unknown log level '{value}'"))
}

/// Parse a code point written as decimal, `U+XXXX` or `0xXXXX`.
pub fn parse_code_point(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"));
    let parsed = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => trimmed.parse::<u32>(),
    };
    match parsed {
        Ok(code_point) if code_point <= 0x10_FFFF => Ok(code_point),
        Ok(_) => Err(format!("'{value}' is beyond U+10FFFF")),
        Err(_) => Err(format!("'{value}' is not a code point")),
    }
}

/// Load the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<PreviewConfig> {
    match path {
        Some(path) => PreviewConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(PreviewConfig::default()),
    }
}

/// JSON document written by `preview --format json`.
#[derive(Serialize)]
struct PreviewReport<'a> {
    family: &'a str,
    source: Option<&'a str>,
    grid: &'a PreviewGrid,
    reference_point_size: u32,
    sample_text: &'a str,
    missing_graphemes: Vec<String>,
}

fn surface(error: PreviewError) -> anyhow::Error {
    anyhow::anyhow!(error.user_message().replace('\n', ": "))
}

/// Run a subcommand, writing its output to `out`.
pub fn execute<W: Write>(
    command: Commands,
    config: &PreviewConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Preview {
            path,
            size,
            bold,
            italic,
            columns,
            ascii_only,
            text,
            alt_codes,
            format,
        } => {
            let mut config = config.clone();
            if let Some(columns) = columns {
                config.columns = columns;
            }
            let mut previewer = Previewer::from_config(&config).map_err(surface)?;
            if ascii_only {
                previewer = previewer.with_ranges(vec![printable_ascii()]);
            }

            // Style first: the font load then builds the grid exactly once.
            let state = previewer.state_mut();
            if let Some(size) = size {
                state
                    .set_size(size)
                    .map_err(|e| surface(PreviewError::from(e)))?;
            }
            if bold {
                state.set_bold(true);
            }
            if italic {
                state.set_italic(true);
            }

            previewer.open_path(&path).map_err(surface)?;

            if let Some(text) = text {
                previewer.sample_mut().push_str(&text);
            }
            for code in &alt_codes {
                previewer.insert_alt_code(code).map_err(surface)?;
            }

            let family = previewer.font_family().unwrap_or_default();
            match format {
                OutputFormat::Text => {
                    write!(out, "{}", text_view::render(previewer.grid(), family))?;
                    if !previewer.sample().is_empty() {
                        writeln!(out)?;
                        let sample = text_view::printable(previewer.sample().as_str());
                        writeln!(out, "Sample: {sample}")?;
                        let missing = previewer.missing_sample_graphemes();
                        if missing.is_empty() {
                            writeln!(out, "All sample characters are covered.")?;
                        } else {
                            let missing = text_view::printable(&missing.join(" "));
                            writeln!(out, "Missing: {missing}")?;
                        }
                    }
                }
                OutputFormat::Json => {
                    let report = PreviewReport {
                        family,
                        source: previewer.source_name(),
                        grid: previewer.grid(),
                        reference_point_size: config.reference_point_size,
                        sample_text: previewer.sample().as_str(),
                        missing_graphemes: previewer.missing_sample_graphemes(),
                    };
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
            Ok(())
        }

        Commands::List { dir } => {
            let dir = dir.unwrap_or_else(|| config.effective_font_folder());
            let entries = list_folder(&dir)
                .with_context(|| format!("failed to list {}", dir.display()))?;
            if entries.is_empty() {
                writeln!(out, "No fonts in {}", dir.display())?;
                return Ok(());
            }
            for entry in &entries {
                let kind = match entry.kind {
                    EntryKind::Font(format) => format.display_name(),
                    EntryKind::Archive(status) => status.description(),
                };
                writeln!(
                    out,
                    "{:<40} {:<16} {}",
                    text_view::printable(&entry.file_name),
                    kind,
                    text_view::printable(&entry.tooltip())
                )?;
            }
            Ok(())
        }

        Commands::Probe { path, code_points } => {
            let mut previewer = Previewer::default().with_ranges(Vec::new());
            previewer.open_path(&path).map_err(surface)?;
            let style = previewer.state().style();
            let Some(font) = previewer.state().font() else {
                anyhow::bail!("no font loaded from {}", path.display());
            };
            writeln!(out, "{}", text_view::printable(font.family()))?;
            for code_point in code_points {
                let shown = char::from_u32(code_point)
                    .filter(|c| !c.is_control())
                    .unwrap_or(' ');
                let verdict = if font.supports(&style, code_point) {
                    "supported"
                } else {
                    "not supported"
                };
                writeln!(out, "U+{code_point:04X}  {shown}  {verdict}")?;
            }
            Ok(())
        }
    }
}
