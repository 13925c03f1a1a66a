//! Plain-text rendering of a [`PreviewGrid`].
//!
//! Every column is padded to the widest label in the grid so glyphs line up
//! under their labels. Unsupported glyph cells print as blanks, and so do
//! control characters, which never reach the terminal.

use std::fmt::Write;

use crate::preview_grid::{GridCell, PlacedCell, PreviewGrid};

const COLUMN_GAP: &str = "  ";

/// Render `grid` as lines of text, headed by the font family name.
pub fn render(grid: &PreviewGrid, family: &str) -> String {
    let mut out = String::new();
    let style = grid.style();
    let mut flags = Vec::new();
    if style.bold {
        flags.push("bold");
    }
    if style.italic {
        flags.push("italic");
    }
    let _ = write!(out, "{} ({}pt", printable(family), style.point_size());
    for flag in flags {
        let _ = write!(out, ", {flag}");
    }
    out.push_str(")\n");

    if let Some(notice) = grid.notice_text() {
        out.push_str(notice);
        out.push('\n');
        return out;
    }

    let width = column_width(grid);
    let full_width = grid.columns() * width + grid.columns().saturating_sub(1) * COLUMN_GAP.len();
    for row in grid.rows() {
        out.push_str(render_row(row, width, full_width).trim_end());
        out.push('\n');
    }
    out
}

/// `text` with every control character replaced by a space.
pub fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn column_width(grid: &PreviewGrid) -> usize {
    grid.cells()
        .iter()
        .filter_map(|c| match &c.cell {
            GridCell::Label { text, .. } => Some(text.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(1)
}

fn render_row(row: &[PlacedCell], width: usize, full_width: usize) -> String {
    let mut line = String::new();
    let mut next_column = 0;
    for placed in row {
        while next_column < placed.column {
            let _ = write!(line, "{:width$}{COLUMN_GAP}", "");
            next_column += 1;
        }
        match &placed.cell {
            GridCell::Label { text, .. } => {
                let _ = write!(line, "{:<width$}{COLUMN_GAP}", printable(text));
            }
            GridCell::Glyph {
                code_point,
                supported,
            } => {
                let glyph = char::from_u32(*code_point)
                    .filter(|c| *supported && !c.is_control())
                    .unwrap_or(' ');
                let _ = write!(line, "{glyph:<width$}{COLUMN_GAP}");
            }
            GridCell::Separator { text } | GridCell::Notice { text } => {
                let _ = write!(line, "{:^full_width$}", format!(" {} ", printable(text)));
            }
        }
        next_column = placed.column + placed.column_span;
    }
    line
}
