//! Plain data handed to the presentation layer.

use font_previewer_config::StyleParameters;
use serde::Serialize;

/// Message shown instead of the grid when the font covers none of the
/// previewed code points.
pub const NO_CHARACTERS_NOTICE: &str = "no characters in file";

/// Content of one grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    /// Reference caption `"{ch} ({code})"`, drawn in the fixed reference style.
    Label { text: String, code_point: u32 },
    /// The code point drawn in the previewed font and style. An unsupported
    /// glyph renders as empty space but still occupies its slot.
    Glyph { code_point: u32, supported: bool },
    /// Caption spanning all columns between two ranges.
    Separator { text: String },
    /// Informational message replacing the whole grid.
    Notice { text: String },
}

impl GridCell {
    /// Code point referenced by a label or glyph cell.
    pub fn code_point(&self) -> Option<u32> {
        match self {
            GridCell::Label { code_point, .. } | GridCell::Glyph { code_point, .. } => {
                Some(*code_point)
            }
            GridCell::Separator { .. } | GridCell::Notice { .. } => None,
        }
    }
}

/// A cell at its grid position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlacedCell {
    pub row: usize,
    pub column: usize,
    pub column_span: usize,
    #[serde(flatten)]
    pub cell: GridCell,
}

/// Row-major arrangement of cells produced by one rebuild.
///
/// Immutable once built; a rebuild produces a new value that replaces the
/// previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewGrid {
    columns: usize,
    row_count: usize,
    style: StyleParameters,
    cells: Vec<PlacedCell>,
}

impl PreviewGrid {
    pub(crate) fn new(
        columns: usize,
        row_count: usize,
        style: StyleParameters,
        cells: Vec<PlacedCell>,
    ) -> Self {
        Self {
            columns,
            row_count,
            style,
            cells,
        }
    }

    /// The grid shown before any font is active.
    pub fn empty(columns: usize, style: StyleParameters) -> Self {
        Self::new(columns, 0, style, Vec::new())
    }

    /// The single-cell grid for a font that covers nothing previewed.
    pub fn notice(columns: usize, style: StyleParameters, text: &str) -> Self {
        let cell = PlacedCell {
            row: 0,
            column: 0,
            column_span: columns,
            cell: GridCell::Notice {
                text: text.to_string(),
            },
        };
        Self::new(columns, 1, style, vec![cell])
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Style the glyph cells were built for.
    pub fn style(&self) -> StyleParameters {
        self.style
    }

    pub fn cells(&self) -> &[PlacedCell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The notice text when the grid is the "nothing covered" case.
    pub fn notice_text(&self) -> Option<&str> {
        match self.cells.as_slice() {
            [
                PlacedCell {
                    cell: GridCell::Notice { text },
                    ..
                },
            ] => Some(text),
            _ => None,
        }
    }

    /// Cells grouped by row, in row order.
    pub fn rows(&self) -> impl Iterator<Item = &[PlacedCell]> + '_ {
        self.cells.chunk_by(|a, b| a.row == b.row)
    }

    /// Number of glyph cells the font supports.
    pub fn supported_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c.cell, GridCell::Glyph { supported: true, .. }))
            .count()
    }
}
