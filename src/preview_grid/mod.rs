//! Glyph coverage grid.
//!
//! For every previewed code point the grid holds a reference label cell and,
//! one row below it, a glyph cell drawn in the active font. Layout rules:
//! - `columns` code points per visual row; each visual row is a label row
//!   followed by a glyph row, so the row index advances by 2
//! - every range starts at column 0 of a fresh row
//! - a full-width separator row sits between consecutive non-empty ranges
//! - if the font covers none of the code points, the grid is a single notice
//!   cell instead

mod types;

use std::collections::VecDeque;
use std::ops::Range;

use font_previewer_config::{CodePointRange, StyleParameters};
use font_previewer_fonts::GlyphCoverage;
use thiserror::Error;

pub use types::{GridCell, NO_CHARACTERS_NOTICE, PlacedCell, PreviewGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid needs at least one column")]
    ZeroColumns,
}

/// Builds [`PreviewGrid`]s for a fixed column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewGridBuilder {
    columns: usize,
}

impl Default for PreviewGridBuilder {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
        }
    }
}

impl PreviewGridBuilder {
    pub const DEFAULT_COLUMNS: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: usize) -> Result<Self, GridError> {
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows a full grid for `ranges` occupies: `2 * ceil(len / columns)` per
    /// non-empty range plus one separator row between consecutive ones.
    pub fn row_count(&self, ranges: &[CodePointRange]) -> usize {
        let mut rows = 0;
        let mut non_empty: usize = 0;
        for range in ranges.iter().filter(|r| !r.is_empty()) {
            rows += 2 * range.len().div_ceil(self.columns);
            non_empty += 1;
        }
        rows + non_empty.saturating_sub(1)
    }

    /// Lazily produce the label, glyph and separator cells, row-major.
    ///
    /// Coverage is probed once per code point as its glyph row is produced.
    /// This never yields the notice cell; [`build`](Self::build) decides that.
    pub fn cells<'a, C: GlyphCoverage + ?Sized>(
        &self,
        coverage: &'a C,
        style: StyleParameters,
        ranges: &'a [CodePointRange],
    ) -> GridCells<'a, C> {
        GridCells {
            coverage,
            style,
            columns: self.columns,
            ranges: ranges.iter(),
            current: None,
            next_row: 0,
            started: false,
            pending: VecDeque::new(),
        }
    }

    /// Build the complete grid.
    ///
    /// Deterministic: identical inputs always produce equal grids.
    pub fn build<C: GlyphCoverage + ?Sized>(
        &self,
        coverage: &C,
        style: StyleParameters,
        ranges: &[CodePointRange],
    ) -> PreviewGrid {
        let cells: Vec<PlacedCell> = self.cells(coverage, style, ranges).collect();
        let any_supported = cells
            .iter()
            .any(|c| matches!(c.cell, GridCell::Glyph { supported: true, .. }));

        if !any_supported {
            log::debug!(
                "Font covers none of {} previewed code points",
                ranges.iter().map(CodePointRange::len).sum::<usize>()
            );
            return PreviewGrid::notice(self.columns, style, NO_CHARACTERS_NOTICE);
        }

        let grid = PreviewGrid::new(self.columns, self.row_count(ranges), style, cells);
        log::debug!(
            "Built preview grid: {} rows, {} cells, {} supported glyphs",
            grid.row_count(),
            grid.cells().len(),
            grid.supported_count()
        );
        grid
    }
}

/// Reference caption for a label cell.
pub fn label_text(ch: char) -> String {
    format!("{} ({})", ch, u32::from(ch))
}

/// Lazy cell sequence returned by [`PreviewGridBuilder::cells`].
///
/// Produces one visual row (label row plus glyph row) at a time.
pub struct GridCells<'a, C: ?Sized> {
    coverage: &'a C,
    style: StyleParameters,
    columns: usize,
    ranges: std::slice::Iter<'a, CodePointRange>,
    current: Option<Range<u32>>,
    next_row: usize,
    started: bool,
    pending: VecDeque<PlacedCell>,
}

impl<C: GlyphCoverage + ?Sized> GridCells<'_, C> {
    fn next_scalar(&mut self) -> Option<char> {
        let points = self.current.as_mut()?;
        points.find_map(char::from_u32)
    }

    /// Queue the next row group. Returns false once every range is consumed.
    fn fill(&mut self) -> bool {
        loop {
            let mut row: Vec<char> = Vec::with_capacity(self.columns);
            while row.len() < self.columns {
                match self.next_scalar() {
                    Some(ch) => row.push(ch),
                    None => break,
                }
            }

            if !row.is_empty() {
                self.queue_row(&row);
                return true;
            }

            let Some(range) = self.ranges.by_ref().find(|r| !r.is_empty()) else {
                self.current = None;
                return false;
            };
            self.current = Some(range.bounds());
            if self.started {
                self.pending.push_back(PlacedCell {
                    row: self.next_row,
                    column: 0,
                    column_span: self.columns,
                    cell: GridCell::Separator {
                        text: range.display_label(),
                    },
                });
                self.next_row += 1;
                return true;
            }
            self.started = true;
        }
    }

    fn queue_row(&mut self, row: &[char]) {
        let label_row = self.next_row;
        for (column, &ch) in row.iter().enumerate() {
            self.pending.push_back(PlacedCell {
                row: label_row,
                column,
                column_span: 1,
                cell: GridCell::Label {
                    text: label_text(ch),
                    code_point: u32::from(ch),
                },
            });
        }
        for (column, &ch) in row.iter().enumerate() {
            let code_point = u32::from(ch);
            self.pending.push_back(PlacedCell {
                row: label_row + 1,
                column,
                column_span: 1,
                cell: GridCell::Glyph {
                    code_point,
                    supported: self.coverage.supports(&self.style, code_point),
                },
            });
        }
        self.next_row += 2;
    }
}

impl<C: GlyphCoverage + ?Sized> Iterator for GridCells<'_, C> {
    type Item = PlacedCell;

    fn next(&mut self) -> Option<PlacedCell> {
        if self.pending.is_empty() && !self.fill() {
            return None;
        }
        self.pending.pop_front()
    }
}
