//! Code point ranges previewed by the glyph grid.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One past the largest Unicode scalar value.
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Half-open interval `[start, end)` of code points to preview.
///
/// Values that are not Unicode scalar values (surrogates) are skipped when
/// iterating and are not counted by [`len`](Self::len). Deserialized ranges
/// are clamped the same way as [`new`](Self::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RangeFields")]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
    /// Caption shown on the separator row that precedes this range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Deserialize)]
struct RangeFields {
    start: u32,
    end: u32,
    #[serde(default)]
    label: Option<String>,
}

impl From<RangeFields> for CodePointRange {
    fn from(fields: RangeFields) -> Self {
        Self {
            label: fields.label,
            ..Self::new(fields.start, fields.end)
        }
    }
}

impl CodePointRange {
    /// Create an unlabeled range. `end` is clamped to the code point space and
    /// an inverted range becomes empty.
    pub fn new(start: u32, end: u32) -> Self {
        let end = end.min(CODE_POINT_LIMIT);
        let start = start.min(end);
        Self {
            start,
            end,
            label: None,
        }
    }

    pub fn labeled(start: u32, end: u32, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(start, end)
        }
    }

    /// `start..end` limited to the code point space, empty when inverted.
    pub fn bounds(&self) -> Range<u32> {
        let end = self.end.min(CODE_POINT_LIMIT);
        self.start.min(end)..end
    }

    /// Scalar values in ascending order.
    pub fn code_points(&self) -> impl Iterator<Item = char> + Clone + use<> {
        self.bounds().filter_map(char::from_u32)
    }

    /// Number of scalar values in the range.
    pub fn len(&self) -> usize {
        const SURROGATES: Range<u32> = 0xD800..0xE000;
        let Range { start, end } = self.bounds();
        let overlap_start = start.max(SURROGATES.start);
        let overlap_end = end.min(SURROGATES.end);
        (end - start - overlap_end.saturating_sub(overlap_start)) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.bounds().contains(&code_point) && char::from_u32(code_point).is_some()
    }

    /// Caption for the separator row, falling back to the numeric bounds.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!(
                "U+{:04X}-U+{:04X}",
                self.start,
                self.end.saturating_sub(1)
            ),
        }
    }
}

/// Printable ASCII, `' '` through `'~'`.
pub fn printable_ascii() -> CodePointRange {
    CodePointRange::labeled(32, 127, "Printable ASCII")
}

/// The default preview: printable ASCII followed by U+007F through U+0400.
pub fn default_ranges() -> Vec<CodePointRange> {
    vec![
        printable_ascii(),
        CodePointRange::labeled(127, 1025, "Other Unicode"),
    ]
}
