//! User-typed sample text and alt-code entry.

use font_previewer_config::StyleParameters;
use font_previewer_fonts::{GlyphCoverage, is_visible_code_point};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Largest value accepted as an alt code (U+10FFFF).
pub const MAX_ALT_CODE: u32 = 0x10_FFFF;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AltCodeError {
    #[error("no alt code entered")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    NotANumber(String),

    #[error("{0} is outside 0..=1114111")]
    OutOfRange(String),

    #[error("{0} is a surrogate, not a character")]
    NotAScalar(u32),
}

/// Parse a decimal alt code into the character it names.
pub fn parse_alt_code(text: &str) -> Result<char, AltCodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AltCodeError::Empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AltCodeError::NotANumber(text.to_string()));
    }
    let value: u32 = text
        .parse()
        .map_err(|_| AltCodeError::OutOfRange(text.to_string()))?;
    if value > MAX_ALT_CODE {
        return Err(AltCodeError::OutOfRange(text.to_string()));
    }
    char::from_u32(value).ok_or(AltCodeError::NotAScalar(value))
}

/// Free text typed by the user to check against the active font.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleText {
    text: String,
}

impl SampleText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append the character named by a decimal alt code.
    pub fn insert_alt_code(&mut self, code: &str) -> Result<char, AltCodeError> {
        let ch = parse_alt_code(code)?;
        self.text.push(ch);
        Ok(ch)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Grapheme clusters the font cannot fully draw, in order of first
    /// appearance and without duplicates.
    ///
    /// Only visible code points count, so whitespace and controls inside a
    /// cluster never make it "missing".
    pub fn missing_graphemes<C: GlyphCoverage + ?Sized>(
        &self,
        coverage: &C,
        style: &StyleParameters,
    ) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for grapheme in self.text.graphemes(true) {
            let lacks_glyph = grapheme
                .chars()
                .map(u32::from)
                .filter(|&cp| is_visible_code_point(cp) && !is_whitespace_code_point(cp))
                .any(|cp| !coverage.supports(style, cp));
            if lacks_glyph && !missing.iter().any(|g| g == grapheme) {
                missing.push(grapheme.to_string());
            }
        }
        missing
    }
}

fn is_whitespace_code_point(code_point: u32) -> bool {
    char::from_u32(code_point).is_some_and(char::is_whitespace)
}
