//! Glyph coverage probing.
//!
//! Coverage is answered from the font's character map over the full 21-bit
//! code point space, so supplementary-plane glyphs (emoji, historic scripts)
//! are reported correctly rather than being truncated to 16-bit code units.

use font_previewer_config::StyleParameters;

use crate::registry::FontHandle;

/// First code point with a visual glyph by convention; everything below is a
/// C0 control.
pub const FIRST_VISIBLE_CODE_POINT: u32 = 0x20;

/// Answers whether a font renders a glyph for a code point.
///
/// Implementations must be pure queries and total over `u32`: values that are
/// not Unicode scalar values are simply unsupported.
pub trait GlyphCoverage {
    fn supports(&self, style: &StyleParameters, code_point: u32) -> bool;
}

impl<T: GlyphCoverage + ?Sized> GlyphCoverage for &T {
    fn supports(&self, style: &StyleParameters, code_point: u32) -> bool {
        (**self).supports(style, code_point)
    }
}

/// Whether `code_point` is a scalar value outside the C0 control block.
pub fn is_visible_code_point(code_point: u32) -> bool {
    code_point >= FIRST_VISIBLE_CODE_POINT && char::from_u32(code_point).is_some()
}

impl FontHandle {
    /// Glyph id mapped to `code_point`, 0 when unmapped.
    ///
    /// A missing or malformed `cmap` maps everything to 0.
    pub fn glyph_id(&self, code_point: u32) -> u16 {
        self.font_ref().charmap().map(code_point)
    }
}

impl GlyphCoverage for FontHandle {
    /// Bold and italic are synthesized at render time, so the answer depends
    /// only on the font program.
    fn supports(&self, _style: &StyleParameters, code_point: u32) -> bool {
        is_visible_code_point(code_point) && self.glyph_id(code_point) != 0
    }
}
