//! Style parameters applied to previewed glyphs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a style value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Point size outside `MIN_POINT_SIZE..=MAX_POINT_SIZE`.
    #[error(
        "invalid point size {requested}: must be between {} and {}",
        StyleParameters::MIN_POINT_SIZE,
        StyleParameters::MAX_POINT_SIZE
    )]
    InvalidSize { requested: i64 },
}

/// Point size and synthetic weight/slant used to render glyph cells.
///
/// Only mutated through the setters, which enforce the size bounds; a rejected
/// value leaves the parameters untouched. Deserialization goes through
/// [`new`](Self::new) and enforces the same bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StyleFields")]
pub struct StyleParameters {
    point_size: u32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            point_size: crate::defaults::point_size(),
            bold: false,
            italic: false,
        }
    }
}

#[derive(Deserialize)]
struct StyleFields {
    point_size: i64,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
}

impl TryFrom<StyleFields> for StyleParameters {
    type Error = StyleError;

    fn try_from(fields: StyleFields) -> Result<Self, StyleError> {
        Self::new(fields.point_size, fields.bold, fields.italic)
    }
}

impl StyleParameters {
    /// Smallest accepted point size.
    pub const MIN_POINT_SIZE: u32 = 1;
    /// Largest accepted point size, matching the size control's upper bound.
    pub const MAX_POINT_SIZE: u32 = 500;

    /// Create parameters after validating `point_size`.
    pub fn new(point_size: i64, bold: bool, italic: bool) -> Result<Self, StyleError> {
        Ok(Self {
            point_size: Self::validate_point_size(point_size)?,
            bold,
            italic,
        })
    }

    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    /// Check a requested size against the core-level bounds.
    ///
    /// Accepts a signed value so that negative input coming from a text field
    /// is rejected here rather than wrapping.
    pub fn validate_point_size(requested: i64) -> Result<u32, StyleError> {
        if requested < i64::from(Self::MIN_POINT_SIZE) || requested > i64::from(Self::MAX_POINT_SIZE)
        {
            return Err(StyleError::InvalidSize { requested });
        }
        Ok(requested as u32)
    }

    /// Set the point size. Returns whether the stored value changed.
    pub fn set_point_size(&mut self, requested: i64) -> Result<bool, StyleError> {
        let size = Self::validate_point_size(requested)?;
        let changed = size != self.point_size;
        self.point_size = size;
        Ok(changed)
    }

    /// Builder-style point size setter.
    pub fn with_point_size(mut self, requested: i64) -> Result<Self, StyleError> {
        self.set_point_size(requested)?;
        Ok(self)
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleParameters::default();
        assert_eq!(style.point_size(), 46);
        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let mut style = StyleParameters::default().with_point_size(56).unwrap();
        assert_eq!(
            style.set_point_size(0),
            Err(StyleError::InvalidSize { requested: 0 })
        );
        assert_eq!(
            style.set_point_size(-5),
            Err(StyleError::InvalidSize { requested: -5 })
        );
        assert_eq!(style.point_size(), 56);
    }

    #[test]
    fn test_upper_bound() {
        let mut style = StyleParameters::default();
        assert_eq!(style.set_point_size(500), Ok(true));
        assert!(style.set_point_size(501).is_err());
        assert_eq!(style.point_size(), 500);
    }

    #[test]
    fn test_same_size_is_not_a_change() {
        let mut style = StyleParameters::default();
        let current = i64::from(style.point_size());
        assert_eq!(style.set_point_size(current), Ok(false));
    }

    #[test]
    fn test_deserialize_validates_point_size() {
        let err = serde_yaml_ng::from_str::<StyleParameters>("point_size: 0\nbold: true\n")
            .unwrap_err();
        assert!(err.to_string().contains("invalid point size 0"), "got: {err}");
        assert!(serde_yaml_ng::from_str::<StyleParameters>("point_size: 501\n").is_err());

        let style: StyleParameters =
            serde_yaml_ng::from_str("point_size: 72\nitalic: true\n").unwrap();
        assert_eq!(style, StyleParameters::new(72, false, true).unwrap());
    }

    #[test]
    fn test_error_message_mentions_bounds() {
        let msg = StyleError::InvalidSize { requested: 0 }.to_string();
        assert!(msg.contains("between 1 and 500"), "got: {msg}");
    }
}
