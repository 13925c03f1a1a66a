//! Error types for font loading and archive resolution.

use thiserror::Error;

/// Why a byte stream could not become a [`FontHandle`](crate::FontHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The bytes are not a recognizable font program, or the font registry
    /// refused them.
    #[error("failed to load font: not a recognizable font file")]
    Unparseable,

    /// The font parsed but exposes no usable family name.
    #[error("no font family found")]
    NoFamily,
}

/// Why an archive did not yield a font.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// The archive could not be opened or an entry could not be read.
    #[error("invalid ZIP archive: {0}")]
    Invalid(String),

    /// The archive opened but holds no `.ttf`/`.otf` entry.
    #[error("no fonts in here")]
    NoFontEntry,
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(e: zip::result::ZipError) -> Self {
        ArchiveError::Invalid(e.to_string())
    }
}
