//! Font loading and glyph coverage for font-previewer.
//!
//! This crate provides:
//! - Font loading from raw bytes with registration in a shared `fontdb` database
//! - Full-range (21-bit) glyph coverage probing via the font's character map
//! - Extraction of the first font found in a zip archive
//!
//! # Architecture
//!
//! A `FontRegistry` owns the database. `FontRegistry::load` parses the bytes
//! with swash, extracts the family names, and registers the font; the returned
//! `FontHandle` owns both the bytes and the registration, releasing the latter
//! when dropped. `GlyphCoverage` is the query seam the grid builder uses, so
//! anything that can answer "does this font draw this code point" can stand
//! in for a real font.

pub mod archive;
pub mod coverage;
pub mod error;
pub mod registry;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// Re-export main types for convenience
pub use archive::{ArchiveStatus, ExtractedFont, archive_status, first_font_entry};
pub use coverage::{GlyphCoverage, is_visible_code_point};
pub use error::{ArchiveError, LoadError};
pub use registry::{FontFormat, FontHandle, FontRegistry};
