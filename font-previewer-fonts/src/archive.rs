//! Resolving fonts packed inside zip archives.
//!
//! The first entry (in the archive's central directory order) whose name ends
//! in `.ttf` or `.otf`, compared case-insensitively, is the font of the
//! archive. Extracted bytes are handed to the loader by value and live only as
//! long as the load needs them; nothing is written to disk.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::ArchiveError;
use crate::registry::FontFormat;

/// File extensions treated as loadable fonts.
pub const FONT_EXTENSIONS: &[&str] = &[".ttf", ".otf"];

/// Largest font entry extracted from an archive. Declared entry sizes are
/// never trusted for allocation.
pub const MAX_ENTRY_BYTES: u64 = 128 * 1024 * 1024;

/// File extension treated as an archive of fonts.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Whether `name` ends in a font extension (case-insensitive).
pub fn is_font_file_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    FONT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Whether `name` ends in the archive extension (case-insensitive).
pub fn is_archive_file_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(ARCHIVE_EXTENSION)
}

/// Font bytes taken out of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFont {
    /// Entry name inside the archive
    pub entry_name: String,
    /// Decompressed entry contents
    pub data: Vec<u8>,
}

impl ExtractedFont {
    /// Parser hint derived from the entry name.
    pub fn format_hint(&self) -> FontFormat {
        FontFormat::from_file_name(&self.entry_name)
    }
}

/// What an archive holds, as shown next to it in a folder listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveStatus {
    HasFonts,
    NoFonts,
    Invalid,
}

impl ArchiveStatus {
    pub fn description(&self) -> &'static str {
        match self {
            ArchiveStatus::HasFonts => "contains fonts",
            ArchiveStatus::NoFonts => "no fonts in here",
            ArchiveStatus::Invalid => "invalid zip",
        }
    }
}

fn open(data: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>, ArchiveError> {
    ZipArchive::new(Cursor::new(data)).map_err(|e| {
        log::warn!("Failed to open zip: {}", e);
        ArchiveError::from(e)
    })
}

/// Index of the first font-like entry, if any.
fn first_font_index<R: Read + std::io::Seek>(archive: &ZipArchive<R>) -> Option<usize> {
    (0..archive.len()).find(|&i| {
        archive
            .name_for_index(i)
            .is_some_and(|name| !name.ends_with('/') && is_font_file_name(name))
    })
}

/// Extract the first font entry of a zip archive.
///
/// Returns [`ArchiveError::Invalid`] when the archive cannot be opened or the
/// entry cannot be decompressed, and [`ArchiveError::NoFontEntry`] when the
/// archive opens but holds no font.
pub fn first_font_entry(data: &[u8]) -> Result<ExtractedFont, ArchiveError> {
    let mut archive = open(data)?;
    let index = first_font_index(&archive).ok_or(ArchiveError::NoFontEntry)?;

    let entry_count = archive.len();

    let mut entry = archive.by_index(index)?;
    let entry_name = entry.name().to_string();
    let bytes = read_limited(&mut entry, MAX_ENTRY_BYTES)
        .map_err(|e| ArchiveError::Invalid(format!("failed to read '{entry_name}': {e}")))?;

    log::info!(
        "Extracted '{}' ({} bytes) from archive with {} entries",
        entry_name,
        bytes.len(),
        entry_count
    );
    Ok(ExtractedFont {
        entry_name,
        data: bytes,
    })
}

/// Read `reader` to the end, failing once more than `limit` bytes arrive.
fn read_limited<R: Read>(reader: R, limit: u64) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Err(std::io::Error::other(format!(
            "entry exceeds {limit} bytes"
        )));
    }
    Ok(bytes)
}

/// Classify an archive without decompressing any entry.
pub fn archive_status(data: &[u8]) -> ArchiveStatus {
    match open(data) {
        Ok(archive) if first_font_index(&archive).is_some() => ArchiveStatus::HasFonts,
        Ok(_) => ArchiveStatus::NoFonts,
        Err(_) => ArchiveStatus::Invalid,
    }
}
