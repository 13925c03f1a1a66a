//! Folder listing for the file browser.
//!
//! Only fonts and zip archives are listed. Archives are opened once to
//! report whether they hold a font, so the browser can show the reason a
//! selection would fail before the user makes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use font_previewer_fonts::archive::{is_archive_file_name, is_font_file_name};
use font_previewer_fonts::{ArchiveStatus, FontFormat, archive_status};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum EntryKind {
    Font(#[serde(serialize_with = "serialize_format")] FontFormat),
    Archive(#[serde(serialize_with = "serialize_status")] ArchiveStatus),
}

fn serialize_format<S: serde::Serializer>(format: &FontFormat, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(format.display_name())
}

fn serialize_status<S: serde::Serializer>(
    status: &ArchiveStatus,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_str(status.description())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub file_name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl FolderEntry {
    /// Whether selecting this entry can produce a font.
    pub fn is_loadable(&self) -> bool {
        match self.kind {
            EntryKind::Font(_) => true,
            EntryKind::Archive(status) => status == ArchiveStatus::HasFonts,
        }
    }

    /// Hover text: the full path for loadable entries, the reason otherwise.
    pub fn tooltip(&self) -> String {
        match self.kind {
            EntryKind::Archive(status) if status != ArchiveStatus::HasFonts => {
                status.description().to_string()
            }
            _ => self.path.display().to_string(),
        }
    }
}

/// List the fonts and archives directly inside `dir`, sorted by name
/// (case-insensitive). Unreadable entries are skipped.
pub fn list_folder(dir: &Path) -> io::Result<Vec<FolderEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
        else {
            continue;
        };

        let kind = if is_font_file_name(&file_name) {
            EntryKind::Font(FontFormat::from_file_name(&file_name))
        } else if is_archive_file_name(&file_name) {
            match fs::read(&path) {
                Ok(data) => EntryKind::Archive(archive_status(&data)),
                Err(e) => {
                    log::warn!("Skipping unreadable archive {:?}: {}", path, e);
                    continue;
                }
            }
        } else {
            continue;
        };

        entries.push(FolderEntry {
            file_name,
            path,
            kind,
        });
    }

    entries.sort_by_cached_key(|e| e.file_name.to_lowercase());
    log::debug!("Listed {} entries in {:?}", entries.len(), dir);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip() {
        let font = FolderEntry {
            file_name: "A.ttf".to_string(),
            path: PathBuf::from("/fonts/A.ttf"),
            kind: EntryKind::Font(FontFormat::TrueType),
        };
        assert_eq!(font.tooltip(), "/fonts/A.ttf");
        assert!(font.is_loadable());

        let empty_zip = FolderEntry {
            file_name: "empty.zip".to_string(),
            path: PathBuf::from("/fonts/empty.zip"),
            kind: EntryKind::Archive(ArchiveStatus::NoFonts),
        };
        assert_eq!(empty_zip.tooltip(), "no fonts in here");
        assert!(!empty_zip.is_loadable());
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        assert!(list_folder(Path::new("/definitely/not/a/folder")).is_err());
    }
}
