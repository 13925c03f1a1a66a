//! Font format hints and the registration token owned by each handle.

use std::sync::Arc;

use fontdb::{Database, ID};
use parking_lot::Mutex;

/// Container format of a font program.
///
/// Derived either from a file name (a hint supplied by the file or archive
/// layer) or from the sfnt version tag of the bytes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFormat {
    /// `.ttf` / sfnt version `0x00010000` or `true`
    TrueType,
    /// `.otf` / sfnt version `OTTO`
    OpenType,
    /// `ttcf` header
    Collection,
    #[default]
    Unknown,
}

impl FontFormat {
    /// Guess the format from a file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".ttf") {
            FontFormat::TrueType
        } else if lower.ends_with(".otf") {
            FontFormat::OpenType
        } else if lower.ends_with(".ttc") {
            FontFormat::Collection
        } else {
            FontFormat::Unknown
        }
    }

    /// Identify the format from the leading sfnt tag.
    pub fn detect(data: &[u8]) -> Self {
        match data.get(0..4) {
            Some([0, 1, 0, 0]) | Some(b"true") => FontFormat::TrueType,
            Some(b"OTTO") => FontFormat::OpenType,
            Some(b"ttcf") => FontFormat::Collection,
            _ => FontFormat::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontFormat::TrueType => "TrueType",
            FontFormat::OpenType => "OpenType",
            FontFormat::Collection => "TrueType Collection",
            FontFormat::Unknown => "unknown",
        }
    }
}

/// Faces registered in the shared database on behalf of one handle.
///
/// Dropping the registration removes exactly those faces, so replacing the
/// active font never leaks the previous one into the database.
pub(crate) struct Registration {
    pub(crate) db: Arc<Mutex<Database>>,
    pub(crate) faces: Vec<ID>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let mut db = self.db.lock();
        for id in self.faces.drain(..) {
            db.remove_face(id);
        }
        log::debug!("Released font registration ({} faces remain)", db.len());
    }
}
