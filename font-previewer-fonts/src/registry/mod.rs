//! Font loading and registration.
//!
//! A [`FontRegistry`] wraps the `fontdb` database that the rendering side
//! resolves family names against. Loading bytes through it yields a
//! [`FontHandle`] that:
//! - owns the decoded font data for its lifetime
//! - exposes the family names the font declares
//! - keeps the font registered in the database until it is dropped

mod types;

use std::sync::Arc;

use fontdb::{Database, Source};
use parking_lot::Mutex;
use swash::{CacheKey, FontRef, StringId};

use crate::error::LoadError;

pub use types::FontFormat;
use types::Registration;

/// Shared font database that loaded handles register into.
///
/// Cloning is cheap; clones share the same database.
#[derive(Clone, Default)]
pub struct FontRegistry {
    db: Arc<Mutex<Database>>,
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("faces", &self.face_count())
            .finish()
    }
}

impl FontRegistry {
    /// Create an empty registry (no system fonts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of faces currently registered.
    pub fn face_count(&self) -> usize {
        self.db.lock().len()
    }

    /// Family names of every registered face, in registration order.
    pub fn registered_families(&self) -> Vec<String> {
        let db = self.db.lock();
        db.faces()
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .collect()
    }

    /// Load a font from raw bytes.
    pub fn load(&self, data: Vec<u8>) -> Result<FontHandle, LoadError> {
        self.load_with_hint(data, FontFormat::Unknown)
    }

    /// Load a font from raw bytes, with a format hint taken from the file name.
    ///
    /// The hint is advisory: the sfnt header decides how the bytes are parsed.
    /// On failure nothing stays registered.
    pub fn load_with_hint(&self, data: Vec<u8>, hint: FontFormat) -> Result<FontHandle, LoadError> {
        let detected = FontFormat::detect(&data);
        if hint != FontFormat::Unknown && detected != FontFormat::Unknown && hint != detected {
            log::debug!(
                "Font format hint {} disagrees with detected {}",
                hint.display_name(),
                detected.display_name()
            );
        }

        let data = Arc::new(data);
        let (offset, key, families) = {
            let font = FontRef::from_index(data.as_slice(), 0).ok_or_else(|| {
                log::warn!("Rejected {} bytes: not a font program", data.len());
                LoadError::Unparseable
            })?;
            (font.offset, font.key, family_names(&font))
        };

        if families.is_empty() {
            log::warn!("Font parsed but declares no family name");
            return Err(LoadError::NoFamily);
        }

        let faces: Vec<fontdb::ID> = {
            let mut db = self.db.lock();
            db.load_font_source(Source::Binary(data.clone()))
                .into_iter()
                .collect()
        };
        if faces.is_empty() {
            log::warn!("Font registry refused '{}'", families[0]);
            return Err(LoadError::Unparseable);
        }

        let format = if detected == FontFormat::Unknown {
            hint
        } else {
            detected
        };
        log::info!(
            "Loaded font '{}' ({}, {} bytes, {} face(s) registered)",
            families[0],
            format.display_name(),
            data.len(),
            faces.len()
        );

        Ok(FontHandle {
            data,
            offset,
            key,
            families,
            format,
            registration: Registration {
                db: Arc::clone(&self.db),
                faces,
            },
        })
    }
}

/// A loaded, parsed font.
///
/// Exactly one handle is active at a time in a preview session; dropping it
/// unregisters its faces from the [`FontRegistry`] it came from.
pub struct FontHandle {
    data: Arc<Vec<u8>>,
    offset: u32,
    key: CacheKey,
    families: Vec<String>,
    format: FontFormat,
    registration: Registration,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("family", &self.family())
            .field("format", &self.format)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontHandle {
    /// Primary family name (English when the font provides one).
    pub fn family(&self) -> &str {
        self.families.first().map(String::as_str).unwrap_or_default()
    }

    /// All distinct family names the font declares, primary first.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Number of faces this handle keeps registered.
    pub fn registered_faces(&self) -> usize {
        self.registration.faces.len()
    }

    /// Borrow the parsed font for table lookups.
    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: self.data.as_slice(),
            offset: self.offset,
            key: self.key,
        }
    }
}

/// Collect family names, typographic family first, English preferred.
fn family_names(font: &FontRef<'_>) -> Vec<String> {
    let strings = font.localized_strings();
    let mut names: Vec<String> = Vec::new();
    let mut push = |name: String| {
        let name = name.trim().to_string();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    };

    for id in [StringId::TypographicFamily, StringId::Family] {
        if let Some(english) = strings.find_by_id(id, Some("en")) {
            push(english.chars().collect());
        }
        for localized in strings.clone().filter(|s| s.id() == id) {
            push(localized.chars().collect());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestFontBuilder;

    #[test]
    fn test_load_synthetic_font() {
        let registry = FontRegistry::new();
        let bytes = TestFontBuilder::new("Probe Sans").with_range(32..127).build();
        let handle = registry.load(bytes).expect("synthetic font should load");
        assert_eq!(handle.family(), "Probe Sans");
        assert_eq!(handle.format(), FontFormat::TrueType);
        assert_eq!(handle.registered_faces(), 1);
        assert_eq!(registry.face_count(), 1);
        assert_eq!(registry.registered_families(), vec!["Probe Sans".to_string()]);
    }

    #[test]
    fn test_load_invalid_bytes() {
        let registry = FontRegistry::new();
        assert_eq!(registry.load(vec![0u8; 100]).unwrap_err(), LoadError::Unparseable);
        assert_eq!(registry.load(Vec::new()).unwrap_err(), LoadError::Unparseable);
        assert_eq!(
            registry.load(b"PK\x03\x04 not a font".to_vec()).unwrap_err(),
            LoadError::Unparseable
        );
        assert_eq!(registry.face_count(), 0);
    }

    #[test]
    fn test_load_without_family_name() {
        let registry = FontRegistry::new();
        let bytes = TestFontBuilder::unnamed().with_range(65..91).build();
        assert_eq!(registry.load(bytes).unwrap_err(), LoadError::NoFamily);
        assert_eq!(registry.face_count(), 0);
    }

    #[test]
    fn test_drop_releases_registration() {
        let registry = FontRegistry::new();
        let first = registry
            .load(TestFontBuilder::new("First").with_range(65..91).build())
            .unwrap();
        let second = registry
            .load(TestFontBuilder::new("Second").with_range(65..91).build())
            .unwrap();
        assert_eq!(registry.face_count(), 2);

        drop(first);
        assert_eq!(registry.face_count(), 1);
        assert_eq!(registry.registered_families(), vec!["Second".to_string()]);

        drop(second);
        assert_eq!(registry.face_count(), 0);
    }

    #[test]
    fn test_reloading_same_bytes_registers_again() {
        let registry = FontRegistry::new();
        let bytes = TestFontBuilder::new("Twice").with_range(65..91).build();
        let a = registry.load(bytes.clone()).unwrap();
        let b = registry.load(bytes).unwrap();
        assert_eq!(registry.face_count(), 2);
        drop(a);
        assert_eq!(registry.face_count(), 1);
        assert_eq!(b.family(), "Twice");
    }

    #[test]
    fn test_opentype_tag_detected() {
        let registry = FontRegistry::new();
        let bytes = TestFontBuilder::new("Outline")
            .with_opentype_tag()
            .with_range(65..91)
            .build();
        let handle = registry.load_with_hint(bytes, FontFormat::TrueType).unwrap();
        assert_eq!(handle.format(), FontFormat::OpenType);
    }

    #[test]
    fn test_debug_output() {
        let registry = FontRegistry::new();
        let handle = registry
            .load(TestFontBuilder::new("Debuggable").with_range(65..91).build())
            .unwrap();
        let debug_str = format!("{:?}", handle);
        assert!(debug_str.contains("FontHandle"));
        assert!(debug_str.contains("Debuggable"));
        assert!(format!("{:?}", registry).contains("faces"));
    }
}
