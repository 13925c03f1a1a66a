//! Integration tests for font-previewer-fonts crate.

use std::io::{Cursor, Write};

use font_previewer_config::StyleParameters;
use font_previewer_fonts::archive::{FONT_EXTENSIONS, is_archive_file_name, is_font_file_name};
use font_previewer_fonts::{
    ArchiveError, ArchiveStatus, FontFormat, FontRegistry, GlyphCoverage, LoadError,
    archive_status, first_font_entry, is_visible_code_point,
};

fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Coverage stand-in answering from a fixed list.
struct ListedCoverage(Vec<u32>);

impl GlyphCoverage for ListedCoverage {
    fn supports(&self, _style: &StyleParameters, code_point: u32) -> bool {
        is_visible_code_point(code_point) && self.0.contains(&code_point)
    }
}

#[test]
fn test_registry_starts_empty() {
    let registry = FontRegistry::new();
    assert_eq!(registry.face_count(), 0);
    assert!(registry.registered_families().is_empty());
}

#[test]
fn test_invalid_bytes_do_not_register() {
    let registry = FontRegistry::new();
    let result = registry.load_with_hint(vec![0u8; 100], FontFormat::TrueType);
    assert_eq!(result.unwrap_err(), LoadError::Unparseable);
    assert_eq!(registry.face_count(), 0);
}

#[test]
fn test_load_error_messages_are_distinct() {
    assert_ne!(
        LoadError::Unparseable.to_string(),
        LoadError::NoFamily.to_string()
    );
    assert_eq!(ArchiveError::NoFontEntry.to_string(), "no fonts in here");
    assert!(
        ArchiveError::Invalid("bad header".into())
            .to_string()
            .starts_with("invalid ZIP archive")
    );
}

#[test]
fn test_archive_font_bytes_reach_loader() {
    let zip = zip_with(&[
        ("docs/readme.txt", &b"hi"[..]),
        ("Broken.ttf", &b"not really a font"[..]),
    ]);
    let extracted = first_font_entry(&zip).unwrap();
    assert_eq!(extracted.entry_name, "Broken.ttf");

    let registry = FontRegistry::new();
    let hint = extracted.format_hint();
    let result = registry.load_with_hint(extracted.data, hint);
    assert_eq!(result.unwrap_err(), LoadError::Unparseable);
}

#[test]
fn test_archive_error_kinds() {
    let no_fonts = zip_with(&[("a.txt", &b"a"[..])]);
    assert_eq!(first_font_entry(&no_fonts).unwrap_err(), ArchiveError::NoFontEntry);
    assert_eq!(archive_status(&no_fonts), ArchiveStatus::NoFonts);

    let corrupt = b"PK\x03\x04 truncated";
    assert!(matches!(
        first_font_entry(corrupt),
        Err(ArchiveError::Invalid(_))
    ));
    assert_eq!(archive_status(corrupt), ArchiveStatus::Invalid);
}

#[test]
fn test_deflated_entry_is_extracted() {
    let payload = vec![7u8; 4096];
    let zip = zip_with(&[("Compressed.OTF", payload.as_slice())]);
    let extracted = first_font_entry(&zip).unwrap();
    assert_eq!(extracted.data, payload);
    assert_eq!(extracted.format_hint(), FontFormat::OpenType);
}

#[test]
fn test_font_extensions() {
    assert_eq!(FONT_EXTENSIONS, &[".ttf", ".otf"]);
    assert!(is_font_file_name("X.Ttf"));
    assert!(is_archive_file_name("bundle.zip"));
}

#[test]
fn test_visible_code_points() {
    assert!(!is_visible_code_point(0x1F));
    assert!(is_visible_code_point(0x20));
    assert!(is_visible_code_point(0x1F600));
    assert!(!is_visible_code_point(0xDFFF));
    assert!(!is_visible_code_point(0x11_0000));
}

#[test]
fn test_custom_coverage_impl() {
    let coverage = ListedCoverage(vec![0x0A, 0x41, 0x1F600]);
    let style = StyleParameters::default();
    assert!(coverage.supports(&style, 0x1F600));
    assert!(coverage.supports(&style, 0x41));
    assert!(!coverage.supports(&style, 0x0A));
}
