//! Shared integration test helpers for font-previewer.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{ascii_font, zip_with, TestContext};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use font_previewer_fonts::test_support::TestFontBuilder;
use tempfile::TempDir;

/// Bytes of a font named `family` covering printable ASCII.
pub fn ascii_font(family: &str) -> Vec<u8> {
    TestFontBuilder::new(family).with_range(32..127).build()
}

/// Bytes of a font named `family` covering only `code_points`.
pub fn font_with(family: &str, code_points: &[u32]) -> Vec<u8> {
    TestFontBuilder::new(family)
        .with_code_points(code_points.iter().copied())
        .build()
}

/// An in-memory zip with `entries` in listing order.
pub fn zip_with(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A temporary folder that files can be dropped into.
///
/// The `TempDir` is removed when the context is dropped.
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Write `data` to `name` inside the folder and return its path.
    pub fn write(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, data).expect("Failed to write fixture");
        path
    }
}
