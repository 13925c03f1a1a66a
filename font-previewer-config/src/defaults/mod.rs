//! Default value functions for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on `PreviewConfig` fields.

mod folders;
mod preview;

// ── Glyph preview ──────────────────────────────────────────────────────────
pub use preview::{bold, columns, italic, point_size, reference_point_size};

// ── Folders ────────────────────────────────────────────────────────────────
pub use folders::font_folder;
