// Library exports for testing and potential library use
//
// Everything here runs synchronously on the caller's thread. The only shared
// state is the font database inside `FontRegistry`, guarded by a
// `parking_lot::Mutex`, and the log bridge's file handle.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod browser;
pub mod cli;
pub mod debug;
pub mod preview_grid;
pub mod previewer;
pub mod sample_text;
pub mod style_state;
pub mod text_view;

pub use font_previewer_config::{CodePointRange, PreviewConfig, StyleError, StyleParameters};
pub use font_previewer_fonts::{ArchiveError, FontHandle, FontRegistry, GlyphCoverage, LoadError};
pub use preview_grid::{GridCell, GridError, PlacedCell, PreviewGrid, PreviewGridBuilder};
pub use previewer::{PreviewError, Previewer};
pub use sample_text::{AltCodeError, SampleText};
pub use style_state::StyleState;
