//! A preview session: one registry, one active font, one grid.
//!
//! [`Previewer`] ties the loader, [`StyleState`] and [`PreviewGridBuilder`]
//! together for the presentation layer. Each public mutation is one discrete
//! user action; it applies the change and then runs at most one rebuild.
//! Any failure leaves the active font and the current grid untouched.

use std::fs;
use std::path::{Path, PathBuf};

use font_previewer_config::{
    CodePointRange, ConfigError, PreviewConfig, StyleError, StyleParameters, default_ranges,
};
use font_previewer_fonts::archive::is_archive_file_name;
use font_previewer_fonts::{
    ArchiveError, FontFormat, FontHandle, FontRegistry, LoadError, first_font_entry,
};
use thiserror::Error;

use crate::preview_grid::{GridError, PreviewGrid, PreviewGridBuilder};
use crate::sample_text::{AltCodeError, SampleText};
use crate::style_state::StyleState;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("invalid alt code: {0}")]
    AltCode(#[from] AltCodeError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PreviewError {
    /// Short heading for an error dialog, distinct per kind.
    pub fn title(&self) -> &'static str {
        match self {
            PreviewError::Io { .. } => "Failed to read file.",
            PreviewError::Load(LoadError::Unparseable) => "Failed to load font.",
            PreviewError::Load(LoadError::NoFamily) => "No font family found.",
            PreviewError::Archive(ArchiveError::Invalid(_)) => "Invalid ZIP archive",
            PreviewError::Archive(ArchiveError::NoFontEntry) => "no fonts in here",
            PreviewError::Style(_) => "Invalid size",
            PreviewError::AltCode(_) => "Invalid alt code",
            PreviewError::Grid(_) => "Invalid layout",
            PreviewError::Config(_) => "Invalid configuration",
        }
    }

    /// Heading plus detail, ready to show to the user.
    pub fn user_message(&self) -> String {
        let detail = self.to_string();
        if detail.eq_ignore_ascii_case(self.title().trim_end_matches('.')) {
            detail
        } else {
            format!("{}\n{}", self.title(), detail)
        }
    }
}

#[derive(Debug)]
pub struct Previewer {
    registry: FontRegistry,
    state: StyleState,
    builder: PreviewGridBuilder,
    ranges: Vec<CodePointRange>,
    grid: PreviewGrid,
    sample: SampleText,
    source_name: Option<String>,
}

impl Previewer {
    /// A session with the default ranges and column count and no font.
    pub fn new(style: StyleParameters) -> Self {
        let builder = PreviewGridBuilder::new();
        Self {
            registry: FontRegistry::new(),
            state: StyleState::new(style),
            builder,
            ranges: default_ranges(),
            grid: PreviewGrid::empty(builder.columns(), style),
            sample: SampleText::default(),
            source_name: None,
        }
    }

    pub fn from_config(config: &PreviewConfig) -> Result<Self, PreviewError> {
        let builder = PreviewGridBuilder::with_columns(config.columns)?;
        Ok(Self::new(config.style()?).with_builder(builder))
    }

    /// Replace the previewed ranges, rebuilding right away if a font is active.
    pub fn with_ranges(mut self, ranges: Vec<CodePointRange>) -> Self {
        self.ranges = ranges;
        self.rebuild_now();
        self
    }

    pub fn with_builder(mut self, builder: PreviewGridBuilder) -> Self {
        self.builder = builder;
        self.rebuild_now();
        self
    }

    /// Load the font in `data`, or the first font of a zip archive when
    /// `file_name` names one.
    pub fn open_bytes(
        &mut self,
        data: Vec<u8>,
        file_name: &str,
    ) -> Result<&PreviewGrid, PreviewError> {
        let handle = if is_archive_file_name(file_name) {
            let extracted = first_font_entry(&data)?;
            drop(data);
            let hint = extracted.format_hint();
            self.registry.load_with_hint(extracted.data, hint)?
        } else {
            self.registry
                .load_with_hint(data, FontFormat::from_file_name(file_name))?
        };

        self.activate(handle, file_name);
        Ok(&self.grid)
    }

    /// Read and load a font or zip file from disk.
    pub fn open_path(&mut self, path: &Path) -> Result<&PreviewGrid, PreviewError> {
        let data = fs::read(path).map_err(|source| PreviewError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.open_bytes(data, &file_name)
    }

    fn activate(&mut self, handle: FontHandle, file_name: &str) {
        log::info!("Previewing '{}' from {}", handle.family(), file_name);
        self.state.set_font(handle);
        self.source_name = Some(file_name.to_string());
        self.refresh();
    }

    /// Run the pending rebuild, if any. Returns whether the grid was replaced.
    ///
    /// Without an active font the request is consumed and the grid stays the
    /// initial empty one.
    pub fn refresh(&mut self) -> bool {
        if !self.state.take_rebuild() {
            return false;
        }
        self.rebuild_now()
    }

    fn rebuild_now(&mut self) -> bool {
        let style = self.state.style();
        let Some(font) = self.state.font() else {
            self.grid = PreviewGrid::empty(self.builder.columns(), style);
            return false;
        };
        self.grid = self.builder.build(font, style, &self.ranges);
        true
    }

    pub fn set_size(&mut self, requested: i64) -> Result<bool, PreviewError> {
        let changed = self.state.set_size(requested)?;
        self.refresh();
        Ok(changed)
    }

    pub fn set_bold(&mut self, bold: bool) -> bool {
        let changed = self.state.set_bold(bold);
        self.refresh();
        changed
    }

    pub fn set_italic(&mut self, italic: bool) -> bool {
        let changed = self.state.set_italic(italic);
        self.refresh();
        changed
    }

    /// Direct access for batching several changes into one
    /// [`refresh`](Self::refresh).
    pub fn state_mut(&mut self) -> &mut StyleState {
        &mut self.state
    }

    pub fn state(&self) -> &StyleState {
        &self.state
    }

    pub fn grid(&self) -> &PreviewGrid {
        &self.grid
    }

    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    pub fn font_family(&self) -> Option<&str> {
        self.state.font().map(FontHandle::family)
    }

    /// File name the active font came from.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    pub fn sample(&self) -> &SampleText {
        &self.sample
    }

    pub fn sample_mut(&mut self) -> &mut SampleText {
        &mut self.sample
    }

    pub fn insert_alt_code(&mut self, code: &str) -> Result<char, PreviewError> {
        Ok(self.sample.insert_alt_code(code)?)
    }

    /// Sample text graphemes the active font cannot draw. Empty without a
    /// font.
    pub fn missing_sample_graphemes(&self) -> Vec<String> {
        match self.state.font() {
            Some(font) => self.sample.missing_graphemes(font, &self.state.style()),
            None => Vec::new(),
        }
    }
}

impl Default for Previewer {
    fn default() -> Self {
        Self::new(StyleParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_previewer_fonts::test_support::TestFontBuilder;

    #[test]
    fn test_titles_are_distinct() {
        let errors = [
            PreviewError::Load(LoadError::Unparseable),
            PreviewError::Load(LoadError::NoFamily),
            PreviewError::Archive(ArchiveError::Invalid("x".into())),
            PreviewError::Archive(ArchiveError::NoFontEntry),
            PreviewError::Style(StyleError::InvalidSize { requested: 0 }),
            PreviewError::AltCode(AltCodeError::Empty),
        ];
        let mut titles: Vec<&str> = errors.iter().map(PreviewError::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), errors.len());
    }

    #[test]
    fn test_user_message_does_not_repeat_itself() {
        let err = PreviewError::Archive(ArchiveError::NoFontEntry);
        assert_eq!(err.user_message(), "no fonts in here");

        let err = PreviewError::Load(LoadError::NoFamily);
        assert_eq!(err.user_message(), "no font family found");
    }

    #[test]
    fn test_no_font_means_empty_grid() {
        let mut previewer = Previewer::default();
        assert!(previewer.grid().is_empty());
        assert!(previewer.set_size(20).unwrap());
        assert!(previewer.set_bold(true));
        assert!(previewer.grid().is_empty());
        assert!(previewer.missing_sample_graphemes().is_empty());
        assert!(!previewer.state().needs_rebuild());
    }

    #[test]
    fn test_style_applies_once_font_arrives() {
        let mut previewer = Previewer::default();
        previewer.set_size(30).unwrap();
        previewer.set_italic(true);

        let bytes = TestFontBuilder::new("Later").with_range(32..127).build();
        previewer.open_bytes(bytes, "Later.ttf").unwrap();
        let style = previewer.grid().style();
        assert_eq!(style.point_size(), 30);
        assert!(style.italic);
        assert_eq!(previewer.source_name(), Some("Later.ttf"));
    }
}
