//! Read-only preview configuration.
//!
//! The configuration file is optional YAML; every field falls back to the
//! matching `crate::defaults` function. Nothing is ever written back.

use crate::error::ConfigError;
use crate::style::StyleParameters;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Point size of rendered glyph cells (1..=500)
    #[serde(default = "crate::defaults::point_size")]
    pub point_size: u32,

    /// Render glyph cells bold
    #[serde(default = "crate::defaults::bold")]
    pub bold: bool,

    /// Render glyph cells italic
    #[serde(default = "crate::defaults::italic")]
    pub italic: bool,

    /// Code points per visual row of the grid
    #[serde(default = "crate::defaults::columns")]
    pub columns: usize,

    /// Point size of the reference label cells
    #[serde(default = "crate::defaults::reference_point_size")]
    pub reference_point_size: u32,

    /// Folder listed on startup; `None` resolves to the documents font folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_folder: Option<PathBuf>,

    /// Debug log verbosity; `RUST_LOG` and `--log-level` take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            point_size: crate::defaults::point_size(),
            bold: crate::defaults::bold(),
            italic: crate::defaults::italic(),
            columns: crate::defaults::columns(),
            reference_point_size: crate::defaults::reference_point_size(),
            font_folder: None,
            log_level: None,
        }
    }
}

impl PreviewConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: PreviewConfig = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, size) in [
            ("point_size", self.point_size),
            ("reference_point_size", self.reference_point_size),
        ] {
            if StyleParameters::validate_point_size(i64::from(size)).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{field} must be between {} and {}, got {size}",
                    StyleParameters::MIN_POINT_SIZE,
                    StyleParameters::MAX_POINT_SIZE
                )));
            }
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation(
                "columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial style parameters derived from this configuration.
    pub fn style(&self) -> Result<StyleParameters, ConfigError> {
        StyleParameters::new(i64::from(self.point_size), self.bold, self.italic)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// The folder to list, resolving the documents default when unset.
    pub fn effective_font_folder(&self) -> PathBuf {
        self.font_folder
            .clone()
            .unwrap_or_else(crate::defaults::font_folder)
    }

    pub fn with_point_size(mut self, point_size: u32) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }
}
