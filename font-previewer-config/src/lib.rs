//! Configuration system for font-previewer.
//!
//! This crate provides the plain data shared by the loader, the coverage probe
//! and the grid builder:
//!
//! - `StyleParameters`: point size, bold and italic, with core-level validation
//! - `CodePointRange`: half-open ranges of Unicode scalar values to preview,
//!   plus the default range set
//! - `PreviewConfig`: YAML configuration with defaults for every field

pub mod config;
pub mod defaults;
pub mod error;
pub mod ranges;
pub mod style;
mod types;

// Re-export main types for convenience
pub use config::PreviewConfig;
pub use error::ConfigError;
pub use ranges::{CodePointRange, default_ranges, printable_ascii};
pub use style::{StyleError, StyleParameters};
pub use types::LogLevel;
