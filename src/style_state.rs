//! Current style parameters and active font.
//!
//! Setters never rebuild anything themselves. A setter that changes an
//! observable value raises a single pending-rebuild flag; any number of
//! changes before the consumer calls [`StyleState::take_rebuild`] collapse
//! into one rebuild using the latest values.

use font_previewer_config::{StyleError, StyleParameters};
use font_previewer_fonts::FontHandle;

#[derive(Debug, Default)]
pub struct StyleState {
    style: StyleParameters,
    font: Option<FontHandle>,
    rebuild_pending: bool,
}

impl StyleState {
    pub fn new(style: StyleParameters) -> Self {
        Self {
            style,
            font: None,
            rebuild_pending: false,
        }
    }

    pub fn style(&self) -> StyleParameters {
        self.style
    }

    pub fn font(&self) -> Option<&FontHandle> {
        self.font.as_ref()
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Set the point size.
    ///
    /// A rejected size leaves the previous size in place and schedules
    /// nothing. Returns whether the size changed.
    pub fn set_size(&mut self, requested: i64) -> Result<bool, StyleError> {
        let changed = self.style.set_point_size(requested).inspect_err(|e| {
            log::debug!("Rejected size change: {}", e);
        })?;
        self.mark_if(changed);
        Ok(changed)
    }

    pub fn set_bold(&mut self, bold: bool) -> bool {
        let changed = self.style.bold != bold;
        self.style.bold = bold;
        self.mark_if(changed)
    }

    pub fn set_italic(&mut self, italic: bool) -> bool {
        let changed = self.style.italic != italic;
        self.style.italic = italic;
        self.mark_if(changed)
    }

    /// Make `font` the active font.
    ///
    /// The previous handle is dropped here, which releases its registration.
    /// A new font always counts as a change.
    pub fn set_font(&mut self, font: FontHandle) -> bool {
        if let Some(previous) = self.font.replace(font) {
            log::debug!("Releasing previous font '{}'", previous.family());
        }
        self.mark_if(true)
    }

    /// Whether a change is waiting for a rebuild.
    pub fn needs_rebuild(&self) -> bool {
        self.rebuild_pending
    }

    /// Consume the pending rebuild request, if any.
    pub fn take_rebuild(&mut self) -> bool {
        std::mem::take(&mut self.rebuild_pending)
    }

    fn mark_if(&mut self, changed: bool) -> bool {
        if changed {
            self.rebuild_pending = true;
        }
        changed
    }
}
