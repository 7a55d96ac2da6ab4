//! Terminal renderer configuration.

use serde::{Deserialize, Serialize};

use crate::glyphs::GlyphMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TermRenderConfig {
    pub glyph_mode: GlyphMode,
    /// Centre the chord name above the box.
    pub show_title: bool,
    /// Fret numbers left of each row.
    pub show_fret_labels: bool,
    /// Open-string note names under the box.
    pub show_notes: bool,
    /// Finger digits inside the box; plain dots otherwise.
    pub show_fingers: bool,
}

impl Default for TermRenderConfig {
    fn default() -> Self {
        Self {
            glyph_mode: GlyphMode::Unicode,
            show_title: true,
            show_fret_labels: true,
            show_notes: true,
            show_fingers: true,
        }
    }
}

impl TermRenderConfig {
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            glyph_mode: GlyphMode::Ascii,
            ..Self::default()
        }
    }

    /// Box only: no title, labels or notes.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            show_title: false,
            show_fret_labels: false,
            show_notes: false,
            ..Self::default()
        }
    }
}
