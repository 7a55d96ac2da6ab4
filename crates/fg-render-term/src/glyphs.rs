//! Unicode box-drawing and ASCII fallback glyphs.

use serde::{Deserialize, Serialize};

/// Unicode box-drawing vs ASCII fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphMode {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordGlyphs {
    /// Fret wire between rows.
    pub horizontal: char,
    /// String with nothing pressed in this row.
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub t_down: char,
    pub t_right: char,
    pub t_left: char,
    pub cross: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub t_up: char,
    pub nut: char,
    pub nut_left: char,
    pub nut_right: char,
    pub nut_joint: char,
    /// Pressed string without a finger label.
    pub dot: char,
    /// Filler between strings held by a barre.
    pub barre: char,
}

impl ChordGlyphs {
    pub const UNICODE: Self = Self {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        t_down: '┬',
        t_right: '├',
        t_left: '┤',
        cross: '┼',
        bottom_left: '└',
        bottom_right: '┘',
        t_up: '┴',
        nut: '═',
        nut_left: '╒',
        nut_right: '╕',
        nut_joint: '╤',
        dot: '●',
        barre: '━',
    };

    pub const ASCII: Self = Self {
        horizontal: '-',
        vertical: '|',
        top_left: '+',
        top_right: '+',
        t_down: '+',
        t_right: '+',
        t_left: '+',
        cross: '+',
        bottom_left: '+',
        bottom_right: '+',
        t_up: '+',
        nut: '=',
        nut_left: '=',
        nut_right: '=',
        nut_joint: '=',
        dot: '*',
        barre: '=',
    };

    #[must_use]
    pub const fn for_mode(mode: GlyphMode) -> Self {
        match mode {
            GlyphMode::Unicode => Self::UNICODE,
            GlyphMode::Ascii => Self::ASCII,
        }
    }
}
