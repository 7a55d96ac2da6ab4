#![forbid(unsafe_code)]

mod notes;

pub use notes::{CHROMATIC_SCALE, pitch_class, sounded_note};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default foreground color for lines, dots and labels.
pub const DEFAULT_COLOR: &str = "#000000";
/// Default background color, also used for labels drawn inside finger dots.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
/// Default color for muted strings and their markers.
pub const DEFAULT_MUTED_STRING_COLOR: &str = "#D70040";
/// Highest fret a token may name; larger numbers are malformed.
pub const MAX_FRET: u32 = 36;
/// Standard guitar tuning, lowest-pitched string first.
pub const STANDARD_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ChordErrorCode {
    #[default]
    MissingName,
    UnknownChord,
}

impl ChordErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingName => "chord/error/missing-name",
            Self::UnknownChord => "chord/error/unknown-chord",
        }
    }
}

/// User-visible conditions that stop a chord from being drawn.
///
/// Neither is fatal: hosts render the message in place of the diagram.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq, Eq)]
pub enum ChordError {
    #[error("Missing mandatory attribute \"name\"")]
    MissingName,
    #[error("Missing built-in chord definition for chord {name}")]
    UnknownChord { name: String },
}

impl ChordError {
    #[must_use]
    pub fn code(&self) -> ChordErrorCode {
        match self {
            Self::MissingName => ChordErrorCode::MissingName,
            Self::UnknownChord { .. } => ChordErrorCode::UnknownChord,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ChordWarningCode {
    #[default]
    MalformedToken,
}

impl ChordWarningCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedToken => "chord/warn/malformed-token",
        }
    }
}

/// A recoverable data-quality issue found while parsing an encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChordWarning {
    pub code: ChordWarningCode,
    pub message: String,
    pub chord: String,
    pub token: String,
    pub string_index: usize,
}

impl ChordWarning {
    #[must_use]
    pub fn malformed_token(chord: &str, token: &str, string_index: usize) -> Self {
        Self {
            code: ChordWarningCode::MalformedToken,
            message: format!(
                "Invalid string pattern {token:?} at string {string_index} of chord {chord:?}"
            ),
            chord: chord.to_string(),
            token: token.to_string(),
            string_index,
        }
    }
}

/// The finger label drawn inside a finger dot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(into = "FingerRepr", try_from = "FingerRepr")]
pub enum Finger {
    /// No label; used for open strings and unlabelled frets.
    #[default]
    None,
    /// Finger index 1 (index finger) through 4 (little finger).
    Digit(u8),
    Thumb,
}

impl Finger {
    /// Parse a single finger character (`1`..`4`, `T`, `t`).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='4' => c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self::Digit),
            'T' | 't' => Some(Self::Thumb),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether this is the index finger, the one that holds a barre.
    #[must_use]
    pub const fn is_index(self) -> bool {
        matches!(self, Self::Digit(1))
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Digit(d) => write!(f, "{d}"),
            Self::Thumb => f.write_str("T"),
        }
    }
}

/// Serialized form of [`Finger`]: `0` for none, `1`..`4`, or `"T"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum FingerRepr {
    Number(u8),
    Text(String),
}

impl From<Finger> for FingerRepr {
    fn from(value: Finger) -> Self {
        match value {
            Finger::None => Self::Number(0),
            Finger::Digit(d) => Self::Number(d),
            Finger::Thumb => Self::Text(String::from("T")),
        }
    }
}

impl TryFrom<FingerRepr> for Finger {
    type Error = String;

    fn try_from(value: FingerRepr) -> Result<Self, Self::Error> {
        match value {
            FingerRepr::Number(0) => Ok(Self::None),
            FingerRepr::Number(d @ 1..=4) => Ok(Self::Digit(d)),
            FingerRepr::Number(d) => Err(format!("finger index out of range: {d}")),
            FingerRepr::Text(text) if text.eq_ignore_ascii_case("t") => Ok(Self::Thumb),
            FingerRepr::Text(text) => Err(format!("unknown finger label: {text}")),
        }
    }
}

/// Fret and finger of one physical string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct StringState {
    /// `None` when muted, `Some(0)` when open.
    pub fret: Option<u32>,
    pub finger: Finger,
}

impl StringState {
    #[must_use]
    pub const fn muted() -> Self {
        Self {
            fret: None,
            finger: Finger::None,
        }
    }

    #[must_use]
    pub const fn open() -> Self {
        Self {
            fret: Some(0),
            finger: Finger::None,
        }
    }

    #[must_use]
    pub const fn fretted(fret: u32, finger: Finger) -> Self {
        Self {
            fret: Some(fret),
            finger,
        }
    }

    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.fret.is_none()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.fret, Some(0))
    }

    /// The pressed fret, if the string is neither muted nor open.
    #[must_use]
    pub const fn pressed_fret(&self) -> Option<u32> {
        match self.fret {
            Some(fret) if fret > 0 => Some(fret),
            _ => None,
        }
    }
}

/// Parsed chord shape plus the window of frets a diagram must show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrettingModel {
    /// Absolute fret number of the first visible row (1 = nut).
    pub start_fret: u32,
    pub visible_fret_count: u32,
    pub strings: Vec<StringState>,
}

impl FrettingModel {
    pub const MIN_VISIBLE_FRETS: u32 = 3;

    /// Build a model and derive its fret window from the pressed frets.
    #[must_use]
    pub fn from_strings(strings: Vec<StringState>) -> Self {
        let (min_fret, max_fret) = fret_span(&strings);
        let visible_fret_count = Self::MIN_VISIBLE_FRETS.max(max_fret - min_fret + 1);
        let start_fret = (max_fret + 1).saturating_sub(visible_fret_count).max(1);
        Self {
            start_fret,
            visible_fret_count,
            strings,
        }
    }

    /// Lowest pressed fret, or 0 when nothing is pressed.
    #[must_use]
    pub fn min_fret(&self) -> u32 {
        fret_span(&self.strings).0
    }

    /// Highest pressed fret, or 0 when nothing is pressed.
    #[must_use]
    pub fn max_fret(&self) -> u32 {
        fret_span(&self.strings).1
    }

    /// Absolute fret number of the last visible row.
    #[must_use]
    pub fn end_fret(&self) -> u32 {
        self.start_fret + self.visible_fret_count - 1
    }

    /// Zero-based row index of an absolute fret, if it falls in the window.
    #[must_use]
    pub fn row_of(&self, fret: u32) -> Option<u32> {
        (self.start_fret..=self.end_fret())
            .contains(&fret)
            .then(|| fret - self.start_fret)
    }

    /// The index-finger barre, when the index finger presses two or more
    /// strings. It sits on the lowest fret the index finger holds.
    #[must_use]
    pub fn barre(&self) -> Option<Barre> {
        let mut span: Option<Barre> = None;
        for (index, string) in self.strings.iter().enumerate() {
            let Some(fret) = string.pressed_fret() else {
                continue;
            };
            if !string.finger.is_index() {
                continue;
            }
            span = Some(match span {
                None => Barre {
                    fret,
                    first_string: index,
                    last_string: index,
                },
                Some(barre) => Barre {
                    fret: barre.fret.min(fret),
                    first_string: barre.first_string,
                    last_string: index,
                },
            });
        }
        span.filter(|barre| barre.first_string != barre.last_string)
    }
}

/// Strings joined by one index finger, by position in the encoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Barre {
    pub fret: u32,
    pub first_string: usize,
    pub last_string: usize,
}

impl Default for FrettingModel {
    fn default() -> Self {
        Self::from_strings(Vec::new())
    }
}

fn fret_span(strings: &[StringState]) -> (u32, u32) {
    let mut pressed = strings.iter().filter_map(StringState::pressed_fret);
    let Some(first) = pressed.next() else {
        return (0, 0);
    };
    pressed.fold((first, first), |(min, max), fret| {
        (min.min(fret), max.max(fret))
    })
}

/// Colors applied to a chord diagram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChordStyle {
    pub color: String,
    pub background_color: String,
    pub muted_string_color: String,
}

impl Default for ChordStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            muted_string_color: DEFAULT_MUTED_STRING_COLOR.to_string(),
        }
    }
}

/// Open-string note names, in the same order as encoding tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Tuning {
    notes: Vec<String>,
}

impl Tuning {
    #[must_use]
    pub fn new<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            notes: notes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_TUNING)
    }

    /// Open note of a string, if the tuning names one.
    #[must_use]
    pub fn note(&self, string_index: usize) -> Option<&str> {
        self.notes.get(string_index).map(String::as_str)
    }

    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Note sounded by a string at the given fret (see [`sounded_note`]).
    #[must_use]
    pub fn sounded_note(&self, string_index: usize, fret: Option<u32>) -> Option<String> {
        self.note(string_index)
            .and_then(|open_note| sounded_note(open_note, fret))
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Tuning {
    type Err = std::convert::Infallible;

    /// Parse a `|`-separated note list such as `E|A|D|G|B|E`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split('|').map(str::trim)))
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notes.join("|"))
    }
}
