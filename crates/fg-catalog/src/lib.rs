#![forbid(unsafe_code)]

//! Chord lookup: the name → encoding dictionary, the chord naming convention,
//! variant selection, and resolution of render requests into parsed models.

mod dictionary;
mod name;
mod variants;

pub use dictionary::{ChordDictionary, ChordEntry, DictionaryError};
pub use name::{ChordName, VARIANT_CLOSE, VARIANT_OPEN, VariantKey};
pub use variants::{base_names, list_variants};

use fg_core::{ChordError, ChordStyle, Tuning};
use fg_parser::{ParseResult, parse_named};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a host supplies to draw one chord.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChordRequest {
    /// Chord name; shown as the diagram title and used for dictionary lookup.
    pub name: String,
    /// Explicit encoding. When set and non-empty it replaces the dictionary entry.
    pub encoding: Option<String>,
    pub style: ChordStyle,
    pub tuning: Tuning,
}

impl ChordRequest {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChordStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// The same request for another chord name, keeping style and tuning.
    #[must_use]
    pub fn for_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoding: None,
            style: self.style.clone(),
            tuning: self.tuning.clone(),
        }
    }
}

/// A request whose encoding has been found and parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChord {
    pub name: String,
    pub encoding: String,
    pub parsed: ParseResult,
}

/// Find the encoding for a request and parse it.
///
/// Fails with [`ChordError::MissingName`] for an empty name and with
/// [`ChordError::UnknownChord`] when neither the request nor the dictionary
/// supplies a non-empty encoding.
pub fn resolve(
    request: &ChordRequest,
    dictionary: &ChordDictionary,
) -> Result<ResolvedChord, ChordError> {
    if request.name.is_empty() {
        return Err(ChordError::MissingName);
    }

    let encoding = request
        .encoding
        .as_deref()
        .filter(|encoding| !encoding.is_empty())
        .or_else(|| dictionary.get(&request.name))
        .filter(|encoding| !encoding.is_empty())
        .ok_or_else(|| ChordError::UnknownChord {
            name: request.name.clone(),
        })?;

    debug!("Resolved chord {:?} to encoding {encoding:?}", request.name);

    Ok(ResolvedChord {
        name: request.name.clone(),
        encoding: encoding.to_string(),
        parsed: parse_named(&request.name, encoding),
    })
}
