//! Chord name convention.
//!
//! A dictionary key is either a bare chord name (`Cmaj7`) or a chord name
//! followed by a position group: `Cmaj7(5)` for the shape at fret 5, and
//! `Cmaj7(5)2` for the second alternative at that fret. The version may also
//! sit inside the group as `Cmaj7(5-2)`.

use serde::Serialize;

/// Opens a position group in a chord name.
pub const VARIANT_OPEN: char = '(';
/// Closes a position group in a chord name.
pub const VARIANT_CLOSE: char = ')';

/// A chord name split into its base and optional position group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordName<'a> {
    pub base: &'a str,
    pub position: Option<u32>,
    pub version: Option<u32>,
}

impl<'a> ChordName<'a> {
    /// Split a name on its last well-formed position group.
    ///
    /// Names without one (or whose group is not `(<digits>[-<digits>])`)
    /// are returned whole as the base. Digits right after the group are the
    /// version; any other trailing text is ignored.
    #[must_use]
    pub fn parse(name: &'a str) -> Self {
        for (open, _) in name.match_indices(VARIANT_OPEN).rev() {
            if open == 0 {
                break;
            }
            if let Some((position, version)) = parse_group(&name[open + 1..]) {
                return Self {
                    base: &name[..open],
                    position: Some(position),
                    version,
                };
            }
        }

        Self {
            base: name,
            position: None,
            version: None,
        }
    }

    /// Sort key used to order variants: fret, then version.
    #[must_use]
    pub fn sort_key(&self) -> VariantKey {
        VariantKey {
            fret: self.position.unwrap_or(0),
            version: self.version.unwrap_or(1),
        }
    }
}

/// Position of a variant on the neck; orders lowest fret first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VariantKey {
    pub fret: u32,
    pub version: u32,
}

/// Parse `<digits>[-<digits>])[<digits>]` at the start of `rest`.
fn parse_group(rest: &str) -> Option<(u32, Option<u32>)> {
    let close = rest.find(VARIANT_CLOSE)?;
    let inner = &rest[..close];
    let (position, version) = match inner.split_once('-') {
        Some((position, version)) => (position, Some(version)),
        None => (inner, None),
    };

    let position = parse_digits(position)?;
    let version = match version {
        Some(version) => Some(parse_digits(version)?),
        None => None,
    };

    let after = &rest[close + VARIANT_CLOSE.len_utf8()..];
    let digits = after.bytes().take_while(u8::is_ascii_digit).count();
    let version = match parse_digits(&after[..digits]) {
        Some(suffix) => Some(suffix),
        None => version,
    };
    Some((position, version))
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
