//! Variant selection: expand a chord name into all of its fingerings.

use rustc_hash::FxHashSet;

use crate::name::{ChordName, VARIANT_OPEN};

/// List every key that is a variant of `base`, lowest position first.
///
/// A key is a variant when it equals `base` or continues it with a position
/// group (`base(…`). Variants are ordered by fret, then version; the bare name
/// counts as fret 0, version 1. Equal keys keep their enumeration order.
/// An empty `base` matches nothing.
#[must_use]
pub fn list_variants<I, S>(base: &str, keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if base.is_empty() {
        return Vec::new();
    }

    let prefix = format!("{base}{VARIANT_OPEN}");
    let mut matched: Vec<String> = keys
        .into_iter()
        .filter(|key| {
            let key = key.as_ref();
            key == base || key.starts_with(&prefix)
        })
        .map(|key| key.as_ref().to_string())
        .collect();

    matched.sort_by_key(|name| ChordName::parse(name).sort_key());
    matched
}

/// Distinct base names in first-seen order.
#[must_use]
pub fn base_names<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut bases = Vec::new();
    for key in keys {
        let base = ChordName::parse(key.as_ref()).base;
        if !base.is_empty() && seen.insert(base.to_string()) {
            bases.push(base.to_string());
        }
    }
    bases
}
