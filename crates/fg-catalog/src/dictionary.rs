//! Chord dictionary: an ordered, read-only map from chord name to encoding.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::variants::list_variants;

const BUILTIN_JSON: &str = include_str!("../data/chords.json");

static BUILTIN: LazyLock<ChordDictionary> = LazyLock::new(|| {
    ChordDictionary::from_json_str(BUILTIN_JSON).unwrap_or_else(|err| {
        error!("Built-in chord dictionary failed to load: {err}");
        ChordDictionary::new()
    })
});

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid JSON chord dictionary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML chord dictionary: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to read chord dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One dictionary record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChordEntry {
    pub name: String,
    pub encoding: String,
}

impl ChordEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoding: encoding.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChordDictionary {
    entries: Vec<ChordEntry>,
    index: FxHashMap<String, usize>,
}

impl ChordDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionary shipped with the crate, loaded on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a dictionary from entries in enumeration order.
    ///
    /// A repeated name keeps its first position and takes the later encoding.
    #[must_use]
    pub fn from_entries<I: IntoIterator<Item = ChordEntry>>(entries: I) -> Self {
        let mut dictionary = Self::new();
        for entry in entries {
            dictionary.insert(entry);
        }
        dictionary
    }

    /// Parse a JSON list of `{ "name": …, "encoding": … }` records.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<ChordEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Parse a YAML list of `{ name: …, encoding: … }` records.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<ChordEntry> = serde_yaml::from_str(yaml)?;
        Ok(Self::from_entries(entries))
    }

    /// Load a dictionary file; `.yaml`/`.yml` files are read as YAML, anything
    /// else as JSON.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    fn insert(&mut self, entry: ChordEntry) {
        if let Some(&existing) = self.index.get(&entry.name) {
            warn!(
                chord = entry.name.as_str(),
                "Duplicate chord name in dictionary; later encoding wins"
            );
            self.entries[existing].encoding = entry.encoding;
            return;
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Encoding for a chord name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].encoding.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chord names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    #[must_use]
    pub fn entries(&self) -> &[ChordEntry] {
        &self.entries
    }

    /// All variants of `base` in this dictionary, lowest position first.
    #[must_use]
    pub fn variants(&self, base: &str) -> Vec<String> {
        list_variants(base, self.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_dictionary_loads_with_known_chords() {
        let dictionary = ChordDictionary::builtin();
        assert!(dictionary.len() > 400);
        assert_eq!(dictionary.get("C"), Some("x|3-3|2-2|o|1-1|o"));
        assert_eq!(dictionary.get("Am"), Some("x|o|2-2|2-3|1-1|o"));
        assert_eq!(dictionary.get("H"), None);
    }

    #[test]
    fn builtin_variants_of_c_start_with_open_shape() {
        let variants = ChordDictionary::builtin().variants("C");
        assert_eq!(variants.first().map(String::as_str), Some("C"));
        assert!(variants.len() > 1);
        assert!(variants.iter().all(|name| name == "C" || name.starts_with("C(")));
    }

    #[test]
    fn duplicate_names_keep_position_and_take_later_encoding() {
        let dictionary = ChordDictionary::from_entries([
            ChordEntry::new("G", "3-2|2-1|o|o|o|3-3"),
            ChordEntry::new("E", "o|2-2|2-3|1-1|o|o"),
            ChordEntry::new("G", "3-2|2-1|o|o|3-3|3-4"),
        ]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.names().collect::<Vec<_>>(), vec!["G", "E"]);
        assert_eq!(dictionary.get("G"), Some("3-2|2-1|o|o|3-3|3-4"));
    }

    #[test]
    fn parses_json_and_yaml() {
        let json = r#"[{"name":"A","encoding":"x|o|2-1|2-2|2-3|o"}]"#;
        let dictionary = ChordDictionary::from_json_str(json).expect("valid json");
        assert_eq!(dictionary.get("A"), Some("x|o|2-1|2-2|2-3|o"));

        let yaml = "- name: Em\n  encoding: o|2-2|2-3|o|o|o\n";
        let dictionary = ChordDictionary::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(dictionary.get("Em"), Some("o|2-2|2-3|o|o|o"));

        assert!(matches!(
            ChordDictionary::from_json_str("{"),
            Err(DictionaryError::Json(_))
        ));
    }

    #[test]
    fn loads_from_path_by_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .expect("create temp file");
        writeln!(file, "- name: D\n  encoding: x|x|o|2-1|3-3|2-2").expect("write yaml");
        let dictionary = ChordDictionary::from_path(file.path()).expect("load yaml file");
        assert_eq!(dictionary.get("D"), Some("x|x|o|2-1|3-3|2-2"));

        let missing = ChordDictionary::from_path(Path::new("/nonexistent/chords.json"));
        assert!(matches!(missing, Err(DictionaryError::Io { .. })));
    }
}
