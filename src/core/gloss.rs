//! Transliteration glosses for attached particles.
//!
//! The lemma-to-gloss tables are finite, hand-curated dictionaries, not a
//! transliteration function: extending coverage means adding entries, either
//! in code or by merging a RON file such as the shipped `data/glosses.ron`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Lemma-to-gloss lookup tables for prefixed particles, keyed by the part of
/// speech of the prefix. Lookup is exact-match; a lemma with no entry simply
/// produces no gloss fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossTable {
    #[serde(default)]
    pub prepositions: FxHashMap<String, String>,
    #[serde(default)]
    pub conjunctions: FxHashMap<String, String>,
}

impl Default for GlossTable {
    /// The curated entries observed in corpus descriptions. Deliberately
    /// sparse: `bi` is NOT an entry, only the bare lemma `b` is.
    fn default() -> Self {
        let mut prepositions = FxHashMap::default();
        prepositions.insert("l".to_string(), "{lAm}".to_string());
        prepositions.insert("b".to_string(), "{bi}".to_string());

        let mut conjunctions = FxHashMap::default();
        conjunctions.insert("w".to_string(), "{wa} (and)".to_string());

        Self {
            prepositions,
            conjunctions,
        }
    }
}

impl GlossTable {
    /// A table with no entries at all.
    pub fn empty() -> Self {
        Self {
            prepositions: FxHashMap::default(),
            conjunctions: FxHashMap::default(),
        }
    }

    pub fn preposition(&self, lemma: &str) -> Option<&str> {
        self.prepositions.get(lemma).map(String::as_str)
    }

    pub fn conjunction(&self, lemma: &str) -> Option<&str> {
        self.conjunctions.get(lemma).map(String::as_str)
    }

    /// Load a gloss table from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<GlossTable, GlossError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a gloss table from a RON string.
    pub fn parse_ron(input: &str) -> Result<GlossTable, GlossError> {
        Ok(ron::from_str(input)?)
    }

    /// Merge another table into this one. Entries from `other` override
    /// entries in `self` with the same lemma.
    pub fn merge(&mut self, other: GlossTable) {
        for (lemma, gloss) in other.prepositions {
            self.prepositions.insert(lemma, gloss);
        }
        for (lemma, gloss) in other.conjunctions {
            self.conjunctions.insert(lemma, gloss);
        }
    }
}
