//! Exact-match synonym replacement.

use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;
use crate::preprocess::document::{Document, split_words};
use crate::preprocess::resources::load_synonym_table;
use crate::preprocess::step::{Step, map_tokens};

/// A step replacing every token found in a synonym table.
///
/// Matching is case sensitive and whole-token only; tokens without an entry
/// pass through unchanged.
#[derive(Clone, Debug, Default)]
pub struct SimpleSynonyms {
    synonyms: AHashMap<String, String>,
}

impl SimpleSynonyms {
    /// Load a tab-separated synonym file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(SimpleSynonyms {
            synonyms: load_synonym_table(path)?,
        })
    }

    /// Build the table from `(word, replacement)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        SimpleSynonyms {
            synonyms: pairs
                .into_iter()
                .map(|(word, replacement)| (word.into(), replacement.into()))
                .collect(),
        }
    }

    /// Look up the replacement for a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.synonyms.get(word).map(String::as_str)
    }

    /// Number of words with a synonym.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

impl Step for SimpleSynonyms {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.transform_tokens(&split_words(text)).join(" "))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, |token| {
            self.get(token).unwrap_or(token).to_string()
        })
    }

    fn name(&self) -> &'static str {
        "synonyms"
    }
}
