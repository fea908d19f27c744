//! Stemming step and stemmer implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::preprocess::document::{Document, split_words};
use crate::preprocess::step::{Step, map_tokens};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod porter;
pub mod snowball;

// Re-export stemmers
pub use porter::PorterStemmer;
pub use snowball::SnowballStemmer;

/// The stemmers a pipeline can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    /// The original Porter algorithm for English.
    Porter,
    /// The Snowball stemmer for German.
    German,
    /// The Snowball (Porter2) stemmer for English.
    English,
}

impl StemmerKind {
    /// Build the stemmer for this kind.
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Box::new(PorterStemmer::new()),
            StemmerKind::German => Box::new(SnowballStemmer::german()),
            StemmerKind::English => Box::new(SnowballStemmer::english()),
        }
    }
}

/// Step that stems every word.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        Self::of_kind(StemmerKind::Porter)
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Create a stem filter for a configured stemmer kind.
    pub fn of_kind(kind: StemmerKind) -> Self {
        StemFilter {
            stemmer: kind.build(),
        }
    }

    /// The name of the wrapped stemmer.
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for StemFilter {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.transform_tokens(&split_words(text)).join(" "))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, |token| self.stemmer.stem(token))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
