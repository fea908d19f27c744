//! Snowball stemmers backed by `rust-stemmers`.

use std::fmt;

use rust_stemmers::Algorithm;

use crate::preprocess::filter::stem::Stemmer;

/// A Snowball stemmer for one language.
///
/// Words are lowercased before stemming, since the Snowball rules only match
/// lowercase letters.
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
    name: &'static str,
}

impl SnowballStemmer {
    /// Create the German Snowball stemmer.
    pub fn german() -> Self {
        SnowballStemmer {
            stemmer: rust_stemmers::Stemmer::create(Algorithm::German),
            name: "german",
        }
    }

    /// Create the English (Porter2) Snowball stemmer.
    pub fn english() -> Self {
        SnowballStemmer {
            stemmer: rust_stemmers::Stemmer::create(Algorithm::English),
            name: "english",
        }
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.name)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
