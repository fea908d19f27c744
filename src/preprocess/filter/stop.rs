//! Stopword removal step.
//!
//! Removes common words that carry little meaning for clustering. Membership is
//! tested on the lowercased token, so `The` and `the` are both removed, while
//! the surviving tokens keep their original case.
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::filter::StopwordFilter;
//! use textprep::preprocess::step::Step;
//!
//! let filter = StopwordFilter::english();
//! let tokens: Vec<String> = ["The", "engine", "is", "on"].iter().map(|t| t.to_string()).collect();
//!
//! assert_eq!(filter.transform_tokens(&tokens), vec!["engine"]);
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::Result;
use crate::preprocess::document::{Document, split_words};
use crate::preprocess::resources::load_word_list;
use crate::preprocess::step::Step;

/// Default English stopword list.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Default English stopwords as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// A step that removes stopwords.
#[derive(Clone, Debug)]
pub struct StopwordFilter {
    /// Lowercased stopwords
    stop_words: Arc<HashSet<String>>,
}

impl StopwordFilter {
    /// Create a filter with the default English stopwords.
    pub fn english() -> Self {
        StopwordFilter {
            stop_words: Arc::clone(&ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Create a filter from a list of words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopwordFilter {
            stop_words: Arc::new(
                words
                    .into_iter()
                    .map(|word| word.as_ref().to_lowercase())
                    .collect(),
            ),
        }
    }

    /// Load stopwords from a file, one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_words(load_word_list(path)?))
    }

    /// Check if a word is a stopword, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl Step for StopwordFilter {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.transform_tokens(&split_words(text)).join(" "))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.is_stop_word(token))
            .cloned()
            .collect()
    }

    fn name(&self) -> &'static str {
        "stopwords"
    }
}
