//! Multi-word (collocation) tokenizer.
//!
//! Merges known multi-word phrases into single tokens. Phrases are stored in a
//! word trie; scanning the sequence left to right, the longest phrase starting
//! at the current position is merged and scanning resumes after it. Tokens that
//! start no phrase pass through unchanged.
//!
//! Running the tokenizer twice gives the same result as running it once: a
//! merged token contains the separator, and no phrase word may contain it, so a
//! merged token never starts or continues a phrase. The separator itself must be
//! non-empty and must not contain [`TOKEN_SEPARATOR`](crate::preprocess::document::TOKEN_SEPARATOR).
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::step::Step;
//! use textprep::preprocess::tokenizer::MultiWordTokenizer;
//!
//! let tokenizer = MultiWordTokenizer::from_phrases(["check engine", "check engine light"]);
//! let tokens: Vec<String> = ["the", "check", "engine", "light", "is", "on"]
//!     .iter()
//!     .map(|t| t.to_string())
//!     .collect();
//!
//! assert_eq!(
//!     tokenizer.transform_tokens(&tokens),
//!     vec!["the", "check engine light", "is", "on"]
//! );
//! ```

use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, TextprepError};
use crate::preprocess::document::{Document, ensure_no_token_separator, split_words};
use crate::preprocess::resources::load_collocations;
use crate::preprocess::step::Step;

/// Default separator placed between the words of a merged phrase.
pub const DEFAULT_SEPARATOR: &str = " ";

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: AHashMap<String, usize>,
    /// Whether a phrase ends at this node.
    terminal: bool,
}

/// A tokenizer that merges collocations into single tokens.
#[derive(Clone, Debug)]
pub struct MultiWordTokenizer {
    /// Node 0 is the root.
    nodes: Vec<TrieNode>,
    separator: String,
    phrase_count: usize,
}

impl Default for MultiWordTokenizer {
    fn default() -> Self {
        MultiWordTokenizer {
            nodes: vec![TrieNode::default()],
            separator: DEFAULT_SEPARATOR.to_string(),
            phrase_count: 0,
        }
    }
}

impl MultiWordTokenizer {
    /// Create a tokenizer without phrases, joining merges with `separator`.
    ///
    /// Fails if the separator is empty or contains [`TOKEN_SEPARATOR`](crate::preprocess::document::TOKEN_SEPARATOR).
    pub fn new<S: Into<String>>(separator: S) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(TextprepError::config("Collocation separator must not be empty"));
        }
        ensure_no_token_separator("Collocation separator", &separator)?;

        Ok(MultiWordTokenizer {
            separator,
            ..Self::default()
        })
    }

    /// Create a tokenizer from whitespace separated phrases, using the default separator.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokenizer = Self::default();
        // Whitespace-split words never contain the default separator.
        for phrase in phrases {
            tokenizer.insert(phrase.as_ref().split_whitespace().map(str::to_string).collect());
        }
        tokenizer
    }

    /// Load phrases from a collocation file, one phrase per line.
    pub fn from_file<P: AsRef<Path>, S: Into<String>>(path: P, separator: S) -> Result<Self> {
        let mut tokenizer = Self::new(separator)?;
        for phrase in load_collocations(path)? {
            tokenizer.add_phrase(phrase)?;
        }
        Ok(tokenizer)
    }

    /// Register a phrase given as a sequence of words. Empty phrases are ignored.
    ///
    /// Fails if a word contains the separator, since the merged token could
    /// then be merged again on a second pass.
    pub fn add_phrase<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(word) = words.iter().find(|word| word.contains(self.separator.as_str())) {
            return Err(TextprepError::config(format!(
                "Collocation word {word:?} contains the separator {:?}",
                self.separator
            )));
        }

        self.insert(words);
        Ok(())
    }

    fn insert(&mut self, words: Vec<String>) {
        let mut node = 0;
        let length = words.len();
        for word in words {
            node = match self.nodes[node].children.get(&word) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(word, child);
                    child
                }
            };
        }

        if length > 0 && !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.phrase_count += 1;
        }
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.phrase_count
    }

    /// Check if no phrase is registered.
    pub fn is_empty(&self) -> bool {
        self.phrase_count == 0
    }

    /// The separator used for merged phrases.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Length of the longest phrase starting at `start`, if any.
    fn longest_match(&self, tokens: &[String], start: usize) -> Option<usize> {
        let mut node = 0;
        let mut longest = None;

        for (offset, token) in tokens[start..].iter().enumerate() {
            match self.nodes[node].children.get(token) {
                Some(&child) => node = child,
                None => break,
            }
            if self.nodes[node].terminal {
                longest = Some(offset + 1);
            }
        }

        longest
    }

    /// Merge collocations in a token sequence.
    pub fn merge(&self, tokens: &[String]) -> Vec<String> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            match self.longest_match(tokens, i) {
                Some(length) => {
                    merged.push(tokens[i..i + length].join(self.separator.as_str()));
                    i += length;
                }
                None => {
                    merged.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        merged
    }
}

impl Step for MultiWordTokenizer {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.merge(&split_words(text)).join(" "))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        self.merge(tokens)
    }

    fn name(&self) -> &'static str {
        "multi_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_greedy_longest_match() {
        let tokenizer = MultiWordTokenizer::from_phrases(["check engine", "check engine light"]);
        let tokens = strings(&["the", "check", "engine", "light", "is", "on"]);

        assert_eq!(
            tokenizer.transform_tokens(&tokens),
            strings(&["the", "check engine light", "is", "on"])
        );
    }

    #[test]
    fn test_falls_back_to_shorter_phrase() {
        let tokenizer = MultiWordTokenizer::from_phrases(["a b", "a b c d"]);
        let tokens = strings(&["a", "b", "c", "x"]);

        assert_eq!(tokenizer.merge(&tokens), strings(&["a b", "c", "x"]));
    }

    #[test]
    fn test_idempotent() {
        let tokenizer = MultiWordTokenizer::from_phrases(["check engine", "engine light"]);
        let once = tokenizer.merge(&strings(&["check", "engine", "light"]));

        assert_eq!(once, strings(&["check engine", "light"]));
        assert_eq!(tokenizer.merge(&once), once);
    }

    #[test]
    fn test_custom_separator() {
        let mut tokenizer = MultiWordTokenizer::new("_").unwrap();
        tokenizer.add_phrase(["air", "bag"]).unwrap();

        assert_eq!(
            tokenizer.merge(&strings(&["the", "air", "bag", "deployed"])),
            strings(&["the", "air_bag", "deployed"])
        );
        assert_eq!(tokenizer.separator(), "_");
    }

    #[test]
    fn test_transform_string_rejoins() {
        let tokenizer = MultiWordTokenizer::from_phrases(["check engine"]);
        assert_eq!(
            tokenizer.transform_string("the  check engine light"),
            Document::text("the check engine light")
        );
    }

    #[test]
    fn test_phrase_bookkeeping() {
        let mut tokenizer = MultiWordTokenizer::default();
        assert!(tokenizer.is_empty());

        tokenizer.add_phrase(["check", "engine"]).unwrap();
        tokenizer.add_phrase(["check", "engine"]).unwrap();
        tokenizer.add_phrase(Vec::<String>::new()).unwrap();
        assert_eq!(tokenizer.len(), 1);
        assert!(!tokenizer.is_tokenizer());
    }

    #[test]
    fn test_separator_cannot_contain_token_separator() {
        let result = MultiWordTokenizer::new("\t");
        assert!(matches!(result, Err(TextprepError::Config(_))));

        let result = MultiWordTokenizer::new("");
        assert!(matches!(result, Err(TextprepError::Config(_))));
    }

    #[test]
    fn test_phrase_word_cannot_contain_separator() {
        let mut tokenizer = MultiWordTokenizer::new("_").unwrap();
        tokenizer.add_phrase(["a", "b"]).unwrap();

        let result = tokenizer.add_phrase(["a_b", "c"]);
        assert!(matches!(result, Err(TextprepError::Config(_))));
        assert_eq!(tokenizer.len(), 1);

        let once = tokenizer.merge(&strings(&["a", "b", "c"]));
        assert_eq!(once, strings(&["a_b", "c"]));
        assert_eq!(tokenizer.merge(&once), once);
    }

    #[test]
    fn test_empty_sequence() {
        let tokenizer = MultiWordTokenizer::from_phrases(["check engine"]);
        assert!(tokenizer.merge(&[]).is_empty());
    }
}
