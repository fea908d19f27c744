//! Tokenizer steps for text preprocessing.
//!
//! Tokenizers turn a raw text document into a token sequence. Applied to a
//! document that is already tokenized, they re-split every token and flatten
//! the result, so later steps always see a single flat sequence.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace runs
//! - [`treebank::TreebankWordTokenizer`] - Penn Treebank word and punctuation segmentation
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries, punctuation dropped
//! - [`multi_word::MultiWordTokenizer`] - Merges known collocations into single tokens
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::document::Document;
//! use textprep::preprocess::step::Step;
//! use textprep::preprocess::tokenizer::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let doc = tokenizer.transform_string("Hello  world");
//! assert_eq!(doc, Document::tokens(["Hello", "world"]));
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

// Individual tokenizer modules
pub mod multi_word;
pub mod treebank;
pub mod unicode_word;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use multi_word::MultiWordTokenizer;
pub use treebank::TreebankWordTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

use crate::preprocess::step::Step;

/// The raw-text tokenizers a pipeline can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Penn Treebank word tokenizer.
    Word,
    /// Whitespace tokenizer.
    Whitespace,
    /// Unicode word-boundary tokenizer.
    Unicode,
}

impl TokenizerKind {
    /// Build the tokenizer step for this kind.
    pub fn build(self) -> Arc<dyn Step> {
        match self {
            TokenizerKind::Word => Arc::new(TreebankWordTokenizer::new()),
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerKind::Unicode => Arc::new(UnicodeWordTokenizer::new()),
        }
    }
}

/// Re-tokenize every token with `tokenize` and flatten the result.
pub(crate) fn retokenize<F>(tokens: &[String], tokenize: F) -> Vec<String>
where
    F: Fn(&str) -> Vec<String>,
{
    tokens.iter().flat_map(|token| tokenize(token)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_builds_tokenizers() {
        assert_eq!(TokenizerKind::Word.build().name(), "treebank");
        assert_eq!(TokenizerKind::Whitespace.build().name(), "whitespace");
        assert_eq!(TokenizerKind::Unicode.build().name(), "unicode_word");
        assert!(TokenizerKind::Word.build().is_tokenizer());
    }

    #[test]
    fn test_kind_deserialization() {
        let kind: TokenizerKind = serde_json::from_str("\"whitespace\"").unwrap();
        assert_eq!(kind, TokenizerKind::Whitespace);
    }
}
