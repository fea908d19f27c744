//! Whitespace tokenizer implementation.

use crate::preprocess::document::{Document, split_words};
use crate::preprocess::step::Step;
use crate::preprocess::tokenizer::retokenize;

/// A tokenizer that splits text on runs of whitespace.
///
/// Re-running it over tokens is a no-op unless a token contains embedded
/// whitespace, which it then splits.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Step for WhitespaceTokenizer {
    fn transform_string(&self, text: &str) -> Document {
        Document::Tokens(split_words(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        retokenize(tokens, split_words)
    }

    fn is_tokenizer(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
