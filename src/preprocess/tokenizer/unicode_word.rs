//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and keeps only the word
//! segments, so punctuation and whitespace disappear.
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::document::Document;
//! use textprep::preprocess::step::Step;
//! use textprep::preprocess::tokenizer::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let doc = tokenizer.transform_string("Hello, world!");
//! assert_eq!(doc, Document::tokens(["Hello", "world"]));
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::preprocess::document::Document;
use crate::preprocess::step::Step;
use crate::preprocess::tokenizer::retokenize;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    fn words(text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

impl Step for UnicodeWordTokenizer {
    fn transform_string(&self, text: &str) -> Document {
        Document::Tokens(Self::words(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        retokenize(tokens, Self::words)
    }

    fn is_tokenizer(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
