//! The unit-of-work abstraction of the preprocessing pipeline.
//!
//! Every step implements both a string transform and a token transform, so the
//! pipeline never has to know whether a tokenizer already ran: it just hands
//! each document to the operation matching its current representation.
//!
//! # Examples
//!
//! Implementing a custom step:
//!
//! ```
//! use textprep::preprocess::document::Document;
//! use textprep::preprocess::step::Step;
//!
//! struct Reverse;
//!
//! impl Step for Reverse {
//!     fn transform_string(&self, text: &str) -> Document {
//!         Document::Text(text.chars().rev().collect())
//!     }
//!
//!     fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
//!         tokens.iter().map(|t| t.chars().rev().collect()).collect()
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "reverse"
//!     }
//! }
//!
//! let docs = Reverse.transform(&[Document::text("abc"), Document::tokens(["xy"])]);
//! assert_eq!(docs, vec![Document::text("cba"), Document::tokens(["yx"])]);
//! ```

use crate::preprocess::document::{Corpus, Document};

/// Trait for preprocessing steps.
///
/// Steps hold their configuration (word lists, compiled patterns, window sizes)
/// from construction on and never mutate it, so one step can be shared across
/// threads and pipelines. The trait requires `Send + Sync` for that reason.
pub trait Step: Send + Sync {
    /// Transform a raw text document.
    ///
    /// Tokenizing steps return [`Document::Tokens`]; every other step returns
    /// [`Document::Text`].
    fn transform_string(&self, text: &str) -> Document;

    /// Transform an already tokenized document.
    fn transform_tokens(&self, tokens: &[String]) -> Vec<String>;

    /// Whether this step turns raw text into tokens.
    fn is_tokenizer(&self) -> bool {
        false
    }

    /// Get the name of this step (for logging and configuration).
    fn name(&self) -> &'static str;

    /// Transform a single document, dispatching on its representation.
    fn transform_document(&self, document: &Document) -> Document {
        match document {
            Document::Text(text) => self.transform_string(text),
            Document::Tokens(tokens) => Document::Tokens(self.transform_tokens(tokens)),
        }
    }

    /// Transform every document of a corpus, keeping corpus order.
    fn transform(&self, corpus: &[Document]) -> Corpus {
        corpus
            .iter()
            .map(|document| self.transform_document(document))
            .collect()
    }
}

/// Map every token through `f`, keeping length and order.
pub(crate) fn map_tokens<F>(tokens: &[String], f: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    tokens.iter().map(|token| f(token)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Step for Upper {
        fn transform_string(&self, text: &str) -> Document {
            Document::Text(text.to_uppercase())
        }

        fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
            map_tokens(tokens, |t| t.to_uppercase())
        }

        fn name(&self) -> &'static str {
            "upper"
        }
    }

    #[test]
    fn test_dispatch_on_representation() {
        let step = Upper;
        assert_eq!(
            step.transform_document(&Document::text("abc")),
            Document::text("ABC")
        );
        assert_eq!(
            step.transform_document(&Document::tokens(["a", "b"])),
            Document::tokens(["A", "B"])
        );
    }

    #[test]
    fn test_transform_preserves_order() {
        let corpus = vec![
            Document::text("first"),
            Document::text("second"),
            Document::text("third"),
        ];
        let result = Upper.transform(&corpus);

        assert_eq!(
            result,
            vec![
                Document::text("FIRST"),
                Document::text("SECOND"),
                Document::text("THIRD"),
            ]
        );
    }

    #[test]
    fn test_default_is_not_tokenizer() {
        assert!(!Upper.is_tokenizer());
        assert_eq!(Upper.name(), "upper");
    }
}
