//! Document representations that flow through the preprocessing pipeline.
//!
//! A document starts as raw text. Once a tokenizing step has run, every later
//! step sees it as an ordered sequence of tokens instead. Within a corpus all
//! documents share one representation at any stage, because every step is
//! applied to every document.
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::document::{Document, TOKEN_SEPARATOR};
//!
//! let doc = Document::tokens(["check engine", "light"]);
//! assert_eq!(doc.to_vectorizer_string(), format!("check engine{TOKEN_SEPARATOR}light"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextprepError};

/// Separator placed between tokens when a tokenized document is handed to the
/// vectorizer.
///
/// Whitespace and word tokenizers never leave a tab inside a token, while merged
/// collocations may legitimately contain spaces, so the vectorizer splits on this
/// exact character instead of on whitespace.
pub const TOKEN_SEPARATOR: char = '\t';

/// One record's text content, either raw or tokenized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Document {
    /// Raw text, before any tokenizer ran.
    Text(String),
    /// Ordered tokens; duplicates allowed.
    Tokens(Vec<String>),
}

/// An ordered batch of documents. Position `i` always refers to input row `i`.
pub type Corpus = Vec<Document>;

impl Document {
    /// Create a raw text document.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Document::Text(text.into())
    }

    /// Create a tokenized document.
    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// Whether this document has been tokenized.
    pub fn is_tokenized(&self) -> bool {
        matches!(self, Document::Tokens(_))
    }

    /// The raw text, if the document has not been tokenized.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Document::Text(text) => Some(text),
            Document::Tokens(_) => None,
        }
    }

    /// The tokens, if the document has been tokenized.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Document::Text(_) => None,
            Document::Tokens(tokens) => Some(tokens),
        }
    }

    /// Check if the document has no content (empty text or zero tokens).
    pub fn is_empty(&self) -> bool {
        match self {
            Document::Text(text) => text.is_empty(),
            Document::Tokens(tokens) => tokens.is_empty(),
        }
    }

    /// Flatten the document into the string handed to the vectorizer.
    ///
    /// Raw text is returned unchanged; tokens are joined with [`TOKEN_SEPARATOR`].
    pub fn to_vectorizer_string(&self) -> String {
        match self {
            Document::Text(text) => text.clone(),
            Document::Tokens(tokens) => tokens.join(TOKEN_SEPARATOR.to_string().as_str()),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Text(text) => write!(f, "{text}"),
            Document::Tokens(tokens) => write!(f, "{}", tokens.join(" ")),
        }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::Text(text.to_string())
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::Text(text)
    }
}

impl From<Vec<String>> for Document {
    fn from(tokens: Vec<String>) -> Self {
        Document::Tokens(tokens)
    }
}

/// Build a corpus of raw text documents.
pub fn corpus_from_texts<I, S>(texts: I) -> Corpus
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts.into_iter().map(|t| Document::Text(t.into())).collect()
}

/// Split a string on whitespace into owned tokens.
pub(crate) fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Reject step text that would put [`TOKEN_SEPARATOR`] inside a token.
pub(crate) fn ensure_no_token_separator(what: &str, value: &str) -> Result<()> {
    if value.contains(TOKEN_SEPARATOR) {
        return Err(TextprepError::config(format!(
            "{what} {value:?} contains the reserved token separator {TOKEN_SEPARATOR:?}"
        )));
    }
    Ok(())
}
