//! Per-token normalization, filtering and substitution steps.
//!
//! These steps never change the representation of a document: raw text stays
//! raw text, tokens stay tokens. Steps that work word by word split raw text on
//! whitespace and re-join the result with single spaces, so callers that care
//! about the original spacing should tokenize first.
//!
//! # Available Steps
//!
//! - [`lowercase::ToLowercase`] - Converts text to lowercase
//! - [`stop::StopwordFilter`] - Removes stopwords
//! - [`stem::StemFilter`] - Reduces words to their stem
//! - [`regex::RegexSubstitution`] - Regex search and replace
//! - [`synonym::SimpleSynonyms`] - Exact-match synonym replacement
//! - [`context_synonym::ContextSynonyms`] - Synonym replacement licensed by nearby context words
//! - [`normalize`] - Text cleaning (whitespace, punctuation, URLs, accents, ...)
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::document::Document;
//! use textprep::preprocess::filter::ToLowercase;
//! use textprep::preprocess::step::Step;
//!
//! let step = ToLowercase::new();
//! assert_eq!(step.transform_string("Check ENGINE"), Document::text("check engine"));
//! ```

// Individual step modules
pub mod context_synonym;
pub mod lowercase;
pub mod normalize;
pub mod regex;
pub mod stem;
pub mod stop;
pub mod synonym;

// Re-export all steps for convenient access
pub use context_synonym::{ContextRule, ContextSynonyms, FoundFlagScope};
pub use lowercase::ToLowercase;
pub use normalize::{
    FixUnicode, NormalizeWhitespace, RemoveAccents, RemovePunctuation, ReplaceCurrencySymbols,
    ReplaceEmails, ReplaceNumbers, ReplacePhoneNumbers, ReplaceUrls, UnpackContractions,
    UnicodeForm,
};
pub use self::regex::RegexSubstitution;
pub use stem::{PorterStemmer, SnowballStemmer, StemFilter, Stemmer, StemmerKind};
pub use stop::StopwordFilter;
pub use synonym::SimpleSynonyms;
