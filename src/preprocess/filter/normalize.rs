//! Text cleaning steps applied before or after tokenization.
//!
//! On the token path every step works on each token independently. Steps that
//! can reduce a token to nothing ([`RemovePunctuation`]) drop it; the others
//! keep the sequence length.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::Result;
use crate::preprocess::document::{Document, ensure_no_token_separator};
use crate::preprocess::step::{Step, map_tokens};

fn pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in cleaning pattern should be valid")
}

static LINEBREAK: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?:\r\n|[\n\x0B])+"));
static NON_BREAKING_SPACE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[^\S\n]+"));
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| pattern(r"\p{P}+"));
static URL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"(?i)(?:\b(?:https?|ftp)://|\bwww\.)[^\s<>"']+"#));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b"));
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?:\+?\b1[-.\s]?)?(?:\(\d{3}\)\s?|\b\d{3}[-.\s]?)\d{3}[-.\s]?\d{4}\b")
});
static NUMBER: LazyLock<Regex> = LazyLock::new(|| pattern(r"[+-]?\b\d+(?:[.,]\d+)*\b"));
static CURRENCY_SYMBOL: LazyLock<Regex> = LazyLock::new(|| pattern(r"\p{Sc}"));

/// English contractions and their expansions, applied in order.
static CONTRACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            pattern(
                r"\b([Aa]re|[Cc]ould|[Dd]id|[Dd]oes|[Dd]o|[Hh]ad|[Hh]as|[Hh]ave|[Ii]s|[Mm]ight|[Mm]ust|[Ss]hould|[Ww]ere|[Ww]ould)n't",
            ),
            "${1} not",
        ),
        (
            pattern(r"\b([Hh]e|[Ii]|[Ss]he|[Tt]hey|[Ww]e|[Ww]hat|[Ww]ho|[Yy]ou)'ll"),
            "${1} will",
        ),
        (pattern(r"\b([Tt]hey|[Ww]e|[Ww]hat|[Ww]ho|[Yy]ou)'re"), "${1} are"),
        (
            pattern(r"\b([Ii]|[Ss]hould|[Tt]hey|[Ww]e|[Ww]hat|[Ww]ho|[Ww]ould|[Yy]ou)'ve"),
            "${1} have",
        ),
        (pattern(r"\b([Ii]|[Hh]e|[Ss]he|[Tt]hey|[Ww]e|[Yy]ou)'d"), "${1} would"),
        (pattern(r"\b([Cc]a)n't"), "${1}n not"),
        (pattern(r"\b([Ii])'m"), "${1} am"),
        (pattern(r"\b([Ll]et)'s"), "${1} us"),
        (pattern(r"\b([Ww])on't"), "${1}ill not"),
        (pattern(r"\b([Ss])han't"), "${1}hall not"),
        (pattern(r"\b([Yy])(?:'all|a'll)"), "${1}ou all"),
    ]
});

/// Replace every match of `regex` with the literal `replacement`.
fn replace_literal(regex: &Regex, text: &str, replacement: &str) -> String {
    regex.replace_all(text, NoExpand(replacement)).into_owned()
}

/// Collapses runs of spaces to a single space and runs of line breaks to a
/// single newline, then trims both ends.
#[derive(Clone, Debug, Default)]
pub struct NormalizeWhitespace;

impl NormalizeWhitespace {
    /// Create a whitespace normalizer.
    pub fn new() -> Self {
        NormalizeWhitespace
    }

    fn normalize(text: &str) -> String {
        let text = replace_literal(&LINEBREAK, text, "\n");
        replace_literal(&NON_BREAKING_SPACE, &text, " ")
            .trim()
            .to_string()
    }
}

impl Step for NormalizeWhitespace {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(Self::normalize(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, Self::normalize)
    }

    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }
}

/// Deletes Unicode punctuation characters.
#[derive(Clone, Debug, Default)]
pub struct RemovePunctuation;

impl RemovePunctuation {
    /// Create a punctuation remover.
    pub fn new() -> Self {
        RemovePunctuation
    }
}

impl Step for RemovePunctuation {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(replace_literal(&PUNCTUATION, text, ""))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| replace_literal(&PUNCTUATION, token, ""))
            .filter(|token| !token.is_empty())
            .collect()
    }

    fn name(&self) -> &'static str {
        "remove_punctuation"
    }
}

/// Expands English contractions: `didn't` becomes `did not`, `I'm` becomes `I am`.
#[derive(Clone, Debug, Default)]
pub struct UnpackContractions;

impl UnpackContractions {
    /// Create a contraction expander.
    pub fn new() -> Self {
        UnpackContractions
    }

    fn unpack(text: &str) -> String {
        let mut text = text.to_string();
        for (contraction, expansion) in CONTRACTIONS.iter() {
            text = contraction.replace_all(&text, *expansion).into_owned();
        }
        text
    }
}

impl Step for UnpackContractions {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(Self::unpack(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, Self::unpack)
    }

    fn name(&self) -> &'static str {
        "unpack_contractions"
    }
}

/// Defines a step replacing every match of a built-in pattern with a fixed string.
macro_rules! pattern_replacement_step {
    ($(#[$doc:meta])* $step:ident, $regex:ident, $name:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default)]
        pub struct $step {
            replacement: String,
        }

        impl $step {
            /// Create the step with the given replacement string.
            ///
            /// Fails if the replacement contains the token separator.
            pub fn new<S: Into<String>>(replacement: S) -> Result<Self> {
                let replacement = replacement.into();
                ensure_no_token_separator("Replacement", &replacement)?;
                Ok($step { replacement })
            }

            fn replace(&self, text: &str) -> String {
                replace_literal(&$regex, text, &self.replacement)
            }
        }

        impl Step for $step {
            fn transform_string(&self, text: &str) -> Document {
                Document::Text(self.replace(text))
            }

            fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
                map_tokens(tokens, |token| self.replace(token))
            }

            fn name(&self) -> &'static str {
                $name
            }
        }
    };
}

pattern_replacement_step!(
    /// Replaces URLs (`http://`, `https://`, `ftp://` or `www.` prefixed).
    ReplaceUrls,
    URL,
    "replace_urls"
);

pattern_replacement_step!(
    /// Replaces email addresses.
    ReplaceEmails,
    EMAIL,
    "replace_emails"
);

pattern_replacement_step!(
    /// Replaces North American style phone numbers.
    ReplacePhoneNumbers,
    PHONE_NUMBER,
    "replace_phone_numbers"
);

pattern_replacement_step!(
    /// Replaces integers and decimal numbers, with an optional sign.
    ReplaceNumbers,
    NUMBER,
    "replace_numbers"
);

pattern_replacement_step!(
    /// Replaces currency symbols such as `$`, `€` or `£`.
    ReplaceCurrencySymbols,
    CURRENCY_SYMBOL,
    "replace_currency_symbols"
);

/// Strips diacritics: `Crème brûlée` becomes `Creme brulee`.
#[derive(Clone, Debug, Default)]
pub struct RemoveAccents;

impl RemoveAccents {
    /// Create an accent remover.
    pub fn new() -> Self {
        RemoveAccents
    }

    fn strip(text: &str) -> String {
        text.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

impl Step for RemoveAccents {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(Self::strip(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, Self::strip)
    }

    fn name(&self) -> &'static str {
        "remove_accents"
    }
}

/// Unicode normalization forms supported by [`FixUnicode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnicodeForm {
    #[default]
    Nfc,
    Nfkc,
}

/// Brings text into a canonical Unicode normalization form.
#[derive(Clone, Debug, Default)]
pub struct FixUnicode {
    form: UnicodeForm,
}

impl FixUnicode {
    /// Create a normalizer for the given Unicode form.
    pub fn new(form: UnicodeForm) -> Self {
        FixUnicode { form }
    }

    fn normalize(&self, text: &str) -> String {
        match self.form {
            UnicodeForm::Nfc => text.nfc().collect(),
            UnicodeForm::Nfkc => text.nfkc().collect(),
        }
    }
}

impl Step for FixUnicode {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.normalize(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, |token| self.normalize(token))
    }

    fn name(&self) -> &'static str {
        "fix_unicode"
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TextprepError;

    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_normalize_whitespace() {
        let step = NormalizeWhitespace::new();
        assert_eq!(
            step.transform_string("  check \t engine\n\n\nlight  "),
            Document::text("check engine\nlight")
        );
        assert_eq!(
            step.transform_tokens(&strings(&[" a  b "])),
            strings(&["a b"])
        );
    }

    #[test]
    fn test_remove_punctuation() {
        let step = RemovePunctuation::new();
        assert_eq!(
            step.transform_string("Hello, world! (again)"),
            Document::text("Hello world again")
        );
        assert_eq!(
            step.transform_tokens(&strings(&["engine", ",", "light", "...", "on!"])),
            strings(&["engine", "light", "on"])
        );
    }

    #[test]
    fn test_unpack_contractions() {
        let step = UnpackContractions::new();
        assert_eq!(
            step.transform_string("I didn't know you'll come, I'm sure we can't"),
            Document::text("I did not know you will come, I am sure we can not")
        );
        assert_eq!(
            step.transform_string("They won't, we've tried, you're right, she'd go"),
            Document::text("They will not, we have tried, you are right, she would go")
        );
    }

    #[test]
    fn test_replace_urls_and_emails() {
        let step = ReplaceUrls::new("URL").unwrap();
        assert_eq!(
            step.transform_string("see https://example.com/a?b=1 or www.example.org now"),
            Document::text("see URL or URL now")
        );

        let step = ReplaceEmails::new("EMAIL").unwrap();
        assert_eq!(
            step.transform_string("mail john.doe@example.com today"),
            Document::text("mail EMAIL today")
        );
    }

    #[test]
    fn test_replace_phone_numbers() {
        let step = ReplacePhoneNumbers::new("PHONE").unwrap();
        assert_eq!(
            step.transform_string("call 555-123-4567 or (555) 123-4567"),
            Document::text("call PHONE or PHONE")
        );
    }

    #[test]
    fn test_replace_numbers_and_currency() {
        let step = ReplaceNumbers::new("NUM").unwrap();
        assert_eq!(
            step.transform_string("paid 1,200.50 for 3 parts"),
            Document::text("paid NUM for NUM parts")
        );

        let step = ReplaceCurrencySymbols::new("CUR").unwrap();
        assert_eq!(
            step.transform_tokens(&strings(&["$", "100", "€5"])),
            strings(&["CUR", "100", "CUR5"])
        );
    }

    #[test]
    fn test_default_replacement_removes() {
        let step = ReplaceNumbers::default();
        assert_eq!(step.transform_string("code 42"), Document::text("code "));
    }

    #[test]
    fn test_replacement_is_literal() {
        let step = ReplaceNumbers::new("$1").unwrap();
        assert_eq!(step.transform_string("7"), Document::text("$1"));
    }

    #[test]
    fn test_replacement_cannot_contain_token_separator() {
        let result = ReplaceUrls::new("\tURL");
        assert!(matches!(result, Err(TextprepError::Config(_))));
    }

    #[test]
    fn test_remove_accents() {
        let step = RemoveAccents::new();
        assert_eq!(
            step.transform_string("Crème brûlée à Ärger"),
            Document::text("Creme brulee a Arger")
        );
    }

    #[test]
    fn test_fix_unicode() {
        let step = FixUnicode::new(UnicodeForm::Nfc);
        assert_eq!(
            step.transform_string("Am\u{0065}\u{0301}lie"),
            Document::text("Am\u{00e9}lie")
        );

        let step = FixUnicode::new(UnicodeForm::Nfkc);
        assert_eq!(step.transform_tokens(&strings(&["\u{ff21}"])), strings(&["A"]));
    }
}
