//! Penn Treebank word tokenizer.
//!
//! Splits text into words and punctuation following the Penn Treebank
//! conventions:
//!
//! - double quotes become ``` `` ``` (opening) and `''` (closing)
//! - punctuation such as `,` `;` `:` `?` `!` `(` `)` `--` `...` is split off
//! - only a sentence-final period is split off, so `York.` inside a text stays
//! - contractions are split: `can't` → `ca` `n't`, `they'll` → `they` `'ll`,
//!   `cannot` → `can` `not`, `gonna` → `gon` `na`
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::document::Document;
//! use textprep::preprocess::step::Step;
//! use textprep::preprocess::tokenizer::TreebankWordTokenizer;
//!
//! let tokenizer = TreebankWordTokenizer::new();
//! let doc = tokenizer.transform_string("They'll save and invest more.");
//! assert_eq!(
//!     doc,
//!     Document::tokens(["They", "'ll", "save", "and", "invest", "more", "."])
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::preprocess::document::Document;
use crate::preprocess::step::Step;
use crate::preprocess::tokenizer::retokenize;

/// A single rewrite: every match of `pattern` is replaced by `replacement`.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("Treebank rule pattern should be valid"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Rules applied to the raw text, in order.
static LEADING_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // starting quotes
        Rule::new(r#"^""#, "``"),
        Rule::new(r"(``)", " ${1} "),
        Rule::new(r#"([ (\[{<])("|'')"#, "${1} `` "),
        // punctuation
        Rule::new(r"([:,])([^\d])", " ${1} ${2}"),
        Rule::new(r"([:,])$", " ${1} "),
        Rule::new(r"\.\.\.", " ... "),
        Rule::new(r"[;@#$%&]", " ${0} "),
        Rule::new(r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
        Rule::new(r"[?!]", " ${0} "),
        Rule::new(r"([^'])' ", "${1} ' "),
        // parens, brackets and double dashes
        Rule::new(r"[\]\[(){}<>]", " ${0} "),
        Rule::new(r"--", " -- "),
    ]
});

/// Rules applied after the text has been padded with spaces, in order.
static TRAILING_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // ending quotes
        Rule::new(r#"""#, " '' "),
        Rule::new(r"(\S)('')", "${1} ${2} "),
        Rule::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        Rule::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        // irregular contractions
        Rule::new(r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        Rule::new(r"(?i) ('t)(is)\b", " ${1} ${2} "),
        Rule::new(r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ]
});

/// A tokenizer following the Penn Treebank segmentation conventions.
#[derive(Clone, Debug, Default)]
pub struct TreebankWordTokenizer;

impl TreebankWordTokenizer {
    /// Create a new Treebank word tokenizer.
    pub fn new() -> Self {
        TreebankWordTokenizer
    }

    /// Split `text` into Treebank tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = text.to_string();
        for rule in LEADING_RULES.iter() {
            text = rule.apply(&text);
        }

        let mut text = format!(" {text} ");
        for rule in TRAILING_RULES.iter() {
            text = rule.apply(&text);
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

impl Step for TreebankWordTokenizer {
    fn transform_string(&self, text: &str) -> Document {
        Document::Tokens(self.tokenize(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        retokenize(tokens, |token| self.tokenize(token))
    }

    fn is_tokenizer(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}
