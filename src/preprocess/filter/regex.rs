//! Regular expression substitution step.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::preprocess::document::{Document, ensure_no_token_separator};
use crate::preprocess::step::{Step, map_tokens};

/// Matches `\1`-style group references.
static BACKSLASH_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(\d+)").expect("group reference pattern should be valid"));

/// Rewrite `\N` group references in a replacement to the `${N}` form used by
/// the `regex` crate. `$N` and `${name}` references are kept as they are.
pub fn normalize_replacement(replacement: &str) -> String {
    BACKSLASH_GROUP
        .replace_all(replacement, |caps: &Captures| format!("${{{}}}", &caps[1]))
        .into_owned()
}

/// A step replacing every match of a pattern.
///
/// On raw text the pattern runs over the whole string; on tokens it runs over
/// each token separately, so a match never spans two tokens.
#[derive(Clone, Debug)]
pub struct RegexSubstitution {
    pattern: Regex,
    replacement: String,
}

impl RegexSubstitution {
    /// Compile a substitution. An invalid pattern, or a replacement containing
    /// the token separator, is a configuration error.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        ensure_no_token_separator("Replacement", replacement)?;
        Ok(RegexSubstitution {
            pattern: Regex::new(pattern)?,
            replacement: normalize_replacement(replacement),
        })
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement, after group reference rewriting.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    fn replace(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

impl Step for RegexSubstitution {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.replace(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, |token| self.replace(token))
    }

    fn name(&self) -> &'static str {
        "regex_substitution"
    }
}
