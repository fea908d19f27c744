//! Lowercase step implementation.

use crate::preprocess::document::Document;
use crate::preprocess::step::{Step, map_tokens};

/// A step that converts text or tokens to lowercase.
///
/// Uses full Unicode lowercasing, so applying it twice gives the same result
/// as applying it once.
#[derive(Clone, Debug, Default)]
pub struct ToLowercase;

impl ToLowercase {
    /// Create a new lowercase step.
    pub fn new() -> Self {
        ToLowercase
    }
}

impl Step for ToLowercase {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(text.to_lowercase())
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        map_tokens(tokens, str::to_lowercase)
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_string_keeps_spacing() {
        let step = ToLowercase::new();
        assert_eq!(
            step.transform_string("Hello  WORLD\tÄrger"),
            Document::text("hello  world\tärger")
        );
    }

    #[test]
    fn test_lowercase_tokens() {
        let step = ToLowercase::new();
        let tokens = vec!["Hello".to_string(), "WORLD".to_string()];
        assert_eq!(step.transform_tokens(&tokens), vec!["hello", "world"]);
    }

    #[test]
    fn test_lowercase_idempotent() {
        let step = ToLowercase::new();
        let corpus = vec![
            Document::text("MiXeD Case ΣΊΣΥΦΟΣ"),
            Document::tokens(["ÉCOLE", "İstanbul", "straße"]),
        ];

        let once = step.transform(&corpus);
        let twice = step.transform(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_step_name() {
        assert_eq!(ToLowercase::new().name(), "lowercase");
    }
}
