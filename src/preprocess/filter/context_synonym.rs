//! Context-aware synonym substitution.
//!
//! A main word is replaced by a substitution only when a context word occurs
//! within a window around it. The nearest context word before the main word
//! wins; the window after the main word is searched only when nothing was found
//! before it. The matched context token is removed from the output, and each
//! context occurrence can license at most one substitution.
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::filter::{ContextRule, ContextSynonyms};
//! use textprep::preprocess::step::Step;
//!
//! let step = ContextSynonyms::new(ContextRule::new(["engine"], ["check"], 2, 0, "CHECKENGINE"));
//! let tokens: Vec<String> = ["please", "check", "engine", "now"].iter().map(|t| t.to_string()).collect();
//!
//! assert_eq!(step.transform_tokens(&tokens), vec!["please", "CHECKENGINE", "now"]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::preprocess::document::{Document, split_words};
use crate::preprocess::step::Step;

/// How long a context match influences later main words of the same document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundFlagScope {
    /// Every main word occurrence looks for its own context word.
    #[default]
    PerOccurrence,
    /// Once any context match was found in a document, every later main word
    /// skips the after-window and is substituted, with or without its own
    /// context word.
    PerDocument,
}

/// Parameters of one context substitution rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRule {
    pub main_words: HashSet<String>,
    pub context_words: HashSet<String>,
    /// Number of tokens searched before a main word.
    pub before: usize,
    /// Number of tokens searched after a main word.
    pub after: usize,
    pub substitution: String,
    #[serde(default)]
    pub found_flag_scope: FoundFlagScope,
    /// Also remove the tokens between a matched context word and its main word.
    #[serde(default)]
    pub remove_gap: bool,
}

impl ContextRule {
    /// Create a rule with the default per-occurrence scope.
    pub fn new<M, C, S>(
        main_words: M,
        context_words: C,
        before: usize,
        after: usize,
        substitution: impl Into<String>,
    ) -> Self
    where
        M: IntoIterator<Item = S>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContextRule {
            main_words: main_words.into_iter().map(Into::into).collect(),
            context_words: context_words.into_iter().map(Into::into).collect(),
            before,
            after,
            substitution: substitution.into(),
            found_flag_scope: FoundFlagScope::default(),
            remove_gap: false,
        }
    }

    /// Set the scope of the found flags.
    pub fn with_found_flag_scope(mut self, scope: FoundFlagScope) -> Self {
        self.found_flag_scope = scope;
        self
    }

    /// Set whether tokens between a context word and its main word are removed.
    pub fn with_remove_gap(mut self, remove_gap: bool) -> Self {
        self.remove_gap = remove_gap;
        self
    }
}

/// A step applying one [`ContextRule`] to every document.
#[derive(Clone, Debug)]
pub struct ContextSynonyms {
    rule: ContextRule,
}

impl ContextSynonyms {
    /// Create a new context synonym step.
    pub fn new(rule: ContextRule) -> Self {
        ContextSynonyms { rule }
    }

    /// The rule applied by this step.
    pub fn rule(&self) -> &ContextRule {
        &self.rule
    }

    /// First unremoved context word among `indices`, in iteration order.
    fn find_context<I>(&self, tokens: &[String], removed: &[bool], indices: I) -> Option<usize>
    where
        I: Iterator<Item = usize>,
    {
        indices
            .filter(|&j| !removed[j])
            .find(|&j| self.rule.context_words.contains(&tokens[j]))
    }

    /// Run the substitution over one token sequence.
    pub fn substitute(&self, tokens: &[String]) -> Vec<String> {
        let rule = &self.rule;
        let mut output = tokens.to_vec();
        let mut removed = vec![false; tokens.len()];
        let mut found_before = false;
        let mut found_after = false;

        for i in 0..tokens.len() {
            if removed[i] || !rule.main_words.contains(&tokens[i]) {
                continue;
            }
            if rule.found_flag_scope == FoundFlagScope::PerOccurrence {
                found_before = false;
                found_after = false;
            }

            let start = i.saturating_sub(rule.before);
            if let Some(j) = self.find_context(tokens, &removed, (start..i).rev()) {
                removed[j] = true;
                if rule.remove_gap {
                    removed[j + 1..i].iter_mut().for_each(|r| *r = true);
                }
                found_before = true;
            }

            if !found_before {
                let end = i.saturating_add(rule.after).min(tokens.len() - 1);
                if let Some(j) = self.find_context(tokens, &removed, i + 1..=end) {
                    removed[j] = true;
                    if rule.remove_gap {
                        removed[i + 1..j].iter_mut().for_each(|r| *r = true);
                    }
                    found_after = true;
                }
            }

            if found_before || found_after {
                output[i] = rule.substitution.clone();
            }
        }

        output
            .into_iter()
            .zip(removed)
            .filter_map(|(token, removed)| (!removed).then_some(token))
            .collect()
    }
}

impl Step for ContextSynonyms {
    fn transform_string(&self, text: &str) -> Document {
        Document::Text(self.substitute(&split_words(text)).join(" "))
    }

    fn transform_tokens(&self, tokens: &[String]) -> Vec<String> {
        self.substitute(tokens)
    }

    fn name(&self) -> &'static str {
        "context_synonyms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn check_engine(before: usize, after: usize) -> ContextRule {
        ContextRule::new(["engine"], ["check"], before, after, "CHECKENGINE")
    }

    #[test]
    fn test_before_window() {
        let step = ContextSynonyms::new(check_engine(2, 0));
        let tokens = strings(&["please", "check", "the", "engine", "now"]);

        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["please", "the", "CHECKENGINE", "now"])
        );
    }

    #[test]
    fn test_before_window_removing_gap() {
        let step = ContextSynonyms::new(check_engine(2, 0).with_remove_gap(true));
        let tokens = strings(&["please", "check", "the", "engine", "now"]);

        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["please", "CHECKENGINE", "now"])
        );
    }

    #[test]
    fn test_no_match_leaves_tokens_unchanged() {
        let step = ContextSynonyms::new(check_engine(2, 0));
        let tokens = strings(&["the", "engine", "is", "fine"]);

        assert_eq!(step.transform_tokens(&tokens), tokens);
    }

    #[test]
    fn test_context_outside_window() {
        let step = ContextSynonyms::new(check_engine(1, 0));
        let tokens = strings(&["check", "the", "engine"]);

        assert_eq!(step.transform_tokens(&tokens), tokens);
    }

    #[test]
    fn test_after_window() {
        let step = ContextSynonyms::new(check_engine(0, 2));
        let tokens = strings(&["engine", "needs", "check", "soon"]);

        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["CHECKENGINE", "needs", "soon"])
        );
    }

    #[test]
    fn test_after_window_is_inclusive() {
        let step = ContextSynonyms::new(check_engine(0, 1));
        assert_eq!(
            step.transform_tokens(&strings(&["engine", "check"])),
            strings(&["CHECKENGINE"])
        );
    }

    #[test]
    fn test_before_has_priority_over_after() {
        let rule = ContextRule::new(["engine"], ["check", "inspect"], 1, 1, "X");
        let step = ContextSynonyms::new(rule);
        let tokens = strings(&["check", "engine", "inspect"]);

        assert_eq!(step.transform_tokens(&tokens), strings(&["X", "inspect"]));
    }

    #[test]
    fn test_nearest_context_word_is_consumed() {
        let step = ContextSynonyms::new(check_engine(3, 0));
        let tokens = strings(&["check", "check", "engine"]);

        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["check", "CHECKENGINE"])
        );
    }

    #[test]
    fn test_context_word_consumed_once() {
        let step = ContextSynonyms::new(check_engine(0, 3));
        let tokens = strings(&["engine", "engine", "check"]);

        // the second engine cannot reuse the check consumed by the first
        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["CHECKENGINE", "engine"])
        );
    }

    #[test]
    fn test_before_scan_skips_context_consumed_after() {
        let step = ContextSynonyms::new(check_engine(1, 1));
        let tokens = strings(&["engine", "check", "engine"]);

        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["CHECKENGINE", "engine"])
        );
    }

    #[test]
    fn test_windows_clamp_to_bounds() {
        let step = ContextSynonyms::new(check_engine(100, 100));

        assert_eq!(
            step.transform_tokens(&strings(&["check", "engine"])),
            strings(&["CHECKENGINE"])
        );
        assert_eq!(
            step.transform_tokens(&strings(&["engine", "check"])),
            strings(&["CHECKENGINE"])
        );
        assert!(step.transform_tokens(&[]).is_empty());
        assert_eq!(step.transform_tokens(&strings(&["engine"])), strings(&["engine"]));
    }

    #[test]
    fn test_per_occurrence_scope() {
        let step = ContextSynonyms::new(check_engine(1, 1));
        let tokens = strings(&["check", "engine", "and", "engine"]);

        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["CHECKENGINE", "and", "engine"])
        );
    }

    #[test]
    fn test_per_document_scope() {
        let rule = check_engine(1, 1).with_found_flag_scope(FoundFlagScope::PerDocument);
        let step = ContextSynonyms::new(rule);
        let tokens = strings(&["check", "engine", "and", "engine"]);

        // the flag from the first match carries over to the second engine
        assert_eq!(
            step.transform_tokens(&tokens),
            strings(&["CHECKENGINE", "and", "CHECKENGINE"])
        );
    }

    #[test]
    fn test_string_path() {
        let step = ContextSynonyms::new(check_engine(2, 0));
        assert_eq!(
            step.transform_string("please check  engine"),
            Document::text("please CHECKENGINE")
        );
    }

    #[test]
    fn test_rule_deserialization_defaults() {
        let rule: ContextRule = serde_json::from_str(
            r#"{"main_words": ["engine"], "context_words": ["check"],
                "before": 2, "after": 0, "substitution": "CHECKENGINE"}"#,
        )
        .unwrap();

        assert_eq!(rule, check_engine(2, 0));
        assert_eq!(rule.found_flag_scope, FoundFlagScope::PerOccurrence);
    }
}
