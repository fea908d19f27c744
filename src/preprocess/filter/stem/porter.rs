//! Porter stemming algorithm implementation.
//!
//! Reduces English words to their stems with the five rule groups of the
//! original Porter algorithm:
//!
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. Double suffixes: -ational → -ate, -tional → -tion, ...
//! 3. -icate → -ic, -ative → "", -ness → "", ...
//! 4. Remove -al, -ance, -ence, ... from long stems
//! 5. Remove a final -e and reduce -ll
//!
//! Each rule group fires at most one rule: the first suffix that matches decides,
//! whether or not its measure condition holds.
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::filter::stem::Stemmer;
//! use textprep::preprocess::filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::preprocess::filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 suffixes, longest first within a shared ending.
const STEP4_SUFFIXES: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "ion", "ism", "ate", "iti",
    "ous", "ive", "ize", "al", "er", "ic", "ou",
];

/// Working buffer for stemming a single lowercased word.
struct Word {
    chars: Vec<char>,
}

impl Word {
    fn new(word: &str) -> Self {
        Word {
            chars: word.chars().collect(),
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the letter at `i` is a consonant. `y` is a consonant at the start
    /// of a word or after a vowel.
    fn is_consonant(&self, i: usize) -> bool {
        match self.chars[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// The measure m of the first `end` letters: the number of VC sequences
    /// in the form [C](VC)^m[V].
    fn measure(&self, end: usize) -> usize {
        let mut m = 0;
        let mut i = 0;

        while i < end && self.is_consonant(i) {
            i += 1;
        }
        while i < end {
            while i < end && !self.is_consonant(i) {
                i += 1;
            }
            if i >= end {
                break;
            }
            m += 1;
            while i < end && self.is_consonant(i) {
                i += 1;
            }
        }

        m
    }

    fn has_vowel(&self, end: usize) -> bool {
        (0..end).any(|i| !self.is_consonant(i))
    }

    /// Whether the first `end` letters finish with a double consonant.
    fn ends_double_consonant(&self, end: usize) -> bool {
        end >= 2 && self.chars[end - 1] == self.chars[end - 2] && self.is_consonant(end - 1)
    }

    /// Whether the first `end` letters finish consonant-vowel-consonant, where
    /// the last consonant is not w, x or y.
    fn ends_cvc(&self, end: usize) -> bool {
        end >= 3
            && self.is_consonant(end - 3)
            && !self.is_consonant(end - 2)
            && self.is_consonant(end - 1)
            && !matches!(self.chars[end - 1], 'w' | 'x' | 'y')
    }

    fn ends_with(&self, suffix: &str) -> bool {
        let suffix_len = suffix.chars().count();
        suffix_len <= self.len() && self.chars[self.len() - suffix_len..].iter().copied().eq(suffix.chars())
    }

    /// Length of the word without `suffix`; the caller checked `ends_with`.
    fn stem_len(&self, suffix: &str) -> usize {
        self.len() - suffix.chars().count()
    }

    fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        let stem_len = self.stem_len(suffix);
        self.chars.truncate(stem_len);
        self.chars.extend(replacement.chars());
    }

    fn last_is(&self, c: char) -> bool {
        self.chars.last() == Some(&c)
    }

    fn step1a(&mut self) {
        if self.ends_with("sses") {
            self.replace_suffix("sses", "ss");
        } else if self.ends_with("ies") {
            self.replace_suffix("ies", "i");
        } else if self.ends_with("ss") {
            // unchanged
        } else if self.ends_with("s") {
            self.replace_suffix("s", "");
        }
    }

    fn step1b(&mut self) {
        if self.ends_with("eed") {
            if self.measure(self.stem_len("eed")) > 0 {
                self.replace_suffix("eed", "ee");
            }
            return;
        }

        let removed = ["ed", "ing"].into_iter().find(|suffix| {
            self.ends_with(suffix) && self.has_vowel(self.stem_len(suffix))
        });
        let Some(suffix) = removed else {
            return;
        };
        self.replace_suffix(suffix, "");

        if self.ends_with("at") || self.ends_with("bl") || self.ends_with("iz") {
            self.chars.push('e');
        } else if self.ends_double_consonant(self.len())
            && !(self.last_is('l') || self.last_is('s') || self.last_is('z'))
        {
            self.chars.pop();
        } else if self.measure(self.len()) == 1 && self.ends_cvc(self.len()) {
            self.chars.push('e');
        }
    }

    fn step1c(&mut self) {
        if self.ends_with("y") && self.has_vowel(self.stem_len("y")) {
            self.replace_suffix("y", "i");
        }
    }

    /// Apply the first matching rule whose stem has measure > 0.
    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        if let Some((suffix, replacement)) =
            rules.iter().find(|(suffix, _)| self.ends_with(suffix))
        {
            if self.measure(self.stem_len(suffix)) > 0 {
                self.replace_suffix(suffix, replacement);
            }
        }
    }

    fn step4(&mut self) {
        let Some(suffix) = STEP4_SUFFIXES.iter().find(|suffix| self.ends_with(suffix)) else {
            return;
        };
        let stem_len = self.stem_len(suffix);
        if self.measure(stem_len) <= 1 {
            return;
        }
        if *suffix == "ion" && !(stem_len > 0 && matches!(self.chars[stem_len - 1], 's' | 't')) {
            return;
        }
        self.chars.truncate(stem_len);
    }

    fn step5(&mut self) {
        if self.ends_with("e") {
            let stem_len = self.stem_len("e");
            let m = self.measure(stem_len);
            if m > 1 || (m == 1 && !self.ends_cvc(stem_len)) {
                self.chars.truncate(stem_len);
            }
        }

        if self.measure(self.len()) > 1
            && self.ends_double_consonant(self.len())
            && self.last_is('l')
        {
            self.chars.pop();
        }
    }
}

/// The original Porter stemmer for English.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        if lowered.chars().count() <= 2 {
            return lowered;
        }

        let mut word = Word::new(&lowered);
        word.step1a();
        word.step1b();
        word.step1c();
        word.apply_rules(STEP2_RULES);
        word.apply_rules(STEP3_RULES);
        word.step4();
        word.step5();

        word.chars.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
