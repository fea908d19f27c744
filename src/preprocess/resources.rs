//! Loaders for the plain-text resource files used by preprocessing steps.
//!
//! All files are UTF-8 with one entry per line:
//!
//! - word lists (stopwords): one word per line, blank lines ignored
//! - synonym tables: `word<TAB>replacement`, lines with fewer than two columns ignored
//! - collocation lists: one phrase per line, words separated by whitespace
//!
//! Loading happens once, when a step is constructed. A missing or unreadable
//! file is a [`TextprepError::Resource`] error.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, warn};

use crate::error::{Result, TextprepError};

fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        TextprepError::resource(format!(
            "Failed to read resource file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a word list, one entry per line.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let words: Vec<String> = read_resource(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse tab-separated `word<TAB>replacement` lines into a synonym table.
///
/// Returns the table and the number of lines skipped for having fewer than
/// two columns. Later duplicates of a key overwrite earlier ones.
pub fn parse_synonym_table(content: &str) -> (AHashMap<String, String>, usize) {
    let mut table = AHashMap::new();
    let mut skipped = 0;

    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut columns = line.split('\t');
        match (columns.next(), columns.next()) {
            (Some(word), Some(replacement)) => {
                table.insert(word.to_string(), replacement.to_string());
            }
            _ => {
                if !line.is_empty() {
                    skipped += 1;
                }
            }
        }
    }

    (table, skipped)
}

/// Load a synonym table from a tab-separated file.
pub fn load_synonym_table<P: AsRef<Path>>(path: P) -> Result<AHashMap<String, String>> {
    let path = path.as_ref();
    let (table, skipped) = parse_synonym_table(&read_resource(path)?);

    if skipped > 0 {
        warn!(
            "Ignored {} malformed line(s) in synonym file {}",
            skipped,
            path.display()
        );
    }
    debug!("Loaded {} synonyms from {}", table.len(), path.display());
    Ok(table)
}

/// Load a collocation list; each line becomes one phrase split on whitespace.
pub fn load_collocations<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let phrases: Vec<Vec<String>> = read_resource(path)?
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|phrase| !phrase.is_empty())
        .collect();

    debug!("Loaded {} collocations from {}", phrases.len(), path.display());
    Ok(phrases)
}
