//! Pipeline configuration.
//!
//! A pipeline is described by a JSON document listing its steps in order:
//!
//! ```json
//! {
//!   "steps": [
//!     {"type": "tokenizer", "kind": "word"},
//!     {"type": "lowercase"},
//!     {"type": "context_synonyms", "main_words": ["engine"], "context_words": ["check"],
//!      "before": 2, "after": 0, "substitution": "CHECKENGINE"},
//!     {"type": "stemmer", "kind": "porter"}
//!   ],
//!   "parallel": false
//! }
//! ```
//!
//! Relative resource paths are resolved against a base directory, which is the
//! directory of the config file when loading with [`PipelineConfig::load_pipeline`].
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//!
//! use textprep::config::PipelineConfig;
//! use textprep::preprocess::document::corpus_from_texts;
//!
//! let config = PipelineConfig::from_json_str(
//!     r#"{"steps": [{"type": "tokenizer", "kind": "whitespace"}, {"type": "lowercase"}]}"#,
//! )
//! .unwrap();
//! let pipeline = config.build(Path::new(".")).unwrap();
//!
//! assert_eq!(pipeline.run(&corpus_from_texts(["Check Engine"])), vec!["check\tengine"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextprepError};
use crate::preprocess::filter::{
    ContextRule, ContextSynonyms, FixUnicode, NormalizeWhitespace, RegexSubstitution,
    RemoveAccents, RemovePunctuation, ReplaceCurrencySymbols, ReplaceEmails, ReplaceNumbers,
    ReplacePhoneNumbers, ReplaceUrls, SimpleSynonyms, StemFilter, StemmerKind, StopwordFilter,
    ToLowercase, UnicodeForm, UnpackContractions,
};
use crate::preprocess::pipeline::Pipeline;
use crate::preprocess::step::Step;
use crate::preprocess::tokenizer::multi_word::DEFAULT_SEPARATOR;
use crate::preprocess::tokenizer::{MultiWordTokenizer, TokenizerKind};

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Configuration of a single pipeline step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepConfig {
    Tokenizer {
        kind: TokenizerKind,
    },
    Lowercase,
    Stemmer {
        kind: StemmerKind,
    },
    EnglishStopwords,
    CustomStopwords {
        path: PathBuf,
    },
    Synonyms {
        path: PathBuf,
    },
    Collocations {
        path: PathBuf,
        #[serde(default = "default_separator")]
        separator: String,
    },
    ContextSynonyms(ContextRule),
    RegexSubstitution {
        pattern: String,
        replacement: String,
    },
    NormalizeWhitespace,
    RemovePunctuation,
    UnpackContractions,
    ReplaceUrls {
        #[serde(default)]
        replacement: String,
    },
    ReplaceEmails {
        #[serde(default)]
        replacement: String,
    },
    ReplacePhoneNumbers {
        #[serde(default)]
        replacement: String,
    },
    ReplaceNumbers {
        #[serde(default)]
        replacement: String,
    },
    ReplaceCurrencySymbols {
        #[serde(default)]
        replacement: String,
    },
    RemoveAccents,
    FixUnicode {
        #[serde(default)]
        form: UnicodeForm,
    },
}

/// Resolve `path` against `base_dir` unless it is absolute.
fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

impl StepConfig {
    /// Build the configured step, loading resource files relative to `base_dir`.
    pub fn build(&self, base_dir: &Path) -> Result<Arc<dyn Step>> {
        let step: Arc<dyn Step> = match self {
            StepConfig::Tokenizer { kind } => kind.build(),
            StepConfig::Lowercase => Arc::new(ToLowercase::new()),
            StepConfig::Stemmer { kind } => Arc::new(StemFilter::of_kind(*kind)),
            StepConfig::EnglishStopwords => Arc::new(StopwordFilter::english()),
            StepConfig::CustomStopwords { path } => {
                Arc::new(StopwordFilter::from_file(resolve(base_dir, path))?)
            }
            StepConfig::Synonyms { path } => {
                Arc::new(SimpleSynonyms::from_file(resolve(base_dir, path))?)
            }
            StepConfig::Collocations { path, separator } => Arc::new(
                MultiWordTokenizer::from_file(resolve(base_dir, path), separator.as_str())?,
            ),
            StepConfig::ContextSynonyms(rule) => Arc::new(ContextSynonyms::new(rule.clone())),
            StepConfig::RegexSubstitution {
                pattern,
                replacement,
            } => Arc::new(RegexSubstitution::new(pattern, replacement)?),
            StepConfig::NormalizeWhitespace => Arc::new(NormalizeWhitespace::new()),
            StepConfig::RemovePunctuation => Arc::new(RemovePunctuation::new()),
            StepConfig::UnpackContractions => Arc::new(UnpackContractions::new()),
            StepConfig::ReplaceUrls { replacement } => {
                Arc::new(ReplaceUrls::new(replacement.as_str())?)
            }
            StepConfig::ReplaceEmails { replacement } => {
                Arc::new(ReplaceEmails::new(replacement.as_str())?)
            }
            StepConfig::ReplacePhoneNumbers { replacement } => {
                Arc::new(ReplacePhoneNumbers::new(replacement.as_str())?)
            }
            StepConfig::ReplaceNumbers { replacement } => {
                Arc::new(ReplaceNumbers::new(replacement.as_str())?)
            }
            StepConfig::ReplaceCurrencySymbols { replacement } => {
                Arc::new(ReplaceCurrencySymbols::new(replacement.as_str())?)
            }
            StepConfig::RemoveAccents => Arc::new(RemoveAccents::new()),
            StepConfig::FixUnicode { form } => Arc::new(FixUnicode::new(*form)),
        };

        debug!("Built step '{}'", step.name());
        Ok(step)
    }
}

/// Configuration of a whole pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Steps in execution order.
    #[serde(default)]
    pub steps: Vec<StepConfig>,

    /// Process documents in parallel within each step.
    #[serde(default)]
    pub parallel: bool,
}

impl PipelineConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextprepError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Build the pipeline, resolving relative resource paths against `base_dir`.
    pub fn build(&self, base_dir: &Path) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new().with_parallel(self.parallel);
        for step in &self.steps {
            pipeline.add_step(step.build(base_dir)?);
        }

        info!(
            "Built pipeline with {} steps (tokenizer: {})",
            pipeline.len(),
            pipeline.has_tokenizer()
        );
        Ok(pipeline)
    }

    /// Read a configuration file and build its pipeline, resolving resource
    /// paths against the file's directory.
    pub fn load_pipeline<P: AsRef<Path>>(path: P) -> Result<Pipeline> {
        let path = path.as_ref();
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_file(path)?.build(base_dir)
    }
}
