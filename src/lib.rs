//! # textprep
//!
//! A composable text preprocessing pipeline for document clustering.
//!
//! ## Features
//!
//! - Dual-mode steps that work on raw text or on token sequences
//! - Whitespace, Penn Treebank, Unicode and collocation tokenizers
//! - Lowercasing, stopword removal, Porter and German stemming
//! - Exact and context-aware synonym substitution
//! - Regex substitution and text cleaning
//! - JSON pipeline configuration and a CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod preprocess;

pub mod prelude {
    pub use crate::config::{PipelineConfig, StepConfig};
    pub use crate::error::{Result, TextprepError};
    pub use crate::preprocess::document::{Corpus, Document, TOKEN_SEPARATOR};
    pub use crate::preprocess::pipeline::Pipeline;
    pub use crate::preprocess::step::Step;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
