//! Text preprocessing for document clustering.
//!
//! This module provides the preprocessing pipeline that runs between reading
//! records and vectorizing them: documents, the step contract, tokenizers,
//! per-token filters and the pipeline orchestrator.

pub mod document;
pub mod filter;
pub mod pipeline;
pub mod resources;
pub mod step;
pub mod tokenizer;
