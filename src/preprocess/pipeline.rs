//! Pipeline that runs preprocessing steps over a corpus.
//!
//! Steps run in registration order; there is no reordering or dependency
//! inference. Each step sees the whole corpus produced by the previous one.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use textprep::preprocess::document::corpus_from_texts;
//! use textprep::preprocess::filter::{StopwordFilter, ToLowercase};
//! use textprep::preprocess::pipeline::Pipeline;
//! use textprep::preprocess::tokenizer::WhitespaceTokenizer;
//!
//! let pipeline = Pipeline::new()
//!     .with_step(Arc::new(WhitespaceTokenizer::new()))
//!     .with_step(Arc::new(ToLowercase::new()))
//!     .with_step(Arc::new(StopwordFilter::english()));
//!
//! let output = pipeline.run(&corpus_from_texts(["The Engine is LOUD"]));
//! assert_eq!(output, vec!["engine\tloud"]);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::preprocess::document::{Corpus, Document};
use crate::preprocess::step::Step;

/// An ordered chain of preprocessing steps.
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<dyn Step>>,
    /// Set once any registered step is a tokenizer.
    has_tokenizer: bool,
    /// Process the documents of each step on the rayon thread pool.
    parallel: bool,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names())
            .field("has_tokenizer", &self.has_tokenizer)
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from steps, in order.
    pub fn with_steps<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Step>>,
    {
        let mut pipeline = Self::new();
        for step in steps {
            pipeline.add_step(step);
        }
        pipeline
    }

    /// Append a step.
    pub fn add_step(&mut self, step: Arc<dyn Step>) {
        self.has_tokenizer |= step.is_tokenizer();
        self.steps.push(step);
    }

    /// Append a step, builder style.
    pub fn with_step(mut self, step: Arc<dyn Step>) -> Self {
        self.add_step(step);
        self
    }

    /// Enable or disable parallel processing of documents within a step.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether documents are processed in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Check if no step is registered.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether any registered step turns text into tokens.
    pub fn has_tokenizer(&self) -> bool {
        self.has_tokenizer
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The names of the registered steps, in order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// The registered steps.
    pub fn steps(&self) -> &[Arc<dyn Step>] {
        &self.steps
    }

    fn apply_step(&self, step: &dyn Step, corpus: &[Document]) -> Corpus {
        if self.parallel {
            corpus
                .par_iter()
                .map(|document| step.transform_document(document))
                .collect()
        } else {
            step.transform(corpus)
        }
    }

    /// Run every step over the corpus. An empty pipeline returns the corpus unchanged.
    pub fn transform(&self, corpus: &[Document]) -> Corpus {
        let start = Instant::now();
        let mut current = corpus.to_vec();

        for step in &self.steps {
            let step_start = Instant::now();
            current = self.apply_step(step.as_ref(), &current);
            debug!(
                "Step '{}' processed {} documents in {:?}",
                step.name(),
                current.len(),
                step_start.elapsed()
            );
        }

        info!(
            "Preprocessed {} documents with {} steps in {:?}",
            current.len(),
            self.steps.len(),
            start.elapsed()
        );
        current
    }

    /// Flatten documents into the strings handed to the vectorizer.
    ///
    /// Raw text is kept as it is; token sequences are joined with
    /// [`TOKEN_SEPARATOR`](crate::preprocess::document::TOKEN_SEPARATOR).
    pub fn join_for_vectorizer(&self, corpus: &[Document]) -> Vec<String> {
        corpus.iter().map(Document::to_vectorizer_string).collect()
    }

    /// Transform the corpus and flatten the result for the vectorizer.
    pub fn run(&self, corpus: &[Document]) -> Vec<String> {
        self.join_for_vectorizer(&self.transform(corpus))
    }
}
