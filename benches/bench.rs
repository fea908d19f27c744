//! Criterion benchmarks for textprep.
//!
//! This module benchmarks the main preprocessing components:
//! - Tokenization (whitespace and Treebank)
//! - Porter stemming
//! - Context-aware synonym substitution
//! - Whole pipelines, sequential and parallel

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use textprep::preprocess::document::{Corpus, corpus_from_texts};
use textprep::preprocess::filter::{
    ContextRule, ContextSynonyms, PorterStemmer, StemFilter, Stemmer, StopwordFilter, ToLowercase,
};
use textprep::preprocess::pipeline::Pipeline;
use textprep::preprocess::step::Step;
use textprep::preprocess::tokenizer::{
    MultiWordTokenizer, TreebankWordTokenizer, WhitespaceTokenizer,
};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "The", "check", "engine", "light", "is", "on", "after", "the", "oil", "change", "and",
        "the", "brakes", "were", "squeaking", "during", "inspection", "customer", "reports",
        "vibration", "at", "highway", "speed", "replaced", "front", "pads", "didn't", "fix",
        "noise", "coolant", "leaking", "again.",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 40); // Variable length documents
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();
        documents.push(doc_words.join(" "));
    }

    documents
}

fn tokenized_corpus(count: usize) -> Corpus {
    WhitespaceTokenizer::new().transform(&corpus_from_texts(generate_test_documents(count)))
}

fn full_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(Arc::new(TreebankWordTokenizer::new()))
        .with_step(Arc::new(ToLowercase::new()))
        .with_step(Arc::new(MultiWordTokenizer::from_phrases([
            "check engine light",
            "oil change",
        ])))
        .with_step(Arc::new(StopwordFilter::english()))
        .with_step(Arc::new(ContextSynonyms::new(ContextRule::new(
            ["light"],
            ["check"],
            2,
            1,
            "CHECKLIGHT",
        ))))
        .with_step(Arc::new(StemFilter::new()))
}

/// Benchmark tokenizers.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let corpus = corpus_from_texts(generate_test_documents(100));

    group.throughput(Throughput::Elements(100));
    group.bench_function("whitespace_tokenizer", |b| {
        let tokenizer = WhitespaceTokenizer::new();
        b.iter(|| black_box(tokenizer.transform(black_box(&corpus))))
    });

    group.bench_function("treebank_tokenizer", |b| {
        let tokenizer = TreebankWordTokenizer::new();
        b.iter(|| black_box(tokenizer.transform(black_box(&corpus))))
    });

    group.finish();
}

/// Benchmark per-token filters.
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let corpus = tokenized_corpus(100);

    group.bench_function("porter_stem_word", |b| {
        let stemmer = PorterStemmer::new();
        b.iter(|| black_box(stemmer.stem(black_box("generalizations"))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("context_synonyms", |b| {
        let step = ContextSynonyms::new(ContextRule::new(
            ["engine", "light"],
            ["check"],
            3,
            3,
            "CHECKENGINE",
        ));
        b.iter(|| black_box(step.transform(black_box(&corpus))))
    });

    group.bench_function("multi_word_tokenizer", |b| {
        let step = MultiWordTokenizer::from_phrases([
            "check engine",
            "check engine light",
            "oil change",
            "highway speed",
        ]);
        b.iter(|| black_box(step.transform(black_box(&corpus))))
    });

    group.finish();
}

/// Benchmark complete pipelines.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    let corpus = corpus_from_texts(generate_test_documents(1000));
    let sequential = full_pipeline();
    let parallel = full_pipeline().with_parallel(true);

    group.throughput(Throughput::Elements(1000));
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.run(black_box(&corpus))))
    });

    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.run(black_box(&corpus))))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_filters, bench_pipeline);
criterion_main!(benches);
