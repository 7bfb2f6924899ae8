// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::types::Document;

/// The two-sentence corpus used in the docs and the end-to-end tests.
pub const CAT_DOG_TEXT: &str = "The cat sat. The dog ran fast.";

/// Build a corpus from (id, text) pairs.
pub fn make_corpus(entries: &[(&str, &str)]) -> Corpus {
    entries.iter().copied().collect()
}

/// Tokenize (id, text) pairs into documents, keeping input order.
pub fn make_documents(entries: &[(&str, &str)]) -> Vec<Document> {
    entries
        .iter()
        .map(|(id, text)| Document::from_text(*id, text))
        .collect()
}

/// Tokenize sentences into documents keyed by their own text.
pub fn make_sentences(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .map(|text| Document::from_text(*text, text))
        .collect()
}

/// A small encyclopedia-style corpus with overlapping vocabulary.
pub fn sample_corpus() -> Corpus {
    make_corpus(&[
        (
            "python",
            "Python is a high-level programming language.\n\
             Python was created by Guido van Rossum and first released in 1991.\n\
             Its design philosophy emphasizes code readability.",
        ),
        (
            "rust",
            "Rust is a systems programming language focused on safety.\n\
             Rust was originally designed by Graydon Hoare at Mozilla Research.\n\
             The borrow checker enforces memory safety without a garbage collector.",
        ),
        (
            "neural_network",
            "A neural network is a model inspired by the brain.\n\
             Neural networks learn weights through backpropagation.\n\
             Deep learning uses neural networks with many layers.",
        ),
    ])
}
