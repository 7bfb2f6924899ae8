// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through the ranking pipeline.
//!
//! ```text
//! text ──tokenize──▶ Document ──compute_idfs──▶ IdfTable
//!                        │                         │
//!   query ──▶ Query ─────┴──────── rank_* ─────────┴──▶ FileScore / SentenceScore
//! ```
//!
//! # Invariants
//!
//! - **Document**: tokens are never mutated after tokenization. Every
//!   downstream stage only reads them.
//!
//! - **IdfTable**: every token of every document it was built from has an
//!   entry. Tokens outside that set have none, and callers must pick a
//!   fallback weight through [`IdfTable::weight_or`].
//!
//! - **Query**: a set. Duplicated query words count once.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::tokenize::tokenize;

/// A tokenized unit of text: a whole file or a single sentence.
///
/// For files `id` is the file stem; for sentences it is the sentence text
/// itself, which is what gets printed as the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }

    /// Tokenize `text` and attach it to `id`.
    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, tokenize(text))
    }

    /// Total token count (repeats included).
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Occurrences of `term` in this document.
    pub fn count(&self, term: &str) -> usize {
        self.tokens.iter().filter(|token| *token == term).count()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|token| token == term)
    }
}

/// Normalized query words with duplicates collapsed.
///
/// Backed by a `BTreeSet` so iteration order (and therefore floating point
/// summation order) is the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    /// Tokenize free text into a query, using the document tokenizer.
    pub fn parse(text: &str) -> Self {
        tokenize(text).into_iter().collect()
    }

    /// Build a query from already-normalized terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        terms.into_iter().map(Into::into).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Query {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// Inverse document frequency per token, computed over one document set.
///
/// File-level and sentence-level tables have the same shape but must never be
/// mixed. `doc_count` records how many documents the table was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    doc_count: usize,
}

impl IdfTable {
    pub(crate) fn from_parts(weights: HashMap<String, f64>, doc_count: usize) -> Self {
        Self { weights, doc_count }
    }

    /// IDF of `term`, or `None` when no document contained it.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// IDF of `term`, or `fallback` when no document contained it.
    #[inline]
    pub fn weight_or(&self, term: &str, fallback: f64) -> f64 {
        self.get(term).unwrap_or(fallback)
    }

    /// Number of distinct tokens with a weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of documents the table was computed over.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(term, idf)| (term.as_str(), *idf))
    }
}

/// TF-IDF relevance of one file to a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    pub id: String,
    pub score: f64,
}

/// Ranking key of one candidate sentence.
///
/// Sorted by `matched_idf` first; `density` only breaks ties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub text: String,
    /// Sum of IDF over the distinct query words present in the sentence.
    pub matched_idf: f64,
    /// Query term density: matched distinct query words / sentence token count.
    pub density: f64,
    pub matched_terms: usize,
}
