// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF file ranking.
//!
//! Every query term touches every file. An absent term still contributes
//! `idf × 1 / len`, so when nothing matches the shortest file ranks first.
//!
//! With the `parallel` feature the per-file scores are computed with rayon.
//! Each file is scored independently and the results are merged before the
//! sort, so the ranking is identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::{term_frequency, MISSING_IDF_WEIGHT};
use super::ranking::{compare_files, take_top};
use crate::types::{Document, FileScore, IdfTable, Query};

/// TF-IDF score of one file against a query.
///
/// A file with no tokens scores 0.
pub fn file_score(query: &Query, file: &Document, idfs: &IdfTable) -> f64 {
    if file.is_empty() {
        return 0.0;
    }
    query
        .iter()
        .map(|term| {
            let tf = term_frequency(file.count(term), file.len());
            idfs.weight_or(term, MISSING_IDF_WEIGHT) * tf
        })
        .sum()
}

/// Score every file and sort best first (ties by identifier).
///
/// An empty query has nothing to rank and yields no files.
pub fn rank_files(query: &Query, files: &[Document], idfs: &IdfTable) -> Vec<FileScore> {
    if query.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let iter = files.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = files.iter();

    let mut ranked: Vec<FileScore> = iter
        .map(|file| FileScore {
            id: file.id.clone(),
            score: file_score(query, file, idfs),
        })
        .collect();

    ranked.sort_by(compare_files);
    ranked
}

/// Identifiers of the `n` files most relevant to `query`.
///
/// Returns `min(n, files.len())` identifiers (none for an empty query).
pub fn top_files(query: &Query, files: &[Document], idfs: &IdfTable, n: usize) -> Vec<String> {
    take_top(rank_files(query, files, idfs), n)
        .into_iter()
        .map(|file| file.id)
        .collect()
}
