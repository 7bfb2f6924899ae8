// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering helpers shared by the file and sentence rankers.
//!
//! Scores are non-negative and never NaN, so `f64::total_cmp` gives a total
//! order without `partial_cmp(..).unwrap()`.

use std::cmp::Ordering;

use crate::types::{FileScore, SentenceScore};

/// Compare two scores so that the larger one sorts first.
#[inline]
pub fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Compare two file scores for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Identifier** - ascending, so equal scores rank the same on every run
pub fn compare_files(a: &FileScore, b: &FileScore) -> Ordering {
    descending(a.score, b.score).then_with(|| a.id.cmp(&b.id))
}

/// Compare two candidate sentences for ranking.
///
/// Sort order:
/// 1. **Matched IDF** - descending
/// 2. **Query term density** - descending, only when matched IDF is equal
///
/// A strictly higher matched IDF always wins, whatever the densities are.
/// Sentences equal on both keys keep their input order when sorted stably.
pub fn compare_sentences(a: &SentenceScore, b: &SentenceScore) -> Ordering {
    descending(a.matched_idf, b.matched_idf).then_with(|| descending(a.density, b.density))
}

/// Keep the first `n` entries of an already-sorted ranking.
pub fn take_top<T>(mut ranked: Vec<T>, n: usize) -> Vec<T> {
    ranked.truncate(n);
    ranked
}
