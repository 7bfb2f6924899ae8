// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind ranking.
//!
//! Two formulas and three fallback constants. Everything else in `scoring`
//! is bookkeeping around them.
//!
//! ```text
//! idf(N, df)          = 1 + ln(N / df)
//! tf(count, len)      = (count + 1) / len
//! file score          = Σ over query terms of idf(term) × tf(term)
//! ```
//!
//! # Constants
//!
//! | Constant                  | Value | Effect |
//! |---------------------------|-------|--------|
//! | `IDF_SMOOTHING`           | 1.0   | A term in every document still weighs 1, not 0 |
//! | `TERM_COUNT_SMOOTHING`    | 1     | An absent term still counts once (Laplace) |
//! | `MISSING_IDF_WEIGHT`      | 1.0   | File ranking: unseen query terms weigh 1 |
//! | `MISSING_SENTENCE_IDF`    | 0.0   | Sentence ranking: unseen query terms add nothing |
//!
//! These are fixed. They are not tuning knobs.

/// Added to every IDF so terms present in all documents keep a positive weight.
pub const IDF_SMOOTHING: f64 = 1.0;

/// Added to every raw term count before normalizing by document length.
pub const TERM_COUNT_SMOOTHING: usize = 1;

/// IDF used by the file ranker for query terms no file contains.
pub const MISSING_IDF_WEIGHT: f64 = 1.0;

/// IDF used by the sentence ranker for query terms no sentence contains.
pub const MISSING_SENTENCE_IDF: f64 = 0.0;

/// Inverse document frequency: `1 + ln(doc_count / doc_freq)`.
///
/// Requires `doc_freq >= 1` and `doc_freq <= doc_count`. When a term is in every
/// document the ratio is exactly 1, `ln` returns exactly 0, and the result is
/// exactly `IDF_SMOOTHING`.
#[inline]
pub fn inverse_document_frequency(doc_count: usize, doc_freq: usize) -> f64 {
    debug_assert!(doc_freq >= 1 && doc_freq <= doc_count);
    IDF_SMOOTHING + (doc_count as f64 / doc_freq as f64).ln()
}

/// Length-normalized, smoothed term frequency.
///
/// An absent term (`count == 0`) yields `1 / doc_len`, never zero. Returns 0
/// for an empty document instead of dividing by zero.
#[inline]
pub fn term_frequency(count: usize, doc_len: usize) -> f64 {
    if doc_len == 0 {
        return 0.0;
    }
    (count + TERM_COUNT_SMOOTHING) as f64 / doc_len as f64
}
