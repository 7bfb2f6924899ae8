// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence ranking by matched IDF, then query term density.
//!
//! Unlike file ranking this is presence-based: a query word either occurs in
//! the sentence or it doesn't, and repeats don't matter. The IDF table here is
//! computed over the candidate sentences, not over whole files.

use super::core::MISSING_SENTENCE_IDF;
use super::ranking::{compare_sentences, take_top};
use crate::types::{Document, IdfTable, Query, SentenceScore};

/// Ranking key for one sentence, or `None` if it has no tokens.
///
/// Query words missing from `idfs` contribute 0 to the matched IDF sum but
/// still count toward density if the sentence contains them.
pub fn sentence_score(query: &Query, sentence: &Document, idfs: &IdfTable) -> Option<SentenceScore> {
    if sentence.is_empty() {
        return None;
    }

    let mut matched_idf = 0.0;
    let mut matched_terms = 0usize;
    for term in query.iter().filter(|term| sentence.contains(term)) {
        matched_idf += idfs.weight_or(term, MISSING_SENTENCE_IDF);
        matched_terms += 1;
    }

    Some(SentenceScore {
        text: sentence.id.clone(),
        matched_idf,
        density: matched_terms as f64 / sentence.len() as f64,
        matched_terms,
    })
}

/// Score every non-empty sentence and sort best first.
///
/// Sentences that match nothing are kept (with a zero key) below every
/// matching one. Equal keys keep input order. An empty query yields nothing.
pub fn rank_sentences(
    query: &Query,
    sentences: &[Document],
    idfs: &IdfTable,
) -> Vec<SentenceScore> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<SentenceScore> = sentences
        .iter()
        .filter_map(|sentence| sentence_score(query, sentence, idfs))
        .collect();

    // Stable: input order is the final tiebreaker.
    ranked.sort_by(compare_sentences);
    ranked
}

/// Text of the `n` best sentences for `query`.
pub fn top_sentences(
    query: &Query,
    sentences: &[Document],
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    take_top(rank_sentences(query, sentences, idfs), n)
        .into_iter()
        .map(|sentence| sentence.text)
        .collect()
}
