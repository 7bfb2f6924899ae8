// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::core::inverse_document_frequency;
use crate::types::{Document, IdfTable};

/// Compute the IDF of every token observed in `documents`.
///
/// Document frequency counts each document once per token, however many
/// times the token repeats inside it. Tokens that appear in no document get
/// no entry. An empty document set yields an empty table.
pub fn compute_idfs(documents: &[Document]) -> IdfTable {
    let doc_count = documents.len();
    if doc_count == 0 {
        return IdfTable::default();
    }

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        let unique: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let weights: HashMap<String, f64> = doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), inverse_document_frequency(doc_count, df)))
        .collect();

    debug!(
        documents = doc_count,
        vocabulary = weights.len(),
        "computed idf table"
    );

    IdfTable::from_parts(weights, doc_count)
}
