// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::types::Document;

/// Titles that end in a period without ending the sentence.
const TITLES: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Mt", "Rev", "Gen", "Col", "Capt", "Lt",
    "Sgt", "Gov", "Sen", "Rep", "Hon",
];

/// Split text into sentences, paragraph first.
///
/// Each line is a passage; each passage is cut on UAX #29 sentence boundaries,
/// except after a title ("Dr.") or a single initial ("J."), where the cut is
/// undone. Sentences are trimmed, and pieces without a letter or digit are
/// dropped. A sentence never spans two lines.
///
/// ```
/// use askdocs::split_sentences;
///
/// assert_eq!(
///     split_sentences("The cat sat. The dog ran fast."),
///     ["The cat sat.", "The dog ran fast."]
/// );
/// assert_eq!(
///     split_sentences("Dr. Smith wrote Python. It is fast."),
///     ["Dr. Smith wrote Python.", "It is fast."]
/// );
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(passage_sentences)
        .map(str::trim)
        .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
        .collect()
}

/// UAX #29 sentences of one passage, rejoined across abbreviations.
fn passage_sentences(passage: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut pending: Option<usize> = None;

    for (offset, segment) in passage.split_sentence_bound_indices() {
        let start = pending.take().unwrap_or(offset);
        if ends_with_abbreviation(segment) {
            pending = Some(start);
        } else {
            sentences.push(&passage[start..offset + segment.len()]);
        }
    }
    if let Some(start) = pending {
        sentences.push(&passage[start..]);
    }
    sentences
}

/// True when the last word of `segment` is a title or an initial plus ".".
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(word) = segment.split_whitespace().next_back() else {
        return false;
    };
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    let mut chars = stem.chars();
    let single_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    single_initial || TITLES.contains(&stem)
}

/// Tokenize every sentence of `texts` into a candidate document.
///
/// The sentence text is the document id. Sentences with no tokens left after
/// filtering are discarded, and a sentence repeated verbatim is kept once, at
/// its first position.
pub fn sentence_documents<'a, I>(texts: I) -> Vec<Document>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut documents = Vec::new();

    for text in texts {
        for sentence in split_sentences(text) {
            if !seen.insert(sentence) {
                continue;
            }
            let doc = Document::from_text(sentence, sentence);
            if !doc.is_empty() {
                documents.push(doc);
            }
        }
    }

    debug!(sentences = documents.len(), "extracted candidate sentences");
    documents
}
