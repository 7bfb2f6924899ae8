// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning raw text into ranking terms.
//!
//! Text is segmented on UAX #29 word boundaries, which keeps words and
//! punctuation marks as separate segments ("sat." becomes "sat" and "."). Each
//! segment is lowercased, then:
//!
//! 1. A segment that is an English stop word as a whole ("the", "don't") is
//!    dropped.
//! 2. A trailing clitic is split off at the last apostrophe ("python's" becomes
//!    "python" and "s"). Every clitic is itself a stop word, so only the stem
//!    survives.
//! 3. Stop words and tokens with no letter or digit (punctuation, symbols such
//!    as "©" or "€") are dropped.
//!
//! Order and repeats survive, because the file ranker counts occurrences.
//! Whitespace segments never reach the filters.
//!
//! Queries go through this same function, so a query word matches a document
//! token exactly when their normalized forms are equal.

mod stopwords;

pub use stopwords::{is_stop_word, STOP_WORD_COUNT};

use unicode_segmentation::UnicodeSegmentation;

/// Endings split off at an apostrophe: 's 're 've 'll 'd 'm and the t of n't.
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m", "t"];

/// Tokenize text into normalized ranking terms, in order, repeats included.
///
/// ```
/// use askdocs::tokenize;
///
/// assert_eq!(tokenize("The cat sat. The cat ran!"), ["cat", "sat", "cat", "ran"]);
/// assert_eq!(tokenize("Python's design"), ["python", "design"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        let token = normalize_token(segment);
        if is_stop_word(&token) {
            continue;
        }
        let (stem, clitic) = split_clitic(&token);
        for piece in std::iter::once(stem).chain(clitic) {
            if !is_stop_word(piece) && !is_punctuation_token(piece) {
                tokens.push(piece.to_string());
            }
        }
    }
    tokens
}

/// Lowercase a segment and fold the typographic apostrophe to ASCII.
///
/// Folding lets "Don’t" hit the same stop word entry as "don't".
fn normalize_token(segment: &str) -> String {
    segment
        .to_lowercase()
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect()
}

/// Split `token` into its stem and a trailing clitic, if it has one.
///
/// Only the last apostrophe counts, and only when a stem precedes it:
/// "rock'n'roll" and "'tis" stay whole.
fn split_clitic(token: &str) -> (&str, Option<&str>) {
    match token.rfind('\'') {
        Some(at) if at > 0 && CLITICS.contains(&&token[at + 1..]) => {
            (&token[..at], Some(&token[at + 1..]))
        }
        _ => (token, None),
    }
}

/// True when a non-empty token has no letter or digit in it.
///
/// Covers ASCII and Unicode punctuation (quotes, dashes, ellipses) as well as
/// symbols such as "©", "°" and "€", and emoji.
pub fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}
