// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stop words loaded from data/stopwords_en.txt, one per line.
///
/// This is the standard NLTK English list, contraction forms included.
/// Entries are already lowercase so lookups run against normalized tokens.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("../../data/stopwords_en.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

/// Number of entries in the stop word list.
pub const STOP_WORD_COUNT: usize = 179;

/// Check if a normalized token is an English stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
