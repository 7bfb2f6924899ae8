//! Tokenizer invariants.
//!
//! - Tokens are lowercase
//! - No stop words and no punctuation-only tokens survive
//! - Tokenizing never produces more tokens than word-boundary segments
//! - Tokenizing the joined output gives the same tokens back

use askdocs::{is_punctuation_token, is_stop_word, tokenize};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Prose-like ASCII: words, digits, common punctuation, mixed whitespace.
fn prose_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 .,;:!?'\"()\\-\n\t]{0,80}").unwrap()
}

/// Sentences built from a fixed vocabulary that includes stop words.
fn vocabulary_sentence_strategy() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "The", "cat", "sat", "on", "the", "mat", "Who", "created", "Python", "is", "it's",
        "don't", "Python's", "Rust’s", "1991", "neural", "networks", "learn", "A", "and", "of", "fast",
    ]);
    let separators = prop::sample::select(vec![" ", ", ", ". ", "! ", "? ", "\n", " - "]);
    prop::collection::vec((words, separators), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, sep)| format!("{}{}", word, sep))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every token is already lowercase.
    #[test]
    fn prop_tokens_are_lowercase(text in prose_strategy()) {
        for token in tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    /// Property: filters leave no stop words and no bare punctuation.
    #[test]
    fn prop_filters_hold(text in prose_strategy()) {
        for token in tokenize(&text) {
            prop_assert!(!is_stop_word(&token), "stop word {:?} survived", token);
            prop_assert!(!is_punctuation_token(&token), "punctuation {:?} survived", token);
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    /// Property: each token comes from exactly one word-boundary segment.
    #[test]
    fn prop_at_most_one_token_per_segment(text in prose_strategy()) {
        let segments = text.split_word_bounds().count();
        prop_assert!(tokenize(&text).len() <= segments);
    }

    /// Property: re-tokenizing the joined tokens is a fixed point.
    #[test]
    fn prop_tokenize_is_idempotent(text in vocabulary_sentence_strategy()) {
        let tokens = tokenize(&text);
        prop_assert_eq!(tokenize(&tokens.join(" ")), tokens);
    }

    /// Property: case never changes the tokens.
    #[test]
    fn prop_case_insensitive(text in prose_strategy()) {
        prop_assert_eq!(tokenize(&text.to_uppercase()), tokenize(&text));
    }
}
