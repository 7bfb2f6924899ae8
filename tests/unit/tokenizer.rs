//! Tokenizer behavior on prose.

use askdocs::{is_punctuation_token, is_stop_word, tokenize, STOP_WORD_COUNT};

#[test]
fn test_sentence_with_stop_words() {
    assert_eq!(tokenize("The cat sat on the mat."), vec!["cat", "sat", "mat"]);
}

#[test]
fn test_order_and_repeats_survive() {
    assert_eq!(tokenize("cat dog cat"), vec!["cat", "dog", "cat"]);
}

#[test]
fn test_case_is_folded() {
    assert_eq!(tokenize("PYTHON Python python"), vec!["python"; 3]);
    assert_eq!(tokenize("CAFÉ"), vec!["café"]);
}

#[test]
fn test_whitespace_of_any_kind() {
    assert_eq!(tokenize("cat\n\tdog\r\n  bird"), vec!["cat", "dog", "bird"]);
    assert!(tokenize("   \n\t ").is_empty());
    assert!(tokenize("").is_empty());
}

#[test]
fn test_punctuation_is_split_off_and_dropped() {
    assert_eq!(tokenize("Hello, world!!!"), vec!["hello", "world"]);
    assert_eq!(tokenize("high-level"), vec!["high", "level"]);
    assert!(tokenize("... ?! -- ;").is_empty());
}

#[test]
fn test_unicode_punctuation_is_dropped() {
    assert_eq!(tokenize("«quote» — “text”"), vec!["quote", "text"]);
    assert_eq!(tokenize("¿dónde?"), vec!["dónde"]);
}

#[test]
fn test_possessives_reduce_to_the_stem() {
    assert_eq!(tokenize("Python's design"), vec!["python", "design"]);
    assert_eq!(tokenize("Python’s design"), vec!["python", "design"]);
    assert_eq!(tokenize("Python's"), tokenize("Python"));
}

#[test]
fn test_symbols_are_dropped() {
    assert_eq!(tokenize("© 1991 Guido"), vec!["1991", "guido"]);
    assert!(tokenize("§§ € °").is_empty());
}

#[test]
fn test_contracted_stop_words_are_dropped() {
    assert!(tokenize("don't").is_empty());
    assert!(tokenize("Don’t").is_empty());
    assert!(tokenize("it's").is_empty());
}

#[test]
fn test_numbers_are_terms() {
    assert_eq!(tokenize("released in 1991"), vec!["released", "1991"]);
    assert_eq!(tokenize("pi is 3.14"), vec!["pi", "3.14"]);
}

#[test]
fn test_diacritics_are_kept() {
    assert_eq!(tokenize("naïve café"), vec!["naïve", "café"]);
}

#[test]
fn test_question_words_are_stop_words() {
    assert_eq!(tokenize("Who created Python?"), vec!["created", "python"]);
    assert!(tokenize("What is it?").is_empty());
}

#[test]
fn test_stop_word_list() {
    assert_eq!(STOP_WORD_COUNT, 179);
    for word in ["the", "a", "is", "who", "what", "how", "don't", "ourselves"] {
        assert!(is_stop_word(word), "{} should be a stop word", word);
    }
    for word in ["cat", "python", "created", "neural"] {
        assert!(!is_stop_word(word), "{} should not be a stop word", word);
    }
}

#[test]
fn test_punctuation_token() {
    assert!(is_punctuation_token("."));
    assert!(is_punctuation_token("—"));
    assert!(is_punctuation_token("…"));
    assert!(!is_punctuation_token("a."));
    assert!(!is_punctuation_token("1"));
    assert!(!is_punctuation_token(""));
}
