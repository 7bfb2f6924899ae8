//! Loading corpora from disk.

use crate::common::{write_corpus, write_file, FIXTURES_DIR, PYTHON_CREATOR_SENTENCE};
use askdocs::{load_files, Error};
use tempfile::TempDir;

#[test]
fn test_fixture_corpus_ids() {
    let corpus = load_files(FIXTURES_DIR).unwrap();
    let ids: Vec<&str> = corpus.iter().map(|(id, _)| id).collect();
    // README.md and archive/python_history.txt are skipped.
    assert_eq!(ids, vec!["neural_network", "python", "rust"]);
}

#[test]
fn test_text_is_kept_verbatim() {
    let corpus = load_files(FIXTURES_DIR).unwrap();
    let python = corpus.get("python").unwrap();
    assert!(python.starts_with("Python is a high-level"));
    assert!(python.contains(PYTHON_CREATOR_SENTENCE));
    assert!(python.contains('\n'));
}

#[test]
fn test_identifier_drops_only_the_last_extension() {
    let dir = write_corpus(&[("my.notes.txt", "Notes."), ("plain.txt", "Plain.")]);
    let corpus = load_files(dir.path()).unwrap();
    assert_eq!(corpus.get("my.notes"), Some("Notes."));
    assert_eq!(corpus.get("plain"), Some("Plain."));
}

#[test]
fn test_empty_txt_file_is_loaded() {
    let dir = write_corpus(&[("empty.txt", ""), ("full.txt", "Cats purr.")]);
    let corpus = load_files(dir.path()).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.get("empty"), Some(""));
}

#[test]
fn test_directory_named_like_a_corpus_file_is_skipped() {
    let dir = write_corpus(&[("real.txt", "Real text.")]);
    write_file(dir.path(), "fake.txt/inner.txt", b"Nested.");
    let corpus = load_files(dir.path()).unwrap();
    assert_eq!(corpus.len(), 1);
    assert!(corpus.get("fake").is_none());
    assert!(corpus.get("inner").is_none());
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = load_files(&missing).unwrap_err();
    assert!(matches!(err, Error::NotADirectory { ref path } if *path == missing));
}

#[test]
fn test_file_instead_of_directory() {
    let dir = write_corpus(&[("a.txt", "text")]);
    let err = load_files(dir.path().join("a.txt")).unwrap_err();
    assert!(matches!(err, Error::NotADirectory { .. }));
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let err = load_files(dir.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus { .. }));
    assert!(err.to_string().starts_with("no .txt files found in"));
}

#[test]
fn test_directory_without_txt_files() {
    let dir = write_corpus(&[("notes.md", "# Notes"), ("data.csv", "a,b")]);
    let err = load_files(dir.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus { .. }));
}

#[test]
fn test_invalid_utf8() {
    let dir = write_corpus(&[("good.txt", "Fine.")]);
    write_file(dir.path(), "bad.txt", &[0x66, 0x6f, 0xff, 0xfe, 0x6f]);
    let err = load_files(dir.path()).unwrap_err();
    match err {
        Error::Encoding { path } => assert_eq!(path, dir.path().join("bad.txt")),
        other => panic!("expected encoding error, got {:?}", other),
    }
}
