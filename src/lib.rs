// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Answer questions from a folder of text files.
//!
//! Files are ranked against the query with TF-IDF. The sentences of the best
//! files are then ranked by the summed IDF of the query words they contain,
//! with query term density as the tiebreaker, and the best sentence is the
//! answer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │ tokenize/   │────▶│  types.rs    │────▶│  scoring/            │
//! │ (tokenize,  │     │ (Document,   │     │  idf.rs      IDF     │
//! │  stop words)│     │  Query,      │     │  files.rs    TF-IDF  │
//! └─────────────┘     │  IdfTable)   │     │  sentences.rs IDF+QTD│
//!        ▲            └──────────────┘     └──────────────────────┘
//!        │                                            │
//! ┌─────────────┐                          ┌──────────────────────┐
//! │  corpus/    │─────────────────────────▶│    pipeline.rs       │
//! │ (load_files,│                          │ (Answerer, Answer)   │
//! │  sentences) │                          └──────────────────────┘
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use askdocs::{Answerer, Corpus, Query, RankOptions};
//!
//! let corpus: Corpus = [("doc1", "The cat sat. The dog ran fast.")].into_iter().collect();
//! let answerer = Answerer::new(corpus);
//! let answer = answerer.ask(&Query::parse("cat"), &RankOptions::default());
//!
//! assert_eq!(answer.sentence_texts().collect::<Vec<_>>(), ["The cat sat."]);
//! ```

// Module declarations
pub mod corpus;
mod error;
mod pipeline;
pub mod scoring;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use corpus::{load_files, sentence_documents, split_sentences, Corpus};
pub use error::{Error, Result};
pub use pipeline::{answer, Answer, Answerer, RankOptions, FILE_MATCHES, SENTENCE_MATCHES};
pub use scoring::{compute_idfs, rank_files, rank_sentences, top_files, top_sentences};
pub use tokenize::{is_punctuation_token, is_stop_word, tokenize, STOP_WORD_COUNT};
pub use types::{Document, FileScore, IdfTable, Query, SentenceScore};
