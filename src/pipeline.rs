// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end question answering over a loaded corpus.
//!
//! ```text
//! Corpus ──tokenize_files──▶ files ──compute_idfs──▶ file IDF      (once, in Answerer::new)
//!
//! Query ──rank_files──▶ top files ──sentence_documents──▶ sentences
//!                                                            │
//!                                  compute_idfs (sentences) ─┤
//!                                                            ▼
//!                                            rank_sentences ──▶ Answer
//! ```
//!
//! The file-level work depends only on the corpus, so [`Answerer`] does it
//! once and can answer any number of queries. The sentence-level IDF table
//! depends on which files won, so it is rebuilt per query.

use serde::Serialize;
use tracing::debug;

use crate::corpus::{sentence_documents, Corpus};
use crate::scoring::ranking::take_top;
use crate::scoring::{compute_idfs, rank_files, rank_sentences};
use crate::types::{Document, FileScore, IdfTable, Query, SentenceScore};

/// Default number of files whose sentences become candidates.
pub const FILE_MATCHES: usize = 1;

/// Default number of sentences returned.
pub const SENTENCE_MATCHES: usize = 1;

/// How many files and sentences to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
        }
    }
}

/// The result of one query: ranked files and ranked sentences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub query: Query,
    pub files: Vec<FileScore>,
    pub sentences: Vec<SentenceScore>,
}

impl Answer {
    /// The answer sentences, best first.
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A corpus with its file-level tokens and IDF table precomputed.
#[derive(Debug, Clone)]
pub struct Answerer {
    corpus: Corpus,
    files: Vec<Document>,
    idfs: IdfTable,
}

impl Answerer {
    pub fn new(corpus: Corpus) -> Self {
        let files = corpus.tokenize_files();
        let idfs = compute_idfs(&files);
        debug!(
            files = files.len(),
            vocabulary = idfs.len(),
            "indexed corpus"
        );
        Self {
            corpus,
            files,
            idfs,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Tokenized files, in identifier order.
    pub fn files(&self) -> &[Document] {
        &self.files
    }

    /// IDF table over whole files.
    pub fn file_idfs(&self) -> &IdfTable {
        &self.idfs
    }

    /// Answer a query.
    ///
    /// An empty query (all stop words) or an empty corpus gives an empty answer.
    pub fn ask(&self, query: &Query, options: &RankOptions) -> Answer {
        let files = take_top(
            rank_files(query, &self.files, &self.idfs),
            options.file_matches,
        );

        let sentences =
            sentence_documents(files.iter().filter_map(|file| self.corpus.get(&file.id)));
        let sentence_idfs = compute_idfs(&sentences);
        let ranked = take_top(
            rank_sentences(query, &sentences, &sentence_idfs),
            options.sentence_matches,
        );

        debug!(
            terms = query.len(),
            files = files.len(),
            candidates = sentences.len(),
            answers = ranked.len(),
            "answered query"
        );

        Answer {
            query: query.clone(),
            files,
            sentences: ranked,
        }
    }

    /// Tokenize `text` as a query and answer it.
    pub fn ask_text(&self, text: &str, options: &RankOptions) -> Answer {
        self.ask(&Query::parse(text), options)
    }
}

/// One-shot convenience: index `corpus` and answer a single query.
pub fn answer(corpus: Corpus, query: &Query, options: &RankOptions) -> Answer {
    Answerer::new(corpus).ask(query, options)
}
