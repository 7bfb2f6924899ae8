// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how files and sentences get their numbers.
//!
//! Two passes share one IDF formula. Files are ranked by TF-IDF against an IDF
//! table computed over all files. Sentences from the winning files are then
//! ranked by the IDF of the query words they contain, with an IDF table
//! recomputed over just those sentences, and query term density breaking ties.

mod core;
mod files;
mod idf;
pub mod ranking;
mod sentences;

pub use self::core::*;
pub use files::{file_score, rank_files, top_files};
pub use idf::compute_idfs;
pub use sentences::{rank_sentences, sentence_score, top_sentences};
