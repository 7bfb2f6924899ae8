// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the askdocs command-line interface.
//!
//! One positional argument, the corpus directory. The query comes from
//! `--query` or, when that is absent, from one line typed at the `Query:`
//! prompt. Output is the answer sentences verbatim, a scored breakdown with
//! `--explain`, or the whole answer as JSON with `--json`.

pub mod display;
pub mod explain;

use std::path::PathBuf;

use askdocs::{RankOptions, FILE_MATCHES, SENTENCE_MATCHES};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "askdocs",
    about = "Answer a question from a directory of .txt files",
    version
)]
pub struct Cli {
    /// Directory containing the .txt corpus files
    pub corpus: PathBuf,

    /// Query text (prompts on stdin when omitted)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of top-ranked files whose sentences are considered
    #[arg(short, long, default_value_t = FILE_MATCHES)]
    pub files: usize,

    /// Number of sentences to print
    #[arg(short, long, default_value_t = SENTENCE_MATCHES)]
    pub sentences: usize,

    /// Show ranked files and sentences with their scores
    #[arg(long, conflicts_with = "json")]
    pub explain: bool,

    /// Print the full answer as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            file_matches: self.files,
            sentence_matches: self.sentences,
        }
    }
}
