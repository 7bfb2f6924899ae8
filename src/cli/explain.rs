// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `--explain` report: every ranked file and sentence with its score.

use askdocs::Answer;

use super::display::{score_tone, truncate_text, Frame, Painter, Tone, BOX_WIDTH};

/// Width of the rank column: a right-aligned number plus two spaces.
const RANK_WIDTH: usize = 6;

/// Width of a right-aligned score.
const SCORE_WIDTH: usize = 10;

pub fn print_explain(answer: &Answer, corpus_dir: &str) {
    println!("{}", render(answer, corpus_dir, &Painter::for_stdout()));
}

/// Lay out the report for `answer`.
pub fn render(answer: &Answer, corpus_dir: &str, painter: &Painter) -> String {
    let mut frame = Frame::new(painter);
    let label_width = BOX_WIDTH - 10;

    frame.section("ASKDOCS");
    let corpus = truncate_text(corpus_dir, label_width);
    frame.row(&[(Tone::Muted, "  corpus  "), (Tone::Text, corpus.as_str())]);
    let terms = truncate_text(&answer.query.iter().collect::<Vec<_>>().join(" "), label_width);
    frame.row(&[(Tone::Muted, "  terms   "), (Tone::Text, terms.as_str())]);

    frame.section("FILES (TF-IDF)");
    if answer.files.is_empty() {
        frame.row(&[(Tone::Muted, "  no files ranked")]);
    }
    let best_file = answer.files.first().map_or(0.0, |file| file.score);
    let name_width = BOX_WIDTH - RANK_WIDTH - SCORE_WIDTH;
    for (i, file) in answer.files.iter().enumerate() {
        let name = format!("{:<name_width$}", truncate_text(&file.id, name_width - 2));
        frame.row(&[
            (Tone::Muted, rank(i).as_str()),
            (Tone::Text, name.as_str()),
            (score_tone(file.score, best_file), score(file.score).as_str()),
        ]);
    }

    frame.section("SENTENCES (IDF, QTD)");
    if answer.sentences.is_empty() {
        frame.row(&[(Tone::Muted, "  no candidate sentences")]);
    }
    let best_idf = answer.sentences.first().map_or(0.0, |s| s.matched_idf);
    let best_density = answer.sentences.iter().map(|s| s.density).fold(0.0, f64::max);
    let indent = " ".repeat(RANK_WIDTH);
    for (i, sentence) in answer.sentences.iter().enumerate() {
        let terms = format!("  terms {}", sentence.matched_terms);
        frame.row(&[
            (Tone::Muted, rank(i).as_str()),
            (Tone::Muted, "idf"),
            (score_tone(sentence.matched_idf, best_idf), score(sentence.matched_idf).as_str()),
            (Tone::Muted, "  qtd"),
            (score_tone(sentence.density, best_density), score(sentence.density).as_str()),
            (Tone::Muted, terms.as_str()),
        ]);
        let text = truncate_text(&sentence.text, BOX_WIDTH - RANK_WIDTH - 2);
        frame.row(&[(Tone::Text, indent.as_str()), (Tone::Text, text.as_str())]);
    }

    frame.finish()
}

fn rank(index: usize) -> String {
    format!("{:>4}  ", index + 1)
}

fn score(value: f64) -> String {
    format!("{:>width$.4}", value, width = SCORE_WIDTH)
}
