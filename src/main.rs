// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use askdocs::{load_files, Answerer, Query};

mod cli;
use cli::explain::print_explain;
use cli::Cli;

/// Env var holding the tracing filter, e.g. `ASKDOCS_LOG=askdocs=debug`.
const LOG_ENV: &str = "ASKDOCS_LOG";

fn main() {
    init_tracing();

    // Usage errors exit non-zero through clap.
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let corpus = load_files(&cli.corpus)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;
    let answerer = Answerer::new(corpus);

    let query_text = match &cli.query {
        Some(text) => text.clone(),
        None => prompt_query()?,
    };
    let query = Query::parse(&query_text);
    let answer = answerer.ask(&query, &cli.rank_options());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
        return Ok(());
    }

    if query.is_empty() {
        eprintln!("⚠️  Query has no searchable words once stop words are removed");
        return Ok(());
    }

    if cli.explain {
        print_explain(&answer, &cli.corpus.display().to_string());
    } else {
        for sentence in answer.sentence_texts() {
            println!("{}", sentence);
        }
    }

    Ok(())
}

/// Read one line of query text from stdin after a `Query: ` prompt.
fn prompt_query() -> Result<String> {
    print!("Query: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query from stdin")?;
    if read == 0 {
        bail!("no query given on stdin");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
