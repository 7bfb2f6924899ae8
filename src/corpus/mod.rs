// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a corpus from disk and cutting it into rankable units.
//!
//! A corpus is every `*.txt` file directly inside one directory, keyed by file
//! stem. Subdirectories and other extensions are skipped. Files are read in
//! parallel with the `parallel` feature; any read failure aborts the load.
//!
//! The corpus is kept in a `BTreeMap`, so iteration (and the tokenized file
//! list derived from it) is in identifier order.

mod sentences;

pub use sentences::{sentence_documents, split_sentences};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::Document;

/// Extension of corpus files.
pub const CORPUS_EXTENSION: &str = "txt";

/// Raw document text keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    files: BTreeMap<String, String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.files.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.files.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// (identifier, text) pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.files.iter().map(|(id, text)| (id.as_str(), text.as_str()))
    }

    /// Tokenize every file, in identifier order.
    pub fn tokenize_files(&self) -> Vec<Document> {
        #[cfg(feature = "parallel")]
        let iter = self.files.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = self.files.iter();

        iter.map(|(id, text)| Document::from_text(id.as_str(), text))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Corpus
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }
}

/// Load every `.txt` file directly inside `dir`.
///
/// Identifiers are file names without the extension. Fails on a missing
/// directory, an unreadable or non-UTF-8 file, or a directory with no `.txt`
/// files at all.
pub fn load_files(dir: impl AsRef<Path>) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let paths = corpus_paths(dir)?;
    if paths.is_empty() {
        return Err(Error::EmptyCorpus {
            path: dir.to_path_buf(),
        });
    }

    #[cfg(feature = "parallel")]
    let iter = paths.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = paths.iter();

    let files = iter
        .map(|(id, path)| {
            let text = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
            Ok((id.clone(), text))
        })
        .collect::<Result<BTreeMap<String, String>>>()?;

    debug!(directory = %dir.display(), files = files.len(), "loaded corpus");
    Ok(Corpus { files })
}

/// List (identifier, path) for every corpus file in `dir`.
fn corpus_paths(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::from_io(dir, e))?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(CORPUS_EXTENSION)
        {
            continue;
        }
        match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => paths.push((stem.to_string(), path.clone())),
            None => warn!(path = %path.display(), "skipping file with non-UTF-8 name"),
        }
    }

    paths.sort();
    Ok(paths)
}
