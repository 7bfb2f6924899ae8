// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for askdocs.
//!
//! Only corpus loading can fail. The ranking core has no error paths; its
//! degenerate cases are handled with fallback weights and empty results.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a corpus from disk.
#[derive(Error, Debug)]
pub enum Error {
    /// The corpus path does not exist or is not a directory
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A directory or file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file is not valid UTF-8
    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// The directory holds no `.txt` files
    #[error("no .txt files found in {}", path.display())]
    EmptyCorpus { path: PathBuf },
}

impl Error {
    /// Classify an I/O error from reading `path`.
    ///
    /// `read_to_string` reports bad UTF-8 as `InvalidData`; that gets its own
    /// variant so the message says what is actually wrong.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::Encoding { path }
        } else {
            Self::Io { path, source }
        }
    }
}
