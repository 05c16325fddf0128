// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`AnalysisStore`](crate::traits::AnalysisStore) implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The raw string is already stored; uniqueness is keyed on the value.
    #[error("String already exists in the system")]
    AlreadyExists { value: String },

    /// Reading or writing the snapshot file failed.
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
