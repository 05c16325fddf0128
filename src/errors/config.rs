// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating service configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Environment variable {name} has invalid value '{value}'")]
    InvalidEnv { name: String, value: String },

    /// One or more semantic checks failed; every problem is listed.
    #[error("Configuration validation failed:\n{}", .problems.join("\n"))]
    Invalid { problems: Vec<String> },
}
