// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Semantic checks on a parsed [`Config`].
//!
//! All problems are collected and reported together so an operator can fix
//! a config file in one pass.

use axum::http::HeaderValue;
use tracing_subscriber::EnvFilter;

use crate::config::consts::DEFAULT_CORS_ORIGIN;
use crate::config::{Config, StorageBackend};
use crate::errors::ConfigError;

/// Validate a configuration.
///
/// Checks:
/// * `server.port` is not 0
/// * `server.cors_allowed_origins` is non-empty and every entry is `*` or a
///   valid header value
/// * `storage.path` is not empty when the file backend is selected
/// * `logging.level` parses as a tracing filter directive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut problems = Vec::new();

    if config.server.get_port() == 0 {
        problems.push("server.port must be non-zero".to_string());
    }

    let origins = config.server.get_cors_allowed_origins();
    if origins.is_empty() {
        problems.push("server.cors_allowed_origins must list at least one origin".to_string());
    }
    for origin in &origins {
        if origin != DEFAULT_CORS_ORIGIN && HeaderValue::from_str(origin).is_err() {
            problems.push(format!("server.cors_allowed_origins contains invalid origin '{}'", origin));
        }
    }

    if config.storage.backend == StorageBackend::File
        && config.storage.snapshot_path().as_os_str().is_empty()
    {
        problems.push("storage.path must not be empty for the file backend".to_string());
    }

    if let Err(e) = EnvFilter::try_new(config.logging.get_level()) {
        problems.push(format!(
            "logging.level '{}' is not a valid filter: {}",
            config.logging.get_level(),
            e
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { problems })
    }
}
