// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for filter validation and natural-language query handling.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A natural-language query arrived for interpretation.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct QueryReceived<'a> {
    pub query: &'a str,
}

impl Display for QueryReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Interpreting query '{}'", self.query)
    }
}

impl StructuredLog for QueryReceived<'_> {
    fn log(&self) {
        tracing::debug!(query = self.query, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("query", name = name, query = self.query)
    }
}

/// A natural-language query was reduced to structured filters.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::query::QueryInterpreted;
///
/// let msg = QueryInterpreted {
///     query: "single word palindromes",
///     filter_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct QueryInterpreted<'a> {
    pub query: &'a str,
    pub filter_count: usize,
}

impl Display for QueryInterpreted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interpreted query '{}' into {} filters",
            self.query, self.filter_count
        )
    }
}

impl StructuredLog for QueryInterpreted<'_> {
    fn log(&self) {
        tracing::info!(
            query = self.query,
            filter_count = self.filter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "query",
            name = name,
            query = self.query,
            filter_count = self.filter_count,
        )
    }
}

/// A natural-language query could not be used.
///
/// # Log Level
/// `warn!` - Client supplied something we could not act on
pub struct QueryRejected<'a> {
    pub query: &'a str,
    pub reason: &'a str,
}

impl Display for QueryRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected query '{}': {}", self.query, self.reason)
    }
}

impl StructuredLog for QueryRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            query = self.query,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "query",
            name = name,
            query = self.query,
            reason = self.reason,
        )
    }
}

/// A length cue was present but its operand could not be parsed, so the cue
/// was skipped.
///
/// # Log Level
/// `debug!` - Heuristic detail
pub struct LengthCueSkipped<'a> {
    pub cue: &'a str,
    pub operand: Option<&'a str>,
}

impl Display for LengthCueSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.operand {
            Some(operand) => write!(f, "Skipped '{}' cue: '{}' is not an integer", self.cue, operand),
            None => write!(f, "Skipped '{}' cue: no operand follows 'than'", self.cue),
        }
    }
}

impl StructuredLog for LengthCueSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            cue = self.cue,
            operand = self.operand.unwrap_or(""),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("query", name = name, cue = self.cue)
    }
}

/// Structured filters failed validation.
///
/// # Log Level
/// `warn!` - Client supplied an invalid combination
pub struct FilterValidationFailed<'a> {
    pub reason: &'a str,
}

impl Display for FilterValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Filter validation failed: {}", self.reason)
    }
}

impl StructuredLog for FilterValidationFailed<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("query", name = name, reason = self.reason)
    }
}
