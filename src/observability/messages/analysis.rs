// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for string analysis.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Analysis of a submitted string is starting.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct AnalysisStarted {
    pub input_length: usize,
}

impl Display for AnalysisStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Analyzing string of {} bytes", self.input_length)
    }
}

impl StructuredLog for AnalysisStarted {
    fn log(&self) {
        tracing::debug!(input_length = self.input_length, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("analysis", name = name, input_length = self.input_length)
    }
}

/// A string was analyzed.
///
/// # Log Level
/// `debug!` - Per-request detail
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::analysis::AnalysisCompleted;
/// use std::time::Duration;
///
/// let msg = AnalysisCompleted {
///     content_hash: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
///     length: 5,
///     is_palindrome: false,
///     duration: Duration::from_micros(12),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct AnalysisCompleted<'a> {
    pub content_hash: &'a str,
    pub length: usize,
    pub is_palindrome: bool,
    pub duration: Duration,
}

impl Display for AnalysisCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Analyzed string {}: length={}, palindrome={}, duration={:?}",
            self.content_hash, self.length, self.is_palindrome, self.duration
        )
    }
}

impl StructuredLog for AnalysisCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            content_hash = self.content_hash,
            length = self.length,
            is_palindrome = self.is_palindrome,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "analysis",
            name = name,
            content_hash = self.content_hash,
            length = self.length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_span_carries_input_length() {
        let span = AnalysisStarted { input_length: 5 }.span("analyze");
        let metadata = span.metadata().unwrap();

        assert_eq!(metadata.name(), "analysis");
        assert!(metadata.fields().field("input_length").is_some());
    }
}
