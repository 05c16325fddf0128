// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record persistence.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// A record was inserted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordStored<'a> {
    pub id: &'a str,
    pub length: usize,
}

impl Display for RecordStored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stored analysis {} (length={})", self.id, self.length)
    }
}

impl StructuredLog for RecordStored<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, length = self.length, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("storage", name = name, id = self.id)
    }
}

/// An insert was refused because the raw value already exists.
///
/// # Log Level
/// `warn!` - Client conflict
pub struct DuplicateRecord<'a> {
    pub id: &'a str,
}

impl Display for DuplicateRecord<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Analysis {} already exists", self.id)
    }
}

impl StructuredLog for DuplicateRecord<'_> {
    fn log(&self) {
        tracing::warn!(id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("storage", name = name, id = self.id)
    }
}

/// A record was deleted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordDeleted<'a> {
    pub id: &'a str,
}

impl Display for RecordDeleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Deleted analysis {}", self.id)
    }
}

impl StructuredLog for RecordDeleted<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("storage", name = name, id = self.id)
    }
}

/// A snapshot file was loaded at startup.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SnapshotLoaded<'a> {
    pub path: &'a Path,
    pub record_count: usize,
}

impl Display for SnapshotLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} analyses from {}",
            self.record_count,
            self.path.display()
        )
    }
}

impl StructuredLog for SnapshotLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            record_count = self.record_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "storage",
            name = name,
            path = %self.path.display(),
            record_count = self.record_count,
        )
    }
}

/// Writing the snapshot file failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SnapshotWriteFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for SnapshotWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to write snapshot {}: {}",
            self.path.display(),
            self.error
        )
    }
}

impl StructuredLog for SnapshotWriteFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = %self.path.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "storage",
            name = name,
            path = %self.path.display(),
            error = %self.error,
        )
    }
}
