// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the HTTP server lifecycle.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tracing::Span;

/// The listener is bound and serving.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::server::ServerStarted;
///
/// let msg = ServerStarted {
///     addr: "127.0.0.1:8000".parse().unwrap(),
///     storage_backend: "memory",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ServerStarted<'a> {
    pub addr: SocketAddr,
    pub storage_backend: &'a str,
}

impl Display for ServerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "String analyzer listening on {} ({} storage)",
            self.addr, self.storage_backend
        )
    }
}

impl StructuredLog for ServerStarted<'_> {
    fn log(&self) {
        tracing::info!(
            addr = %self.addr,
            storage_backend = self.storage_backend,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "server",
            name = name,
            addr = %self.addr,
            storage_backend = self.storage_backend,
        )
    }
}

/// Graceful shutdown was requested.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ShutdownRequested;

impl Display for ShutdownRequested {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Shutdown signal received, draining connections")
    }
}

impl StructuredLog for ShutdownRequested {
    fn log(&self) {
        tracing::info!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", name = name)
    }
}

/// A request failed with a server-side error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RequestFailed<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RequestFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.error)
    }
}

impl StructuredLog for RequestFailed<'_> {
    fn log(&self) {
        tracing::error!(
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "server",
            name = name,
            operation = self.operation,
        )
    }
}
