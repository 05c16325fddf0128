// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `analysis` - string analysis events
//! * `query` - filter validation and natural-language interpretation
//! * `storage` - record persistence and snapshot handling
//! * `server` - HTTP lifecycle and request outcomes

use tracing::Span;

pub mod analysis;
pub mod query;
pub mod server;
pub mod storage;

/// Emits a message as a `tracing` event or span with structured fields.
///
/// The level is fixed per message type and documented on the type.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
