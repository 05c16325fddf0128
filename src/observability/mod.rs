// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic and operational log lines in the service go through the
//! message types in [`messages`]. Each message is a small struct with a
//! `Display` implementation for the human-readable text and a
//! [`messages::StructuredLog`] implementation that emits the same event with
//! structured fields at a fixed level. Call sites never format log strings
//! inline.
//!
//! # Usage
//!
//! ```rust
//! use string_analyzer::observability::messages::{query::QueryRejected, StructuredLog};
//!
//! let msg = QueryRejected {
//!     query: "strings longer than five",
//!     reason: "Could not extract any valid filters from the query",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
