// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! String analysis engine.
//!
//! [`analyze`] turns any string into a [`CharacterProperties`] record. The
//! function is total and pure: the same input always yields the same record,
//! and concurrent callers need no coordination.

mod analyzer;

pub use analyzer::{analyze, content_hash, is_palindrome, CharacterProperties};
