// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors produced while validating structured filters and interpreting
//! natural-language queries.

use thiserror::Error;

/// A structured filter combination violates a field constraint.
///
/// Each variant names the offending field and the rule it broke. The
/// `Display` output is what callers surface to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("min_length must be non-negative")]
    NegativeMinLength { min_length: i64 },

    #[error("max_length must be non-negative")]
    NegativeMaxLength { max_length: i64 },

    #[error("min_length cannot be greater than max_length")]
    MinLengthExceedsMaxLength { min_length: i64, max_length: i64 },

    #[error("word_count must be non-negative")]
    NegativeWordCount { word_count: i64 },

    #[error("contains_character must be a single character")]
    InvalidContainsCharacter { value: String },
}

/// A natural-language query could not be reduced to a usable filter.
///
/// `EmptyQuery` and `NoFiltersExtracted` mean the query was unparseable;
/// `ConflictingFilters` means filters were extracted but failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Could not extract any valid filters from the query")]
    NoFiltersExtracted,

    #[error(transparent)]
    ConflictingFilters(#[from] ValidationError),
}

impl ParseError {
    /// True when the query was understood but produced an invalid combination.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ParseError::ConflictingFilters(_))
    }
}
