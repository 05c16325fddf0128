// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Natural-language query interpreter.
//!
//! The interpreter is a handful of keyword heuristics, not a grammar. Each
//! extraction looks for its own textual cue in the lower-cased, trimmed query:
//!
//! | Cue | Filter |
//! |-----|--------|
//! | `palindrom` anywhere | `is_palindrome = true` |
//! | `single word` / `one word`, `two words`, `three words` | `word_count` (first match wins) |
//! | `longer than N` / `more than N` | `min_length = N + 1` |
//! | `shorter than N` / `less than N` | `max_length = N - 1` |
//! | `containing` / `contains` / `with` / `has` + ` the letter X` | `contains_character = X` (first phrase wins) |
//!
//! A length cue whose operand is not a bare integer token is skipped
//! silently. The extracted criteria must set at least one field and must pass
//! [`validate`](super::validate).

use crate::errors::ParseError;
use crate::observability::messages::{query::LengthCueSkipped, StructuredLog};
use crate::query::{validate, FilterCriteria};

const PALINDROME_CUE: &str = "palindrom";
const THAN: &str = "than";
const LETTER_MARKER: &str = " the letter ";

/// Word-count cues, evaluated in order; the first cue with a matching phrase
/// wins and the rest are not consulted.
struct WordCountCue {
    phrases: &'static [&'static str],
    word_count: i64,
}

const WORD_COUNT_CUES: &[WordCountCue] = &[
    WordCountCue { phrases: &["single word", "one word"], word_count: 1 },
    WordCountCue { phrases: &["two words"], word_count: 2 },
    WordCountCue { phrases: &["three words"], word_count: 3 },
];

#[derive(Debug, Clone, Copy)]
enum LengthBound {
    /// Strictly greater than the operand.
    Min,
    /// Strictly less than the operand.
    Max,
}

struct LengthCue {
    phrases: &'static [&'static str],
    bound: LengthBound,
}

const LENGTH_CUES: &[LengthCue] = &[
    LengthCue { phrases: &["longer than", "more than"], bound: LengthBound::Min },
    LengthCue { phrases: &["shorter than", "less than"], bound: LengthBound::Max },
];

/// Character cue phrases in priority order.
const CHARACTER_PHRASES: &[&str] = &["containing", "contains", "with", "has"];

/// Interpret a free-text query as structured filters.
///
/// # Errors
/// * [`ParseError::EmptyQuery`] if `query` is the empty string
/// * [`ParseError::NoFiltersExtracted`] if no cue matched
/// * [`ParseError::ConflictingFilters`] if the extracted filters fail validation
///
/// # Example
/// ```
/// use string_analyzer::query::interpret;
///
/// let criteria = interpret("single word palindromes").unwrap();
/// assert_eq!(criteria.is_palindrome, Some(true));
/// assert_eq!(criteria.word_count, Some(1));
/// ```
pub fn interpret(query: &str) -> Result<FilterCriteria, ParseError> {
    if query.is_empty() {
        return Err(ParseError::EmptyQuery);
    }

    let normalized = query.to_lowercase();
    let normalized = normalized.trim();

    let mut criteria = FilterCriteria::default();

    if normalized.contains(PALINDROME_CUE) {
        criteria.is_palindrome = Some(true);
    }

    criteria.word_count = extract_word_count(normalized);

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    for cue in LENGTH_CUES {
        let Some(phrase) = cue.phrases.iter().find(|p| normalized.contains(*p)) else {
            continue;
        };
        if let Some(bound) = extract_length_bound(&tokens, cue, phrase) {
            match cue.bound {
                LengthBound::Min => criteria.min_length = Some(bound),
                LengthBound::Max => criteria.max_length = Some(bound),
            }
        }
    }

    criteria.contains_character = extract_character(normalized);

    if criteria.is_empty() {
        return Err(ParseError::NoFiltersExtracted);
    }

    validate(&criteria)?;

    Ok(criteria)
}

fn extract_word_count(query: &str) -> Option<i64> {
    WORD_COUNT_CUES
        .iter()
        .find(|cue| cue.phrases.iter().any(|phrase| query.contains(phrase)))
        .map(|cue| cue.word_count)
}

/// Parse the token after the first `than` in the query and turn it into a
/// bound. Every length cue reads the same operand, so a query carrying both
/// a lower and an upper cue yields bounds around one number.
fn extract_length_bound(tokens: &[&str], cue: &LengthCue, phrase: &str) -> Option<i64> {
    let than_index = tokens.iter().position(|token| *token == THAN);
    let operand = than_index.and_then(|i| tokens.get(i + 1)).copied();

    let parsed = operand.and_then(|token| token.parse::<i64>().ok());
    let bound = parsed.and_then(|n| match cue.bound {
        LengthBound::Min => n.checked_add(1),
        LengthBound::Max => n.checked_sub(1),
    });

    if bound.is_none() {
        LengthCueSkipped { cue: phrase, operand }.log();
    }

    bound
}

fn extract_character(query: &str) -> Option<String> {
    CHARACTER_PHRASES.iter().find_map(|phrase| {
        let marker = format!("{}{}", phrase, LETTER_MARKER);
        query
            .split(marker.as_str())
            .nth(1)
            .and_then(|segment| segment.chars().next())
            .map(|c| c.to_string())
    })
}
