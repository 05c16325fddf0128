// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::analysis::CharacterProperties;

/// Structured filter over stored analyses. Every field is optional.
///
/// Numeric fields are signed so that out-of-range values reach
/// [`validate`](super::validate) instead of failing deserialization with a
/// less useful message.
///
/// # Example
/// ```
/// use string_analyzer::query::FilterCriteria;
///
/// let criteria = FilterCriteria {
///     is_palindrome: Some(true),
///     word_count: Some(1),
///     ..Default::default()
/// };
///
/// assert_eq!(criteria.filter_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterCriteria {
    /// Number of fields that are set. A field holding `0` or `false` counts.
    pub fn filter_count(&self) -> usize {
        [
            self.is_palindrome.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.word_count.is_some(),
            self.contains_character.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.filter_count() == 0
    }

    /// True when a stored string satisfies every set field.
    ///
    /// * `is_palindrome`, `word_count`: equality
    /// * `min_length`, `max_length`: inclusive bounds on `length`
    /// * `contains_character`: substring of the raw value
    pub fn matches(&self, value: &str, properties: &CharacterProperties) -> bool {
        let length = properties.length as i64;
        let word_count = properties.word_count as i64;

        self.is_palindrome.map_or(true, |p| properties.is_palindrome == p)
            && self.min_length.map_or(true, |min| length >= min)
            && self.max_length.map_or(true, |max| length <= max)
            && self.word_count.map_or(true, |wc| word_count == wc)
            && self
                .contains_character
                .as_deref()
                .map_or(true, |needle| value.contains(needle))
    }
}
