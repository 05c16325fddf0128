// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ValidationError;
use crate::query::FilterCriteria;

/// Validate a structured filter, reporting the first violated rule.
///
/// Rules are checked in this order:
///
/// 1. `min_length` is non-negative
/// 2. `max_length` is non-negative
/// 3. `min_length <= max_length` when both are set
/// 4. `word_count` is non-negative
/// 5. `contains_character` is exactly one character
///
/// # Example
/// ```
/// use string_analyzer::errors::ValidationError;
/// use string_analyzer::query::{validate, FilterCriteria};
///
/// let criteria = FilterCriteria {
///     min_length: Some(10),
///     max_length: Some(5),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     validate(&criteria),
///     Err(ValidationError::MinLengthExceedsMaxLength { min_length: 10, max_length: 5 })
/// );
/// ```
pub fn validate(criteria: &FilterCriteria) -> Result<(), ValidationError> {
    if let Some(min_length) = criteria.min_length {
        if min_length < 0 {
            return Err(ValidationError::NegativeMinLength { min_length });
        }
    }

    if let Some(max_length) = criteria.max_length {
        if max_length < 0 {
            return Err(ValidationError::NegativeMaxLength { max_length });
        }
    }

    if let (Some(min_length), Some(max_length)) = (criteria.min_length, criteria.max_length) {
        if min_length > max_length {
            return Err(ValidationError::MinLengthExceedsMaxLength {
                min_length,
                max_length,
            });
        }
    }

    if let Some(word_count) = criteria.word_count {
        if word_count < 0 {
            return Err(ValidationError::NegativeWordCount { word_count });
        }
    }

    if let Some(value) = &criteria.contains_character {
        if value.chars().count() != 1 {
            return Err(ValidationError::InvalidContainsCharacter {
                value: value.clone(),
            });
        }
    }

    Ok(())
}
