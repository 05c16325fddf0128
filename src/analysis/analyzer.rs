// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Deterministic properties computed for a single string.
///
/// `length`, `unique_characters` and `character_frequency` look at the raw
/// input exactly as given. `is_palindrome` looks at a cleaned form that keeps
/// only alphanumerics, lower-cased. The two normalizations are intentionally
/// different.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    #[serde(rename = "character_frequency_map")]
    pub character_frequency: BTreeMap<char, usize>,
}

/// Analyze a string and compute its properties.
///
/// Never fails; the empty string is a palindrome with zero length and zero
/// words. Callers that must reject blank input do so before calling.
pub fn analyze(raw: &str) -> CharacterProperties {
    let mut character_frequency: BTreeMap<char, usize> = BTreeMap::new();
    let mut length = 0;
    for c in raw.chars() {
        *character_frequency.entry(c).or_insert(0) += 1;
        length += 1;
    }

    CharacterProperties {
        length,
        is_palindrome: is_palindrome(raw),
        unique_characters: character_frequency.len(),
        word_count: raw.split_whitespace().count(),
        content_hash: content_hash(raw),
        character_frequency,
    }
}

/// Palindrome check over the alphanumeric, lower-cased form of `raw`.
pub fn is_palindrome(raw: &str) -> bool {
    // to_lowercase can expand one char into several (e.g. 'İ'), so flatten
    let cleaned: Vec<char> = raw
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `raw`.
pub fn content_hash(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    format!("{:x}", digest)
}
