// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::CharacterProperties;

/// A persisted analysis. The `id` is the content hash of `value`.
///
/// Serializes to the same shape the HTTP API returns:
///
/// ```json
/// {
///   "id": "2cf24d...",
///   "value": "hello",
///   "properties": { "length": 5, "is_palindrome": false, ... },
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: String,
    pub value: String,
    pub properties: CharacterProperties,
    pub created_at: DateTime<Utc>,
}

impl StoredAnalysis {
    /// Build a record stamped with the current time.
    pub fn new(value: String, properties: CharacterProperties) -> Self {
        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
