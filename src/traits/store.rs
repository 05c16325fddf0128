// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::analysis::CharacterProperties;
use crate::errors::StoreError;
use crate::query::FilterCriteria;
use crate::storage::StoredAnalysis;

/// Persistence seam for analyzed strings.
///
/// Records are unique on their raw value. Implementations own their own
/// concurrency control: `insert` must check and apply uniqueness atomically.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Store a new record, stamping `created_at`.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if `value` is already stored.
    async fn insert(
        &self,
        value: String,
        properties: CharacterProperties,
    ) -> Result<StoredAnalysis, StoreError>;

    /// Look up a record by its raw value.
    async fn fetch(&self, value: &str) -> Result<Option<StoredAnalysis>, StoreError>;

    /// All records matching `criteria`, oldest first.
    async fn fetch_all(&self, criteria: &FilterCriteria) -> Result<Vec<StoredAnalysis>, StoreError>;

    /// Remove a record by its raw value. Returns whether anything was removed.
    async fn delete(&self, value: &str) -> Result<bool, StoreError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}
