// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::analysis::CharacterProperties;
use crate::errors::StoreError;
use crate::observability::messages::{storage::*, StructuredLog};
use crate::query::FilterCriteria;
use crate::storage::{collect_matching, StoredAnalysis};
use crate::traits::AnalysisStore;

/// In-memory store keyed by raw value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, StoredAnalysis>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn insert(
        &self,
        value: String,
        properties: CharacterProperties,
    ) -> Result<StoredAnalysis, StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&value) {
            DuplicateRecord { id: &properties.content_hash }.log();
            return Err(StoreError::AlreadyExists { value });
        }

        let record = StoredAnalysis::new(value.clone(), properties);
        records.insert(value, record.clone());

        RecordStored {
            id: &record.id,
            length: record.properties.length,
        }
        .log();
        Ok(record)
    }

    async fn fetch(&self, value: &str) -> Result<Option<StoredAnalysis>, StoreError> {
        Ok(self.records.read().await.get(value).cloned())
    }

    async fn fetch_all(&self, criteria: &FilterCriteria) -> Result<Vec<StoredAnalysis>, StoreError> {
        let records = self.records.read().await;
        Ok(collect_matching(&records, criteria))
    }

    async fn delete(&self, value: &str) -> Result<bool, StoreError> {
        let removed = self.records.write().await.remove(value);
        if let Some(record) = &removed {
            RecordDeleted { id: &record.id }.log();
        }
        Ok(removed.is_some())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use std::sync::Arc;

    async fn seeded(values: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        for value in values {
            store.insert(value.to_string(), analyze(value)).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let store = MemoryStore::new();

        let record = store.insert("hello".to_string(), analyze("hello")).await.unwrap();
        assert_eq!(record.id, analyze("hello").content_hash);
        assert_eq!(record.value, "hello");

        let fetched = store.fetch("hello").await.unwrap();
        assert_eq!(fetched, Some(record));
        assert_eq!(store.fetch("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_value_is_rejected() {
        let store = seeded(&["hello"]).await;

        let result = store.insert("hello".to_string(), analyze("hello")).await;
        assert!(matches!(result, Err(StoreError::AlreadyExists { value }) if value == "hello"));
    }

    #[tokio::test]
    async fn test_fetch_all_applies_criteria() {
        let store = seeded(&["racecar", "hello world", "level", "noon at night"]).await;

        let palindromes = store
            .fetch_all(&FilterCriteria {
                is_palindrome: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        let mut values: Vec<&str> = palindromes.iter().map(|r| r.value.as_str()).collect();
        values.sort();
        assert_eq!(values, vec!["level", "racecar"]);

        let everything = store.fetch_all(&FilterCriteria::default()).await.unwrap();
        assert_eq!(everything.len(), 4);
    }

    #[tokio::test]
    async fn test_fetch_all_orders_by_creation() {
        let store = seeded(&["b", "a", "c"]).await;

        let records = store.fetch_all(&FilterCriteria::default()).await.unwrap();
        for pair in records.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let store = seeded(&["hello"]).await;

        assert!(store.delete("hello").await.unwrap());
        assert!(!store.delete("hello").await.unwrap());
        assert_eq!(store.fetch("hello").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_value_admit_one() {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert("same".to_string(), analyze("same")).await.is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
