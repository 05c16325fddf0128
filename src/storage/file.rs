// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::analysis::CharacterProperties;
use crate::errors::StoreError;
use crate::observability::messages::{storage::*, StructuredLog};
use crate::query::FilterCriteria;
use crate::storage::{collect_matching, StoredAnalysis};
use crate::traits::AnalysisStore;

/// Store that keeps records in memory and mirrors them to a JSON snapshot.
///
/// The snapshot is a JSON array of [`StoredAnalysis`] records. It is read
/// once by [`FileStore::open`] and rewritten after every insert or delete,
/// while the write lock is held, so the file always reflects a committed
/// state. A write that fails to persist is rolled back in memory.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: RwLock<HashMap<String, StoredAnalysis>>,
}

impl FileStore {
    /// Open the snapshot at `path`. A missing file yields an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => {
                let list: Vec<StoredAnalysis> = serde_json::from_slice(&bytes)?;
                list.into_iter()
                    .map(|record| (record.value.clone(), record))
                    .collect()
            }
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        SnapshotLoaded {
            path: &path,
            record_count: records.len(),
        }
        .log();

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &HashMap<String, StoredAnalysis>) -> Result<(), StoreError> {
        let mut list: Vec<&StoredAnalysis> = records.values().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.value.cmp(&b.value)));
        let bytes = serde_json::to_vec_pretty(&list)?;

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }

    fn report_write_failure(&self, error: &StoreError) {
        SnapshotWriteFailed {
            path: &self.path,
            error,
        }
        .log();
    }
}

#[async_trait]
impl AnalysisStore for FileStore {
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
        records.insert(value.clone(), record.clone());

        if let Err(e) = self.persist(&records).await {
            records.remove(&value);
            self.report_write_failure(&e);
            return Err(e);
        }

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
        let mut records = self.records.write().await;
        let Some(record) = records.remove(value) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&records).await {
            records.insert(record.value.clone(), record);
            self.report_write_failure(&e);
            return Err(e);
        }

        RecordDeleted { id: &record.id }.log();
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
