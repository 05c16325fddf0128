// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::StoreError;
use crate::storage::{FileStore, MemoryStore};
use crate::traits::AnalysisStore;

/// Factory for creating the configured store.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store from configuration.
    ///
    /// - `memory` -> [`MemoryStore`]
    /// - `file` -> [`FileStore`] at `storage.path` (validated to be present)
    pub async fn from_config(config: &StorageConfig) -> Result<Arc<dyn AnalysisStore>, StoreError> {
        match config.backend {
            StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
            StorageBackend::File => {
                let path = config.snapshot_path();
                Ok(Arc::new(FileStore::open(path).await?))
            }
        }
    }
}
