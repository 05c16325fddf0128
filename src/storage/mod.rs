// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Persistence backends for analyzed strings.
//!
//! # Available Backends
//!
//! * [`MemoryStore`] - process-local map, lost on restart
//! * [`FileStore`] - the same map, mirrored to a JSON snapshot after every write
//!
//! Both implement [`AnalysisStore`](crate::traits::AnalysisStore) and are
//! built from configuration by [`StoreFactory`].

mod factory;
mod file;
mod memory;
mod record;

pub use factory::StoreFactory;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::StoredAnalysis;

use std::collections::HashMap;

use crate::query::FilterCriteria;

/// Records matching `criteria`, ordered by `created_at` then value.
pub(crate) fn collect_matching(
    records: &HashMap<String, StoredAnalysis>,
    criteria: &FilterCriteria,
) -> Vec<StoredAnalysis> {
    let mut matching: Vec<StoredAnalysis> = records
        .values()
        .filter(|record| criteria.matches(&record.value, &record.properties))
        .cloned()
        .collect();

    matching.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.value.cmp(&b.value))
    });
    matching
}
