// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response bodies for the strings API.

use serde::{Deserialize, Serialize};

use crate::query::FilterCriteria;
use crate::storage::StoredAnalysis;

/// Body of `POST /strings`.
#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    pub value: String,
}

/// Query string of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: String,
}

/// Body of `GET /strings`.
///
/// `filters_applied` is `null` when the request carried no filters.
#[derive(Debug, Serialize)]
pub struct StringList {
    pub data: Vec<StoredAnalysis>,
    pub count: usize,
    pub filters_applied: Option<FilterCriteria>,
}

#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterCriteria,
}

/// Body of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StoredAnalysis>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}
