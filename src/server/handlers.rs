// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Handlers for the `/strings` endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::analysis::analyze;
use crate::observability::messages::{analysis::*, query::*, StructuredLog};
use crate::query::{interpret, validate, FilterCriteria};
use crate::server::error::ApiError;
use crate::server::types::*;
use crate::server::AppState;
use crate::storage::StoredAnalysis;

const EMPTY_VALUE: &str = "String value cannot be empty";
const NOT_FOUND: &str = "String does not exist in the system";

/// POST /strings
///
/// Trims, analyzes and stores a new string.
pub(crate) async fn create_string(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateStringRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredAnalysis>), ApiError> {
    let Json(request) = payload?;

    let value = request.value.trim();
    if value.is_empty() {
        return Err(ApiError::unprocessable(EMPTY_VALUE));
    }

    let properties = {
        let start_msg = AnalysisStarted {
            input_length: value.len(),
        };
        let span = start_msg.span("analyze");
        let _guard = span.enter();
        start_msg.log();

        let start = Instant::now();
        let properties = analyze(value);
        AnalysisCompleted {
            content_hash: &properties.content_hash,
            length: properties.length,
            is_palindrome: properties.is_palindrome,
            duration: start.elapsed(),
        }
        .log();
        properties
    };

    let record = state.store.insert(value.to_string(), properties).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:value
pub(crate) async fn get_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Result<Json<StoredAnalysis>, ApiError> {
    state
        .store
        .fetch(&value)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// GET /strings
///
/// Lists stored strings matching the structured filters in the query string.
pub(crate) async fn list_strings(
    State(state): State<Arc<AppState>>,
    params: Result<Query<FilterCriteria>, QueryRejection>,
) -> Result<Json<StringList>, ApiError> {
    let Query(criteria) = params?;

    if let Err(e) = validate(&criteria) {
        FilterValidationFailed { reason: &e.to_string() }.log();
        return Err(e.into());
    }

    let data = state.store.fetch_all(&criteria).await?;
    let filters_applied = (!criteria.is_empty()).then_some(criteria);

    Ok(Json(StringList {
        count: data.len(),
        data,
        filters_applied,
    }))
}

/// GET /strings/filter-by-natural-language?query=...
pub(crate) async fn filter_by_natural_language(
    State(state): State<Arc<AppState>>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Query(NaturalLanguageParams { query }) = params?;

    let criteria = {
        let start_msg = QueryReceived { query: &query };
        let span = start_msg.span("interpret");
        let _guard = span.enter();
        start_msg.log();

        match interpret(&query) {
            Ok(criteria) => {
                QueryInterpreted {
                    query: &query,
                    filter_count: criteria.filter_count(),
                }
                .log();
                criteria
            }
            Err(e) => {
                QueryRejected {
                    query: &query,
                    reason: &e.to_string(),
                }
                .log();
                return Err(e.into());
            }
        }
    };

    let data = state.store.fetch_all(&criteria).await?;

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters: criteria,
        },
    }))
}

/// DELETE /strings/:value
pub(crate) async fn delete_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&value).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(NOT_FOUND))
    }
}
