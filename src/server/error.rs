// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::{ParseError, StoreError, ValidationError};
use crate::observability::messages::{server::RequestFailed, StructuredLog};

/// Standardised API error response.
///
/// Every error returned by the HTTP layer serialises as:
/// ```json
/// { "detail": "<message>", "code": "<code>" }
/// ```
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
    pub code: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                detail: detail.into(),
                code: code.into(),
            },
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", detail)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity", detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "conflict", detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { .. } => Self::conflict(err.to_string()),
            StoreError::Io { .. } | StoreError::Serialization(_) => {
                RequestFailed {
                    operation: "storage",
                    error: &err,
                }
                .log();
                Self::internal("Storage failure")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        if err.is_conflict() {
            Self::unprocessable(format!(
                "Query parsed but resulted in conflicting filters: {}",
                err
            ))
        } else {
            Self::bad_request(format!("Unable to parse natural language query: {}", err))
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let code = match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable_entity",
            StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
            StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
            _ => "bad_request",
        };
        Self::new(rejection.status(), code, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_split_by_category() {
        let conflict: ApiError = ParseError::ConflictingFilters(ValidationError::NegativeMaxLength {
            max_length: -1,
        })
        .into();
        assert_eq!(conflict.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            conflict.body.detail,
            "Query parsed but resulted in conflicting filters: max_length must be non-negative"
        );

        let unparseable: ApiError = ParseError::NoFiltersExtracted.into();
        assert_eq!(unparseable.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            unparseable.body.detail,
            "Unable to parse natural language query: Could not extract any valid filters from the query"
        );
    }

    #[test]
    fn test_store_errors() {
        let conflict: ApiError = StoreError::AlreadyExists {
            value: "hello".to_string(),
        }
        .into();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(conflict.body.detail, "String already exists in the system");

        let io: ApiError = StoreError::Io {
            path: "strings.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
