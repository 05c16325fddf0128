// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP surface of the string analyzer.
//!
//! | Method | Path | |
//! |--------|------|-|
//! | GET | `/health` | liveness |
//! | POST | `/strings` | analyze and store |
//! | GET | `/strings` | structured filter |
//! | GET | `/strings/filter-by-natural-language` | natural-language filter |
//! | GET | `/strings/:value` | lookup by raw value |
//! | DELETE | `/strings/:value` | delete by raw value |

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::consts::DEFAULT_CORS_ORIGIN;
use crate::config::ServerConfig;
use crate::observability::messages::{server::*, StructuredLog};
use crate::traits::AnalysisStore;

pub mod error;
mod handlers;
pub mod types;

pub use error::ApiError;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: Arc<dyn AnalysisStore>,
}

/// Build the application router.
///
/// `cors_allowed_origins` containing `*` allows any origin; otherwise only
/// the listed origins are allowed. Unparseable origins are skipped here and
/// rejected earlier by config validation.
pub fn router(store: Arc<dyn AnalysisStore>, cors_allowed_origins: &[String]) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route("/health", get(health))
        .route(
            "/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .with_state(state)
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == DEFAULT_CORS_ORIGIN) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health() -> &'static str {
    "ok"
}

/// A running server with a handle for graceful shutdown.
pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl Server {
    /// Bind the configured address and start serving in a background task.
    pub async fn start(config: &ServerConfig, store: Arc<dyn AnalysisStore>) -> std::io::Result<Self> {
        let backend = store.name();
        let app = router(store, &config.get_cors_allowed_origins());

        let listener = TcpListener::bind((config.get_host(), config.get_port())).await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        ServerStarted {
            addr,
            storage_backend: backend,
        }
        .log();

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal shutdown and wait for in-flight requests to drain.
    pub async fn shutdown(mut self) -> std::io::Result<()> {
        ShutdownRequested.log();
        if let Some(sender) = self.shutdown.take() {
            let _ = sender.send(());
        }
        match self.task.take() {
            Some(task) => task.await.map_err(std::io::Error::other)?,
            None => Ok(()),
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        if let Some(sender) = self.shutdown.take() {
            let _ = sender.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(MemoryStore::new()), &["*".to_string()])
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    async fn create(app: &Router, value: &str) -> (StatusCode, Value) {
        send(app, Method::POST, "/strings", Some(json!({ "value": value }))).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("ok"));
    }

    #[tokio::test]
    async fn test_create_returns_full_record() {
        let app = app();

        let (status, body) = create(&app, "racecar").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["value"], "racecar");
        assert_eq!(body["id"], body["properties"]["sha256_hash"]);
        assert_eq!(body["properties"]["length"], 7);
        assert_eq!(body["properties"]["is_palindrome"], true);
        assert_eq!(body["properties"]["unique_characters"], 4);
        assert_eq!(body["properties"]["word_count"], 1);
        assert_eq!(body["properties"]["character_frequency_map"]["r"], 2);
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_trims_value() {
        let app = app();

        let (status, body) = create(&app, "  hello  ").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["value"], "hello");
        assert_eq!(body["properties"]["length"], 5);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_and_malformed_bodies() {
        let app = app();

        let (status, body) = create(&app, "   ").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "String value cannot be empty");

        let (status, _) = send(&app, Method::POST, "/strings", Some(json!({ "value": 42 }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::POST, "/strings", Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let app = app();

        create(&app, "hello").await;
        let (status, body) = create(&app, "hello").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["detail"], "String already exists in the system");
        assert_eq!(body["code"], "conflict");
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let app = app();
        create(&app, "hello world").await;

        let (status, body) = send(&app, Method::GET, "/strings/hello%20world", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["properties"]["word_count"], 2);

        let (status, _) = send(&app, Method::DELETE, "/strings/hello%20world", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/strings/hello%20world", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "String does not exist in the system");

        let (status, _) = send(&app, Method::DELETE, "/strings/hello%20world", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let app = app();
        for value in ["racecar", "level", "hello world", "a man a plan"] {
            create(&app, value).await;
        }

        let (status, body) = send(&app, Method::GET, "/strings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 4);
        assert_eq!(body["filters_applied"], Value::Null);

        let (status, body) = send(
            &app,
            Method::GET,
            "/strings?is_palindrome=true&min_length=6&contains_character=r",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["value"], "racecar");
        assert_eq!(
            body["filters_applied"],
            json!({ "is_palindrome": true, "min_length": 6, "contains_character": "r" })
        );
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_filters() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/strings?min_length=10&max_length=5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "min_length cannot be greater than max_length");

        let (status, body) = send(&app, Method::GET, "/strings?contains_character=ab", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "contains_character must be a single character");

        let (status, _) = send(&app, Method::GET, "/strings?min_length=ten", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_natural_language_filter() {
        let app = app();
        for value in ["racecar", "noon", "hello", "never odd or even"] {
            create(&app, value).await;
        }

        let (status, body) = send(
            &app,
            Method::GET,
            "/strings/filter-by-natural-language?query=single%20word%20palindromes",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["interpreted_query"]["original"], "single word palindromes");
        assert_eq!(
            body["interpreted_query"]["parsed_filters"],
            json!({ "is_palindrome": true, "word_count": 1 })
        );
    }

    #[tokio::test]
    async fn test_natural_language_errors() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::GET,
            "/strings/filter-by-natural-language?query=strings%20longer%20than%20five",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Unable to parse natural language query"));

        let (status, body) = send(
            &app,
            Method::GET,
            "/strings/filter-by-natural-language?query=longer%20than%2010%20and%20shorter%20than%205",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Query parsed but resulted in conflicting filters"));

        let (status, _) = send(&app, Method::GET, "/strings/filter-by-natural-language?query=", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_server_binds_random_port_and_shuts_down() {
        let config = ServerConfig {
            host: Some("127.0.0.1".to_string()),
            port: Some(0),
            cors_allowed_origins: None,
        };

        let server = Server::start(&config, Arc::new(MemoryStore::new())).await.unwrap();
        assert_ne!(server.addr().port(), 0);
        server.shutdown().await.unwrap();
    }
}
