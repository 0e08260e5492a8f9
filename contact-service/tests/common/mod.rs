#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use contact_service::config::{ContactConfig, DatabaseConfig};
use contact_service::services::{DocumentStore, InMemoryStore};
use contact_service::startup::{build_router, AppState};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_DATABASE: &str = "agency_test";

pub fn test_config(database: DatabaseConfig) -> ContactConfig {
    ContactConfig {
        common: CoreConfig { port: 0 },
        database,
        log_level: "error".to_string(),
        otlp_endpoint: None,
    }
}

pub fn configured_database() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some(TEST_DATABASE.to_string()),
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Option<Arc<InMemoryStore>>,
}

impl TestApp {
    /// Router backed by an empty in-memory store.
    pub fn spawn() -> Self {
        Self::with_store(InMemoryStore::new(TEST_DATABASE), configured_database())
    }

    pub fn with_store(store: InMemoryStore, database: DatabaseConfig) -> Self {
        let store = Arc::new(store);
        let dyn_store: Arc<dyn DocumentStore> = store.clone();
        let state = AppState::new(test_config(database), Some(dyn_store));
        Self {
            router: build_router(state),
            store: Some(store),
        }
    }

    /// Router with no database configured at all.
    pub fn without_database() -> Self {
        let state = AppState::new(test_config(DatabaseConfig::default()), None);
        Self {
            router: build_router(state),
            store: None,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };
        (status, body)
    }
}
