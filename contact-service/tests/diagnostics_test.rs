mod common;

use axum::http::StatusCode;
use common::TestApp;
use contact_service::config::DatabaseConfig;
use contact_service::services::{DocumentStore, InMemoryStore};
use mongodb::bson::doc;

#[tokio::test]
async fn reports_missing_configuration_without_failing() {
    let app = TestApp::without_database();

    let (status, body) = app.get("/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn reports_working_database_with_collections() {
    let store = InMemoryStore::new(common::TEST_DATABASE);
    for i in 0..12 {
        store
            .create_document(&format!("collection_{:02}", i), doc! { "n": i })
            .await
            .unwrap();
    }
    let app = TestApp::with_store(store, common::configured_database());

    let (status, body) = app.get("/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");

    let collections = body["collections"].as_array().unwrap();
    assert_eq!(collections.len(), 10);
    assert_eq!(collections[0], "collection_00");
}

#[tokio::test]
async fn unreachable_database_is_reported_not_raised() {
    let reason = "Server selection timeout: No available servers. Topology: Unknown";
    let app = TestApp::with_store(
        InMemoryStore::unavailable(common::TEST_DATABASE, reason),
        DatabaseConfig {
            url: Some("mongodb://unreachable:27017".to_string()),
            name: None,
        },
    );

    let (status, body) = app.get("/test").await;

    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    let detail = database
        .strip_prefix("⚠️  Connected but Error: ")
        .expect("database status should describe the error");
    assert_eq!(detail.chars().count(), 50);
    assert!(detail.starts_with("Database error: Server selection timeout"));
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], serde_json::json!([]));
}
