use axum::{response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "Agency API is running" }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not Found"))
}
