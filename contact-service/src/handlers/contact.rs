use crate::dtos::{record_to_json, ContactListParams, SubmitContactResponse};
use crate::models::{ContactMessage, CONTACT_COLLECTION};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use mongodb::bson::Document;
use service_core::error::AppError;

pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactMessage>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store()?;
    let data = payload.to_document()?;

    let id = store
        .create_document(CONTACT_COLLECTION, data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store contact message");
            e
        })?;

    tracing::info!(contact_id = %id, "Contact message stored");

    Ok(Json(SubmitContactResponse { success: true, id }))
}

pub async fn list_contacts(
    State(state): State<AppState>,
    params: Result<Query<ContactListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!(
            "limit must be an integer: {}",
            e.body_text()
        ))
    })?;
    let store = state.store()?;
    let limit = params.effective_limit();

    let records = store
        .get_documents(CONTACT_COLLECTION, Document::new(), limit)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, limit = limit, "Failed to list contact messages");
            e
        })?;

    let contacts: Vec<serde_json::Value> = records.into_iter().map(record_to_json).collect();

    Ok(Json(contacts))
}
