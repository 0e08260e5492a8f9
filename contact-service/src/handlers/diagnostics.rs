use crate::dtos::diagnostics::{env_status, DiagnosticsResponse, BACKEND_RUNNING};
use crate::startup::AppState;
use axum::{extract::State, Json};

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Reports whether the document store is configured and reachable. Never fails.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: BACKEND_RUNNING.to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_status(state.config.database.url.is_some()),
        database_name: env_status(state.config.database.name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match &state.store {
        Some(store) => {
            response.database = "✅ Available".to_string();
            response.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    response.collections = names;
                    response.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Database diagnostics could not list collections");
                    response.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
                    );
                }
            }

            tracing::info!(
                database = ?store.database_name(),
                status = %response.database,
                "Database diagnostics completed"
            );
        }
        None => {
            response.database = "⚠️  Available but not initialized".to_string();
        }
    }

    Json(response)
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
