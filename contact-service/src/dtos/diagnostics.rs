use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const ENV_SET: &str = "✅ Set";
pub const ENV_NOT_SET: &str = "❌ Not Set";

/// Body of `GET /test`. Every field is a human-readable status; failures never propagate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn env_status(present: bool) -> String {
    let status = if present { ENV_SET } else { ENV_NOT_SET };
    status.to_string()
}
