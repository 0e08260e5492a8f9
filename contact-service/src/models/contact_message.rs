use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const CONTACT_COLLECTION: &str = "contactmessage";

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl ContactMessage {
    /// Normalized record as handed to the document store. Unset optional fields are left out.
    pub fn to_document(&self) -> Result<Document, AppError> {
        bson::to_document(self).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize contact message: {}", e))
        })
    }
}
