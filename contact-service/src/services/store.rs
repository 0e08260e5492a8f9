use async_trait::async_trait;
use mongodb::bson::{Bson, DateTime, Document};
use service_core::error::AppError;

/// Schema-flexible persistence addressed by collection name.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `data` with fresh `created_at`/`updated_at` stamps and returns the generated id.
    async fn create_document(&self, collection: &str, data: Document) -> Result<String, AppError>;

    /// Returns at most `limit` records matching `filter`, newest first.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError>;

    fn database_name(&self) -> Option<String>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

pub(crate) fn stamp_timestamps(data: &mut Document) {
    let now = DateTime::now();
    data.insert("created_at", now);
    data.insert("updated_at", now);
}

/// Renders a store-generated identifier as a plain string.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
