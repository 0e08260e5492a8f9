use super::store::{id_to_string, stamp_timestamps, DocumentStore};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use service_core::error::AppError;

/// [`DocumentStore`] backed by a MongoDB database.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { db })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        mut data: Document,
    ) -> Result<String, AppError> {
        stamp_timestamps(&mut data);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(data, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1, "_id": -1 })
            .limit(limit)
            .build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, find_options)
            .await
            .map_err(AppError::from)?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(AppError::from)?;
        Ok(documents)
    }

    fn database_name(&self) -> Option<String> {
        Some(self.db.name().to_string())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }
}
