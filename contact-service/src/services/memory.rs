//! In-process document store for tests and local runs without MongoDB.

use super::store::{stamp_timestamps, DocumentStore};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

pub struct InMemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
            failure: None,
        }
    }

    /// A store whose every operation fails with `reason`, as an unreachable backend would.
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new(name)
        }
    }

    fn check_available(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(reason) => Err(AppError::DatabaseError(anyhow::anyhow!(reason.clone()))),
            None => Ok(()),
        }
    }
}

fn matches_filter(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| record.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create_document(&self, collection: &str, data: Document) -> Result<String, AppError> {
        self.check_available()?;

        let id = ObjectId::new();
        let mut record = Document::new();
        record.insert("_id", id);
        for (key, value) in data {
            record.insert(key, value);
        }
        stamp_timestamps(&mut record);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        self.check_available()?;

        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        let records: Vec<Document> = collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .rev()
                    .filter(|record| matches_filter(record, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(records)
    }

    fn database_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check_available()?;
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn returns_newest_first_up_to_limit() {
        let store = InMemoryStore::new("agency");
        for i in 0..3 {
            store
                .create_document("contactmessage", doc! { "n": i })
                .await
                .unwrap();
        }

        let docs = store
            .get_documents("contactmessage", Document::new(), 2)
            .await
            .unwrap();
        let ns: Vec<i32> = docs.iter().map(|d| d.get_i32("n").unwrap()).collect();
        assert_eq!(ns, vec![2, 1]);
    }

    #[tokio::test]
    async fn generated_id_is_stored_as_object_id() {
        let store = InMemoryStore::new("agency");
        let id = store
            .create_document("contactmessage", doc! { "name": "Ada" })
            .await
            .unwrap();

        let docs = store
            .get_documents("contactmessage", doc! { "name": "Ada" }, 10)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_object_id("_id").unwrap().to_hex(), id);
        assert!(docs[0].get_datetime("created_at").is_ok());
    }

    #[tokio::test]
    async fn lists_collections_in_name_order() {
        let store = InMemoryStore::new("agency");
        store.create_document("zeta", doc! {}).await.unwrap();
        store.create_document("alpha", doc! {}).await.unwrap();

        assert_eq!(
            store.list_collection_names().await.unwrap(),
            vec!["alpha".to_string(), "zeta".to_string()]
        );
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = InMemoryStore::unavailable("agency", "connection refused");

        assert!(store.create_document("c", doc! {}).await.is_err());
        assert!(store.get_documents("c", doc! {}, 1).await.is_err());
        assert!(store.list_collection_names().await.is_err());
    }
}
