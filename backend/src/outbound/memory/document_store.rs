//! Mutex-guarded map of collections to ordered documents.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::domain::ports::{
    DocumentStore, DocumentStoreError, STATUS_COLLECTION_LIMIT, StoreBackend, StoreStatus,
    StoredDocument,
};
use crate::domain::{Collection, DocumentId};

/// [`DocumentStore`] kept in process memory.
///
/// # Examples
/// ```
/// use booking_backend::domain::Collection;
/// use booking_backend::domain::ports::DocumentStore;
/// use booking_backend::outbound::memory::InMemoryDocumentStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryDocumentStore::default();
/// let stored = store
///     .insert(Collection::Hotel, serde_json::json!({"name": "Sea View"}))
///     .await
///     .unwrap();
/// let found = store.find_by_id(Collection::Hotel, stored.id).await.unwrap();
/// assert_eq!(found, Some(stored));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<BTreeMap<Collection, Vec<StoredDocument>>>,
}

impl InMemoryDocumentStore {
    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, BTreeMap<Collection, Vec<StoredDocument>>>, DocumentStoreError>
    {
        self.collections
            .lock()
            .map_err(|_| DocumentStoreError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<StoredDocument, DocumentStoreError> {
        let document = StoredDocument {
            id: DocumentId::random(),
            created_at: Utc::now(),
            body,
        };
        self.lock()?
            .entry(collection)
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn list(&self, collection: Collection) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        Ok(self.lock()?.get(&collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        Ok(self
            .lock()?
            .get(&collection)
            .and_then(|documents| documents.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn find_one_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        Ok(self
            .lock()?
            .get(&collection)
            .and_then(|documents| {
                documents
                    .iter()
                    .find(|doc| doc.body.get(field).and_then(Value::as_str) == Some(value))
            })
            .cloned())
    }

    async fn describe(&self) -> Result<StoreStatus, DocumentStoreError> {
        let collections = self
            .lock()?
            .iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(collection, _)| collection.as_str().to_owned())
            .take(STATUS_COLLECTION_LIMIT)
            .collect();
        Ok(StoreStatus {
            backend: StoreBackend::InMemory,
            database_name: None,
            collections,
        })
    }
}
