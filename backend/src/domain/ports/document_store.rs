//! Driven port for the collection-oriented document store.
//!
//! Adapters persist opaque JSON bodies keyed by collection and a generated
//! [`DocumentId`]. Typed access goes through [`insert_entity`],
//! [`list_entities`], [`find_entity`] and [`find_entity_by_field`], which
//! encode and decode [`Entity`] values at the boundary.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{Collection, DocumentId, Entity, Stored};

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum DocumentStoreError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "document store connection failed: {message}",
        /// A query failed while executing.
        Query { message: String } =>
            "document store query failed: {message}",
        /// A document body could not be encoded or decoded.
        Serialization { message: String } =>
            "document serialisation failed: {message}",
    }
}

/// A persisted document as returned by an adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    pub body: Value,
}

/// Kind of store behind the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    InMemory,
}

impl StoreBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::InMemory => "in-memory",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the store used by the diagnostics endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub backend: StoreBackend,
    pub database_name: Option<String>,
    /// Names of non-empty collections, at most [`STATUS_COLLECTION_LIMIT`].
    pub collections: Vec<String>,
}

/// Maximum number of collection names reported by [`DocumentStore::describe`].
pub const STATUS_COLLECTION_LIMIT: usize = 10;

/// Port for storing and reading documents.
///
/// The store does not enforce uniqueness or referential integrity; callers
/// perform point lookups before writing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `body` in `collection` and return it with its generated id.
    async fn insert(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<StoredDocument, DocumentStoreError>;

    /// Every document in `collection`, in insertion order.
    async fn list(&self, collection: Collection) -> Result<Vec<StoredDocument>, DocumentStoreError>;

    /// Point lookup by identifier.
    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<StoredDocument>, DocumentStoreError>;

    /// First document whose top-level string `field` equals `value`.
    async fn find_one_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<StoredDocument>, DocumentStoreError>;

    /// Describe the backing store.
    async fn describe(&self) -> Result<StoreStatus, DocumentStoreError>;
}

fn decode<T: Entity>(document: StoredDocument) -> Result<Stored<T>, DocumentStoreError> {
    let entity = serde_json::from_value(document.body).map_err(|err| {
        DocumentStoreError::serialization(format!(
            "{} document {}: {err}",
            T::COLLECTION,
            document.id
        ))
    })?;
    Ok(Stored {
        id: document.id,
        created_at: document.created_at,
        entity,
    })
}

/// Encode and insert an entity into its collection.
pub async fn insert_entity<T: Entity>(
    store: &dyn DocumentStore,
    entity: &T,
) -> Result<DocumentId, DocumentStoreError> {
    let body = serde_json::to_value(entity)
        .map_err(|err| DocumentStoreError::serialization(err.to_string()))?;
    let stored = store.insert(T::COLLECTION, body).await?;
    Ok(stored.id)
}

/// List and decode every entity in its collection.
pub async fn list_entities<T: Entity>(
    store: &dyn DocumentStore,
) -> Result<Vec<Stored<T>>, DocumentStoreError> {
    store
        .list(T::COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

/// Fetch and decode an entity by identifier.
pub async fn find_entity<T: Entity>(
    store: &dyn DocumentStore,
    id: DocumentId,
) -> Result<Option<Stored<T>>, DocumentStoreError> {
    store
        .find_by_id(T::COLLECTION, id)
        .await?
        .map(decode)
        .transpose()
}

/// Fetch and decode the first entity whose `field` equals `value`.
pub async fn find_entity_by_field<T: Entity>(
    store: &dyn DocumentStore,
    field: &str,
    value: &str,
) -> Result<Option<Stored<T>>, DocumentStoreError> {
    store
        .find_one_by_field(T::COLLECTION, field, value)
        .await?
        .map(decode)
        .transpose()
}
