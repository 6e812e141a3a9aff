//! PostgreSQL-backed `DocumentStore` implementation using Diesel ORM.
//!
//! All collections share the `documents` table. Field lookups use JSONB
//! containment (`body @> '{"email": "..."}'`), which the GIN index on `body`
//! serves.

use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    DocumentStore, DocumentStoreError, STATUS_COLLECTION_LIMIT, StoreBackend, StoreStatus,
    StoredDocument,
};
use crate::domain::{Collection, DocumentId};

use super::models::{DocumentRow, NewDocumentRow};
use super::pool::{DbPool, PoolError};
use super::schema::documents;

/// Diesel-backed implementation of the [`DocumentStore`] port.
#[derive(Clone)]
pub struct DieselDocumentStore {
    pool: DbPool,
}

impl DieselDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DocumentStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DocumentStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> DocumentStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DocumentStoreError::connection("database connection error")
        }
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            DocumentStoreError::serialization("document column conversion failed")
        }
        DieselError::QueryBuilderError(_) => DocumentStoreError::query("database query error"),
        _ => DocumentStoreError::query("database error"),
    }
}

/// JSON object matching documents whose `field` equals `value`.
fn containment_filter(field: &str, value: &str) -> Value {
    let mut filter = Map::new();
    filter.insert(field.to_owned(), Value::String(value.to_owned()));
    Value::Object(filter)
}

#[async_trait]
impl DocumentStore for DieselDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<StoredDocument, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewDocumentRow {
            id: Uuid::new_v4(),
            collection: collection.as_str(),
            body: &body,
        };
        diesel::insert_into(documents::table)
            .values(&row)
            .returning(DocumentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(StoredDocument::from)
            .map_err(map_diesel_error)
    }

    async fn list(&self, collection: Collection) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .order(documents::seq.asc())
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<DocumentRow> = documents::table
            .filter(documents::id.eq(*id.as_uuid()))
            .filter(documents::collection.eq(collection.as_str()))
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(StoredDocument::from))
    }

    async fn find_one_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .filter(documents::body.contains(containment_filter(field, value)))
            .order(documents::seq.asc())
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(StoredDocument::from))
    }

    async fn describe(&self) -> Result<StoreStatus, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let database_name: String = diesel::select(sql::<Text>("current_database()"))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let limit = i64::try_from(STATUS_COLLECTION_LIMIT).unwrap_or(i64::MAX);
        let collections: Vec<String> = documents::table
            .select(documents::collection)
            .distinct()
            .order(documents::collection.asc())
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(StoreStatus {
            backend: StoreBackend::Postgres,
            database_name: Some(database_name),
            collections,
        })
    }
}
