//! Contact form service backed by the document store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ContactService, DocumentStore, insert_entity};
use crate::domain::store_errors::map_store_error;
use crate::domain::{ContactMessage, DocumentId, Error};

/// [`ContactService`] implementation over a [`DocumentStore`].
#[derive(Clone)]
pub struct DocumentContactService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentContactService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactService for DocumentContactService {
    async fn submit(&self, message: ContactMessage) -> Result<DocumentId, Error> {
        let id = insert_entity(self.store.as_ref(), &message)
            .await
            .map_err(map_store_error)?;
        info!(message_id = %id, "received contact message");
        Ok(id)
    }
}
