//! Diagnostics over the configured document store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{Diagnostics, DiagnosticsReport, DocumentStore, STATUS_COLLECTION_LIMIT};

/// Longest store error excerpt included in a report, in characters.
pub const ERROR_EXCERPT_LEN: usize = 50;

/// [`Diagnostics`] implementation probing a [`DocumentStore`].
#[derive(Clone)]
pub struct StoreDiagnostics {
    store: Arc<dyn DocumentStore>,
    database_url_set: bool,
}

impl StoreDiagnostics {
    /// `database_url_set` records whether a database URL was configured,
    /// independently of whether the store could be reached.
    pub fn new(store: Arc<dyn DocumentStore>, database_url_set: bool) -> Self {
        Self {
            store,
            database_url_set,
        }
    }
}

fn excerpt(message: &str) -> String {
    message.chars().take(ERROR_EXCERPT_LEN).collect()
}

#[async_trait]
impl Diagnostics for StoreDiagnostics {
    async fn report(&self) -> DiagnosticsReport {
        match self.store.describe().await {
            Ok(status) => DiagnosticsReport {
                database: "connected".to_owned(),
                database_url_set: self.database_url_set,
                database_name: status.database_name,
                connected: true,
                collections: status
                    .collections
                    .into_iter()
                    .take(STATUS_COLLECTION_LIMIT)
                    .collect(),
            },
            Err(error) => {
                warn!(%error, "document store diagnostics failed");
                DiagnosticsReport {
                    database: format!("error: {}", excerpt(&error.to_string())),
                    database_url_set: self.database_url_set,
                    database_name: None,
                    connected: false,
                    collections: Vec::new(),
                }
            }
        }
    }
}
