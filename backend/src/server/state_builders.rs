//! Builds the HTTP state from the configured document store.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use booking_backend::domain::ports::DocumentStore;
use booking_backend::inbound::http::state::HttpState;
use booking_backend::outbound::memory::InMemoryDocumentStore;
use booking_backend::outbound::persistence::DieselDocumentStore;

use super::ServerConfig;

/// Select the document store adapter: PostgreSQL when a pool is configured,
/// memory otherwise.
fn build_document_store(config: &ServerConfig) -> Arc<dyn DocumentStore> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselDocumentStore::new(pool.clone())),
        None => {
            warn!("no database configured; documents are kept in memory");
            Arc::new(InMemoryDocumentStore::default())
        }
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let store = build_document_store(config);
    web::Data::new(HttpState::over_store(store, config.db_pool.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::time::Duration;

    use booking_backend::domain::ports::{DocumentStoreError, StoreBackend};
    use booking_backend::outbound::persistence::{DbPool, PoolConfig};
    use rstest::rstest;

    const UNREACHABLE_DATABASE_URL: &str = "postgres://booking@127.0.0.1:1/bookings";

    fn config() -> ServerConfig {
        ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
    }

    async fn unreachable_pool() -> DbPool {
        let pool_config = PoolConfig::new(UNREACHABLE_DATABASE_URL)
            .with_max_size(1)
            .with_connection_timeout(Duration::from_millis(200));
        DbPool::new(pool_config)
            .await
            .expect("pool builds without connecting")
    }

    #[rstest]
    #[actix_web::test]
    async fn db_pool_absent_selects_memory_store() {
        let store = build_document_store(&config());

        let status = store.describe().await.expect("memory store describes itself");
        assert_eq!(status.backend, StoreBackend::InMemory);
    }

    #[rstest]
    #[actix_web::test]
    async fn db_pool_present_selects_diesel_store() {
        let store = build_document_store(&config().with_db_pool(unreachable_pool().await));

        let err = store.describe().await.expect_err("database is unreachable");
        assert!(matches!(err, DocumentStoreError::Connection { .. }));
    }

    #[rstest]
    #[actix_web::test]
    async fn http_state_reports_whether_a_database_is_configured() {
        let memory = build_http_state(&config());
        let report = memory.diagnostics.report().await;
        assert!(!report.database_url_set);
        assert!(report.connected);

        let diesel = build_http_state(&config().with_db_pool(unreachable_pool().await));
        let report = diesel.diagnostics.report().await;
        assert!(report.database_url_set);
        assert!(!report.connected);
        assert!(report.database.starts_with("error: "));
    }
}
