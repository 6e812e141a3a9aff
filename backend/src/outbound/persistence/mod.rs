//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Documents of every collection live in one `documents` table accessed
//! through `diesel-async` over a `bb8` pool. Row structs (`models.rs`) and the
//! table definition (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use booking_backend::outbound::persistence::{DbPool, DieselDocumentStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookings")).await?;
//! let store = DieselDocumentStore::new(pool);
//! ```

mod diesel_document_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_store::DieselDocumentStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
