//! In-process document store.
//!
//! Used when no database URL is configured and by HTTP tests. Contents are
//! lost when the process exits.

mod document_store;

pub use document_store::InMemoryDocumentStore;
