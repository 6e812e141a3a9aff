//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Documents of every collection.
    ///
    /// `seq` is a monotonically increasing insertion counter used to list a
    /// collection in insertion order.
    documents (id) {
        /// Primary key: UUID v4 document identifier.
        id -> Uuid,
        seq -> Int8,
        /// Collection name, e.g. `hotel`.
        collection -> Varchar,
        /// Entity body as JSON.
        body -> Jsonb,
        created_at -> Timestamptz,
    }
}
