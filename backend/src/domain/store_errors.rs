//! Mapping from document store failures to API errors.

use crate::domain::Error;
use crate::domain::ports::DocumentStoreError;

/// Connection failures become `503`; everything else is an internal error
/// whose message is redacted at the HTTP edge.
pub(crate) fn map_store_error(error: DocumentStoreError) -> Error {
    match error {
        DocumentStoreError::Connection { message } => {
            Error::service_unavailable(format!("document store unavailable: {message}"))
        }
        DocumentStoreError::Query { message } => {
            Error::internal(format!("document store error: {message}"))
        }
        DocumentStoreError::Serialization { message } => {
            Error::internal(format!("document serialisation failed: {message}"))
        }
    }
}
