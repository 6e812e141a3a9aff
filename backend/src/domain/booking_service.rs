//! Booking service backed by the document store.
//!
//! References are resolved with point lookups before the insert. Nothing
//! stops the referenced user or hotel from disappearing afterwards; the store
//! has no foreign keys.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{BookingService, DocumentStore, insert_entity};
use crate::domain::store_errors::map_store_error;
use crate::domain::{BookingRequest, Collection, DocumentId, Error};

/// [`BookingService`] implementation over a [`DocumentStore`].
#[derive(Clone)]
pub struct DocumentBookingService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentBookingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn parse_references(request: &BookingRequest) -> Result<(DocumentId, DocumentId), Error> {
        let user_id = DocumentId::parse(request.user_id());
        let hotel_id = DocumentId::parse(request.hotel_id());
        match (user_id, hotel_id) {
            (Ok(user_id), Ok(hotel_id)) => Ok((user_id, hotel_id)),
            (user_id, hotel_id) => {
                let mut fields = Vec::new();
                if user_id.is_err() {
                    fields.push("user_id");
                }
                if hotel_id.is_err() {
                    fields.push("hotel_id");
                }
                Err(Error::invalid_request("Invalid IDs")
                    .with_details(json!({ "fields": fields, "code": "invalid_id" })))
            }
        }
    }

    async fn exists(&self, collection: Collection, id: DocumentId) -> Result<bool, Error> {
        self.store
            .find_by_id(collection, id)
            .await
            .map(|found| found.is_some())
            .map_err(map_store_error)
    }
}

#[async_trait]
impl BookingService for DocumentBookingService {
    async fn create(&self, request: BookingRequest) -> Result<DocumentId, Error> {
        let (user_id, hotel_id) = Self::parse_references(&request)?;

        if !self.exists(Collection::User, user_id).await? {
            debug!(%user_id, "booking rejected: unknown user");
            return Err(Error::not_found("User not found"));
        }
        if !self.exists(Collection::Hotel, hotel_id).await? {
            debug!(%hotel_id, "booking rejected: unknown hotel");
            return Err(Error::not_found("Hotel not found"));
        }

        let booking = request.confirm(user_id, hotel_id);
        let id = insert_entity(self.store.as_ref(), &booking)
            .await
            .map_err(map_store_error)?;
        info!(booking_id = %id, %user_id, %hotel_id, guests = booking.guests(), "created booking");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockDocumentStore, StoredDocument};
    use crate::domain::{BookingDraft, ErrorCode};
    use chrono::Utc;
    use rstest::rstest;

    const USER_ID: &str = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";
    const HOTEL_ID: &str = "0c2d5f52-1f6a-4a4e-9d0f-3f9a3f1c2b7e";

    fn request(user_id: &str, hotel_id: &str) -> BookingRequest {
        BookingRequest::try_from_draft(BookingDraft {
            user_id: user_id.into(),
            hotel_id: hotel_id.into(),
            check_in: "2025-07-01".into(),
            check_out: "2025-07-04".into(),
            guests: 2,
            phone: None,
            special_requests: None,
        })
        .expect("valid request")
    }

    fn document(id: DocumentId) -> StoredDocument {
        StoredDocument {
            id,
            created_at: Utc::now(),
            body: serde_json::Value::Null,
        }
    }

    /// Store double where users and hotels exist as requested.
    fn store_with(user_exists: bool, hotel_exists: bool) -> MockDocumentStore {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_by_id()
            .returning(move |collection, id| {
                let exists = match collection {
                    Collection::User => user_exists,
                    Collection::Hotel => hotel_exists,
                    _ => false,
                };
                Ok(exists.then(|| document(id)))
            });
        store
    }

    #[tokio::test]
    async fn creates_booking_when_references_exist() {
        let booking_id = DocumentId::random();
        let mut store = store_with(true, true);
        store
            .expect_insert()
            .withf(|collection, body| {
                *collection == Collection::Booking
                    && body["user_id"] == USER_ID
                    && body["hotel_id"] == HOTEL_ID
            })
            .times(1)
            .returning(move |_, body| {
                Ok(StoredDocument {
                    id: booking_id,
                    created_at: Utc::now(),
                    body,
                })
            });

        let id = DocumentBookingService::new(Arc::new(store))
            .create(request(USER_ID, HOTEL_ID))
            .await
            .expect("created");
        assert_eq!(id, booking_id);
    }

    #[rstest]
    #[case("507f1f77bcf86cd799439011", HOTEL_ID)]
    #[case(USER_ID, "hotel-1")]
    #[case("nope", "nope")]
    #[tokio::test]
    async fn malformed_references_are_rejected_before_lookup(
        #[case] user_id: &str,
        #[case] hotel_id: &str,
    ) {
        let mut store = MockDocumentStore::new();
        store.expect_find_by_id().never();
        store.expect_insert().never();

        let err = DocumentBookingService::new(Arc::new(store))
            .create(request(user_id, hotel_id))
            .await
            .expect_err("invalid ids");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Invalid IDs");
    }

    #[rstest]
    #[case(false, true, "User not found")]
    #[case(false, false, "User not found")]
    #[case(true, false, "Hotel not found")]
    #[tokio::test]
    async fn missing_references_are_not_found(
        #[case] user_exists: bool,
        #[case] hotel_exists: bool,
        #[case] message: &str,
    ) {
        let mut store = store_with(user_exists, hotel_exists);
        store.expect_insert().never();

        let err = DocumentBookingService::new(Arc::new(store))
            .create(request(USER_ID, HOTEL_ID))
            .await
            .expect_err("missing reference");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), message);
    }
}
