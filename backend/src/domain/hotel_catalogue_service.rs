//! Hotel catalogue service backed by the document store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{DocumentStore, HotelCatalogue, insert_entity, list_entities};
use crate::domain::store_errors::map_store_error;
use crate::domain::{DocumentId, Error, Hotel, Stored};

/// [`HotelCatalogue`] implementation over a [`DocumentStore`].
#[derive(Clone)]
pub struct DocumentHotelCatalogue {
    store: Arc<dyn DocumentStore>,
}

impl DocumentHotelCatalogue {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HotelCatalogue for DocumentHotelCatalogue {
    async fn list(&self) -> Result<Vec<Stored<Hotel>>, Error> {
        list_entities(self.store.as_ref())
            .await
            .map_err(map_store_error)
    }

    async fn create(&self, hotel: Hotel) -> Result<DocumentId, Error> {
        let id = insert_entity(self.store.as_ref(), &hotel)
            .await
            .map_err(map_store_error)?;
        info!(hotel_id = %id, city = hotel.city(), "created hotel");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{DocumentStoreError, MockDocumentStore, StoredDocument};
    use crate::domain::{Collection, ErrorCode};
    use chrono::Utc;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn list_decodes_hotels_in_store_order() {
        let first = DocumentId::random();
        let second = DocumentId::random();
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .with(eq(Collection::Hotel))
            .returning(move |_| {
                Ok([(first, "Sea View"), (second, "Hilltop")]
                    .into_iter()
                    .map(|(id, name)| StoredDocument {
                        id,
                        created_at: Utc::now(),
                        body: json!({
                            "name": name,
                            "city": "Lisbon",
                            "country": "Portugal",
                            "price_per_night": 90.0,
                            "rating": 4.0,
                            "amenities": ["wifi"]
                        }),
                    })
                    .collect())
            });

        let hotels = DocumentHotelCatalogue::new(Arc::new(store))
            .list()
            .await
            .expect("list");
        let names: Vec<_> = hotels.iter().map(|h| (h.id, h.entity.name())).collect();
        assert_eq!(names, vec![(first, "Sea View"), (second, "Hilltop")]);
    }

    #[tokio::test]
    async fn list_failure_is_internal() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|_| Err(DocumentStoreError::query("relation missing")));

        let err = DocumentHotelCatalogue::new(Arc::new(store))
            .list()
            .await
            .expect_err("failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
