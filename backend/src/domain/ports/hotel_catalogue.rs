//! Driving port for listing and creating hotels.

use async_trait::async_trait;

use crate::domain::{DocumentId, Error, Hotel, Stored};

/// Domain use-case port for the hotel catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelCatalogue: Send + Sync {
    /// Every stored hotel, in creation order.
    async fn list(&self) -> Result<Vec<Stored<Hotel>>, Error>;

    /// Store a new hotel and return its identifier.
    async fn create(&self, hotel: Hotel) -> Result<DocumentId, Error>;
}
