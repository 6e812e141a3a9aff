//! Driving port for creating bookings.

use async_trait::async_trait;

use crate::domain::{BookingRequest, DocumentId, Error};

/// Domain use-case port for bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Resolve the request's references and store the booking.
    ///
    /// Malformed references fail with `invalid_request`; a missing user or
    /// hotel fails with `not_found`, the user being checked first.
    async fn create(&self, request: BookingRequest) -> Result<DocumentId, Error>;
}
