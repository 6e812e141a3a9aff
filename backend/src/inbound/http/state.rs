//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountService, BookingService, ContactService, Diagnostics, DocumentStore, HotelCatalogue,
};
use crate::domain::{
    DocumentAccountService, DocumentBookingService, DocumentContactService,
    DocumentHotelCatalogue, StoreDiagnostics,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub hotels: Arc<dyn HotelCatalogue>,
    pub bookings: Arc<dyn BookingService>,
    pub contact: Arc<dyn ContactService>,
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl HttpState {
    /// Wire every service over one document store.
    ///
    /// `database_url_set` is reported by the diagnostics endpoint.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use booking_backend::inbound::http::state::HttpState;
    /// use booking_backend::outbound::memory::InMemoryDocumentStore;
    ///
    /// let state = HttpState::over_store(Arc::new(InMemoryDocumentStore::default()), false);
    /// # let _ = state;
    /// ```
    pub fn over_store(store: Arc<dyn DocumentStore>, database_url_set: bool) -> Self {
        Self {
            accounts: Arc::new(DocumentAccountService::new(Arc::clone(&store))),
            hotels: Arc::new(DocumentHotelCatalogue::new(Arc::clone(&store))),
            bookings: Arc::new(DocumentBookingService::new(Arc::clone(&store))),
            contact: Arc::new(DocumentContactService::new(Arc::clone(&store))),
            diagnostics: Arc::new(StoreDiagnostics::new(store, database_url_set)),
        }
    }
}
