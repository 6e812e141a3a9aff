//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod booking_service;
mod contact_service;
mod diagnostics;
mod document_store;
mod hotel_catalogue;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::{AccountService, RegisteredUser};
#[cfg(test)]
pub use booking_service::MockBookingService;
pub use booking_service::BookingService;
#[cfg(test)]
pub use contact_service::MockContactService;
pub use contact_service::ContactService;
#[cfg(test)]
pub use diagnostics::MockDiagnostics;
pub use diagnostics::{Diagnostics, DiagnosticsReport};
#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{
    DocumentStore, DocumentStoreError, STATUS_COLLECTION_LIMIT, StoreBackend, StoreStatus,
    StoredDocument, find_entity, find_entity_by_field, insert_entity, list_entities,
};
#[cfg(test)]
pub use hotel_catalogue::MockHotelCatalogue;
pub use hotel_catalogue::HotelCatalogue;
