//! Domain primitives, entities, ports and services.
//!
//! Purpose: define the strongly typed entities persisted by the booking
//! service, the ports adapters plug into, and the services implementing the
//! driving ports. Entities validate on construction and on deserialisation,
//! so a value of type [`Hotel`] or [`User`] is always well formed.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable code.
//! - DocumentId / Collection / Entity / Stored: document identity and the
//!   static entity-to-collection registry.
//! - User, Hotel, BookingRequest, Booking, ContactMessage and their drafts.
//! - Document*-prefixed services implementing the ports over a store.

pub mod account_service;
pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod contact;
pub mod contact_service;
pub mod diagnostics_service;
pub mod document;
pub mod email;
pub mod error;
pub mod hotel;
pub mod hotel_catalogue_service;
pub mod ports;
mod store_errors;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::account_service::DocumentAccountService;
pub use self::auth::{LoginCredentials, LoginOutcome, LoginValidationError};
pub use self::booking::{Booking, BookingDraft, BookingRequest, BookingValidationError};
pub use self::booking_service::DocumentBookingService;
pub use self::contact::{ContactDraft, ContactMessage, ContactValidationError};
pub use self::contact_service::DocumentContactService;
pub use self::diagnostics_service::StoreDiagnostics;
pub use self::document::{Collection, DocumentId, DocumentIdError, Entity, Stored};
pub use self::email::{EmailAddress, EmailValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::hotel::{Hotel, HotelDraft, HotelValidationError};
pub use self::hotel_catalogue_service::DocumentHotelCatalogue;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserValidationError};
pub use self::validation::FieldViolation;

