//! Hotel bookings.
//!
//! A booking request arrives with raw user and hotel identifiers. The request
//! is validated here; resolving the identifiers against stored users and
//! hotels is the booking service's job, after which the request becomes an
//! immutable [`Booking`].

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::document::{Collection, DocumentId, Entity};
use super::validation::{FieldViolation, non_blank, optional_text};

/// Validation errors returned when constructing a [`BookingRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingValidationError {
    EmptyUserId,
    EmptyHotelId,
    EmptyCheckIn,
    EmptyCheckOut,
    GuestsOutOfRange,
}

impl fmt::Display for BookingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserId => write!(f, "user_id must not be empty"),
            Self::EmptyHotelId => write!(f, "hotel_id must not be empty"),
            Self::EmptyCheckIn => write!(f, "check_in must not be empty"),
            Self::EmptyCheckOut => write!(f, "check_out must not be empty"),
            Self::GuestsOutOfRange => write!(f, "guests must be at least 1"),
        }
    }
}

impl std::error::Error for BookingValidationError {}

impl FieldViolation for BookingValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyUserId => "user_id",
            Self::EmptyHotelId => "hotel_id",
            Self::EmptyCheckIn => "check_in",
            Self::EmptyCheckOut => "check_out",
            Self::GuestsOutOfRange => "guests",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::GuestsOutOfRange => "out_of_range",
            _ => "empty",
        }
    }
}

/// Booking payload before validation.
///
/// Example JSON:
/// `{"user_id":"…","hotel_id":"…","check_in":"2025-07-01","check_out":"2025-07-04","guests":2}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingDraft {
    pub user_id: String,
    pub hotel_id: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: i64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// A validated booking request whose references are not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    user_id: String,
    hotel_id: String,
    details: StayDetails,
}

/// Stay details shared by requests and stored bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StayDetails {
    check_in: String,
    check_out: String,
    guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
}

impl BookingRequest {
    /// Validate a booking payload.
    ///
    /// Dates are opaque strings; only their presence is checked.
    pub fn try_from_draft(draft: BookingDraft) -> Result<Self, BookingValidationError> {
        let user_id = non_blank(&draft.user_id).ok_or(BookingValidationError::EmptyUserId)?;
        let hotel_id = non_blank(&draft.hotel_id).ok_or(BookingValidationError::EmptyHotelId)?;
        let check_in = non_blank(&draft.check_in).ok_or(BookingValidationError::EmptyCheckIn)?;
        let check_out = non_blank(&draft.check_out).ok_or(BookingValidationError::EmptyCheckOut)?;
        let guests = u32::try_from(draft.guests)
            .ok()
            .filter(|guests| *guests >= 1)
            .ok_or(BookingValidationError::GuestsOutOfRange)?;

        Ok(Self {
            user_id,
            hotel_id,
            details: StayDetails {
                check_in,
                check_out,
                guests,
                phone: optional_text(draft.phone),
                special_requests: optional_text(draft.special_requests),
            },
        })
    }

    /// Raw user reference as supplied by the caller.
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Raw hotel reference as supplied by the caller.
    pub fn hotel_id(&self) -> &str {
        self.hotel_id.as_str()
    }

    pub fn guests(&self) -> u32 {
        self.details.guests
    }

    /// Bind the request to resolved user and hotel documents.
    #[must_use]
    pub fn confirm(self, user_id: DocumentId, hotel_id: DocumentId) -> Booking {
        Booking {
            user_id,
            hotel_id,
            details: self.details,
        }
    }
}

impl TryFrom<BookingDraft> for BookingRequest {
    type Error = BookingValidationError;

    fn try_from(value: BookingDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(value)
    }
}

/// A stored booking referencing an existing user and hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    user_id: DocumentId,
    hotel_id: DocumentId,
    #[serde(flatten)]
    details: StayDetails,
}

impl Booking {
    pub fn user_id(&self) -> DocumentId {
        self.user_id
    }

    pub fn hotel_id(&self) -> DocumentId {
        self.hotel_id
    }

    pub fn check_in(&self) -> &str {
        self.details.check_in.as_str()
    }

    pub fn check_out(&self) -> &str {
        self.details.check_out.as_str()
    }

    pub fn guests(&self) -> u32 {
        self.details.guests
    }
}

impl Entity for Booking {
    const COLLECTION: Collection = Collection::Booking;
}
