//! Hotels offered for booking.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::document::{Collection, Entity};
use super::email::{EmailAddress, EmailValidationError};
use super::validation::{FieldViolation, non_blank, optional_text};

/// Highest rating a hotel may carry.
pub const RATING_MAX: f64 = 5.0;

/// Validation errors returned when constructing a [`Hotel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelValidationError {
    EmptyName,
    EmptyCity,
    EmptyCountry,
    InvalidPrice,
    InvalidRating,
    InvalidEmail(EmailValidationError),
}

impl fmt::Display for HotelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyCity => write!(f, "city must not be empty"),
            Self::EmptyCountry => write!(f, "country must not be empty"),
            Self::InvalidPrice => write!(f, "price_per_night must be a non-negative number"),
            Self::InvalidRating => write!(f, "rating must be between 0 and {RATING_MAX}"),
            Self::InvalidEmail(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for HotelValidationError {}

impl FieldViolation for HotelValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyCity => "city",
            Self::EmptyCountry => "country",
            Self::InvalidPrice => "price_per_night",
            Self::InvalidRating => "rating",
            Self::InvalidEmail(_) => "email",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::EmptyCity | Self::EmptyCountry => "empty",
            Self::InvalidPrice | Self::InvalidRating => "out_of_range",
            Self::InvalidEmail(_) => "invalid_email",
        }
    }
}

/// Hotel payload before validation.
///
/// Example JSON:
/// `{"name":"Sea View","city":"Lisbon","country":"Portugal","price_per_night":120.0,"rating":4.5}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HotelDraft {
    pub name: String,
    pub city: String,
    pub country: String,
    pub price_per_night: f64,
    pub rating: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// A validated hotel listing.
///
/// ## Invariants
/// - `name`, `city` and `country` are trimmed and non-empty.
/// - `price_per_night` is finite and non-negative.
/// - `rating` is finite and within `0..=5`.
/// - Optional text fields are either absent or non-blank; blank amenities are
///   dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "HotelDraft")]
pub struct Hotel {
    name: String,
    city: String,
    country: String,
    price_per_night: f64,
    rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = "email")]
    email: Option<EmailAddress>,
    amenities: Vec<String>,
}

impl Hotel {
    /// Validate a hotel payload.
    pub fn try_from_draft(draft: HotelDraft) -> Result<Self, HotelValidationError> {
        let name = non_blank(&draft.name).ok_or(HotelValidationError::EmptyName)?;
        let city = non_blank(&draft.city).ok_or(HotelValidationError::EmptyCity)?;
        let country = non_blank(&draft.country).ok_or(HotelValidationError::EmptyCountry)?;
        if !draft.price_per_night.is_finite() || draft.price_per_night < 0.0 {
            return Err(HotelValidationError::InvalidPrice);
        }
        if !draft.rating.is_finite() || !(0.0..=RATING_MAX).contains(&draft.rating) {
            return Err(HotelValidationError::InvalidRating);
        }
        let email = optional_text(draft.email)
            .map(EmailAddress::new)
            .transpose()
            .map_err(HotelValidationError::InvalidEmail)?;
        let amenities = draft
            .amenities
            .iter()
            .filter_map(|amenity| non_blank(amenity))
            .collect();

        Ok(Self {
            name,
            city,
            country,
            price_per_night: draft.price_per_night,
            rating: draft.rating,
            image: optional_text(draft.image),
            description: optional_text(draft.description),
            phone: optional_text(draft.phone),
            email,
            amenities,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn country(&self) -> &str {
        self.country.as_str()
    }

    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }
}

impl TryFrom<HotelDraft> for Hotel {
    type Error = HotelValidationError;

    fn try_from(value: HotelDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(value)
    }
}

impl Entity for Hotel {
    const COLLECTION: Collection = Collection::Hotel;
}
