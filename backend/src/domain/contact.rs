//! Messages submitted through the contact form.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::document::{Collection, Entity};
use super::email::{EmailAddress, EmailValidationError};
use super::validation::{FieldViolation, non_blank, optional_text};

/// Validation errors returned when constructing a [`ContactMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    InvalidEmail(EmailValidationError),
    EmptyMessage,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidEmail(error) => error.fmt(f),
            Self::EmptyMessage => write!(f, "message must not be empty"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

impl FieldViolation for ContactValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::InvalidEmail(_) => "email",
            Self::EmptyMessage => "message",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail(EmailValidationError::Malformed) => "invalid_email",
            _ => "empty",
        }
    }
}

/// Contact form payload before validation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

/// A contact message. Written once, never read back through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactDraft")]
pub struct ContactMessage {
    name: String,
    email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    message: String,
}

impl ContactMessage {
    /// Validate a contact form payload. The message body keeps its inner
    /// whitespace and line breaks.
    pub fn try_from_draft(draft: ContactDraft) -> Result<Self, ContactValidationError> {
        let name = non_blank(&draft.name).ok_or(ContactValidationError::EmptyName)?;
        let email =
            EmailAddress::new(&draft.email).map_err(ContactValidationError::InvalidEmail)?;
        let message = non_blank(&draft.message).ok_or(ContactValidationError::EmptyMessage)?;
        Ok(Self {
            name,
            email,
            phone: optional_text(draft.phone),
            message,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl TryFrom<ContactDraft> for ContactMessage {
    type Error = ContactValidationError;

    fn try_from(value: ContactDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(value)
    }
}

impl Entity for ContactMessage {
    const COLLECTION: Collection = Collection::ContactMessage;
}
