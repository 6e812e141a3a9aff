//! Registered user accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::document::{Collection, Entity};
use super::email::{EmailAddress, EmailValidationError};
use super::validation::{FieldViolation, non_blank};

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN: usize = 4;

/// Validation errors returned when constructing a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    InvalidEmail(EmailValidationError),
    PasswordTooShort { min: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidEmail(error) => error.fmt(f),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

impl FieldViolation for UserValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::InvalidEmail(_) => "email",
            Self::PasswordTooShort { .. } => "password",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty",
            Self::InvalidEmail(EmailValidationError::Empty) => "empty",
            Self::InvalidEmail(EmailValidationError::Malformed) => "invalid_email",
            Self::PasswordTooShort { .. } => "too_short",
        }
    }
}

/// Registration payload before validation.
///
/// Example JSON:
/// `{"name":"Ada Lovelace","email":"ada@example.com","password":"secret"}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A registered user.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - `email` is well formed; uniqueness is enforced by the account service.
/// - `password` has at least [`PASSWORD_MIN`] characters and is stored as
///   supplied.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDraft")]
pub struct User {
    name: String,
    email: EmailAddress,
    password: String,
}

impl User {
    /// Validate a registration payload.
    ///
    /// # Examples
    /// ```
    /// use booking_backend::domain::{User, UserDraft};
    ///
    /// let user = User::try_from_draft(UserDraft {
    ///     name: " Ada ".into(),
    ///     email: "ada@example.com".into(),
    ///     password: "secret".into(),
    /// })
    /// .expect("valid user");
    /// assert_eq!(user.name(), "Ada");
    /// ```
    pub fn try_from_draft(draft: UserDraft) -> Result<Self, UserValidationError> {
        let name = non_blank(&draft.name).ok_or(UserValidationError::EmptyName)?;
        let email = EmailAddress::new(&draft.email).map_err(UserValidationError::InvalidEmail)?;
        if draft.password.chars().count() < PASSWORD_MIN {
            return Err(UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self {
            name,
            email,
            password: draft.password,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Compare a candidate password with the stored one.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl TryFrom<UserDraft> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(value)
    }
}

impl Entity for User {
    const COLLECTION: Collection = Collection::User;
}
