//! Driving port for registration and login.
//!
//! Inbound adapters call it without knowing the backing store, so handler
//! tests substitute a double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{DocumentId, EmailAddress, Error, LoginCredentials, LoginOutcome, User};

/// A user as returned after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: DocumentId,
    pub name: String,
    pub email: EmailAddress,
}

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Store a new user. Fails with `invalid_request` when the email is taken.
    async fn register(&self, user: User) -> Result<RegisteredUser, Error>;

    /// Check credentials. Unknown emails and wrong passwords both fail with
    /// `unauthorized`.
    async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, Error>;
}
