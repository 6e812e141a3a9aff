//! Driving port for contact form submissions.

use async_trait::async_trait;

use crate::domain::{ContactMessage, DocumentId, Error};

/// Domain use-case port for contact messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Store the message and return its identifier.
    async fn submit(&self, message: ContactMessage) -> Result<DocumentId, Error>;
}
