//! Driving port for the store diagnostics report.

use async_trait::async_trait;

/// Outcome of probing the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsReport {
    /// `connected`, or `error: ` followed by a truncated failure message.
    pub database: String,
    pub database_url_set: bool,
    pub database_name: Option<String>,
    pub connected: bool,
    pub collections: Vec<String>,
}

/// Domain use-case port for diagnostics. Reporting never fails; store errors
/// are folded into the report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Diagnostics: Send + Sync {
    async fn report(&self) -> DiagnosticsReport;
}
