//! Shared vocabulary for entity validation failures.
//!
//! Each entity exposes its own validation error enum; this trait lets inbound
//! adapters report any of them with the offending field and a stable code.

use std::fmt::Display;

/// A validation failure attributable to a single input field.
pub trait FieldViolation: Display {
    /// Wire name of the offending field.
    fn field(&self) -> &'static str;

    /// Stable machine-readable reason, e.g. `out_of_range`.
    fn code(&self) -> &'static str;
}

/// Trim `value` and return it when something remains.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Normalise an optional free-text field: blank strings become `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank)
}
