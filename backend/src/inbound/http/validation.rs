//! Shared validation helpers for inbound HTTP adapters.
//!
//! Entity validation errors and JSON extractor failures both become
//! `invalid_request` errors whose details name the offending field. Bodies
//! over [`JSON_LIMIT`] are rejected with `413 payload_too_large`.

use std::sync::OnceLock;

use actix_web::dev::Payload;
use actix_web::error::JsonPayloadError;
use actix_web::web::{self, JsonConfig};
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{Error, FieldViolation};

/// Largest accepted JSON body, in bytes.
pub const JSON_LIMIT: usize = 64 * 1024;

/// Validation error codes raised by the extractor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtractorCode {
    MissingField,
    InvalidType,
    MalformedJson,
    UnsupportedMediaType,
    PayloadTooLarge,
}

impl ExtractorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::MalformedJson => "malformed_json",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }
}

/// Map an entity validation failure to a field-level `invalid_request`.
pub(crate) fn violation_error<V: FieldViolation>(violation: V) -> Error {
    Error::invalid_request(violation.to_string()).with_details(json!({
        "field": violation.field(),
        "code": violation.code(),
    }))
}

static MISSING_FIELD_RE: OnceLock<Regex> = OnceLock::new();

fn missing_field_regex() -> &'static Regex {
    MISSING_FIELD_RE.get_or_init(|| {
        Regex::new(r"missing field `(?P<field>[A-Za-z0-9_]+)`")
            .unwrap_or_else(|error| panic!("missing field regex failed to compile: {error}"))
    })
}

fn missing_field_error(message: &str, parent: Option<&str>) -> Option<Error> {
    let captures = missing_field_regex().captures(message)?;
    let name = captures.name("field")?.as_str();
    let field = match parent {
        Some(parent) => format!("{parent}.{name}"),
        None => name.to_owned(),
    };
    Some(
        Error::invalid_request(format!("missing required field: {field}")).with_details(
            json!({ "field": field, "code": ExtractorCode::MissingField.as_str() }),
        ),
    )
}

fn deserialize_error(err: &serde_json::Error) -> Error {
    let message = err.to_string();
    if let Some(error) = missing_field_error(&message, None) {
        return error;
    }
    let code = if err.is_data() {
        ExtractorCode::InvalidType
    } else {
        ExtractorCode::MalformedJson
    };
    Error::invalid_request(message).with_details(json!({ "code": code.as_str() }))
}

fn payload_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(inner) => deserialize_error(inner),
        JsonPayloadError::ContentType => {
            Error::invalid_request("Content-Type must be application/json")
                .with_details(json!({ "code": ExtractorCode::UnsupportedMediaType.as_str() }))
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            Error::payload_too_large(format!("request body exceeds {JSON_LIMIT} bytes"))
                .with_details(json!({ "code": ExtractorCode::PayloadTooLarge.as_str() }))
        }
        other => Error::invalid_request(other.to_string())
            .with_details(json!({ "code": ExtractorCode::MalformedJson.as_str() })),
    }
}

/// Map a typed decoding failure to an error naming the offending field.
fn typed_decode_error(err: &serde_path_to_error::Error<serde_json::Error>) -> Error {
    let path = err.path();
    let located = path.iter().next().is_some();
    let location = located.then(|| path.to_string());
    let message = err.inner().to_string();
    if let Some(error) = missing_field_error(&message, location.as_deref()) {
        return error;
    }
    let details = match location {
        Some(field) => json!({ "field": field, "code": ExtractorCode::InvalidType.as_str() }),
        None => json!({ "code": ExtractorCode::InvalidType.as_str() }),
    };
    Error::invalid_request(err.to_string()).with_details(details)
}

/// Decode a JSON value into `T`, reporting the path of any mismatch.
///
/// # Errors
///
/// Returns an `invalid_request` error whose details carry the failing field.
pub(crate) fn decode_body<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize(value).map_err(|err| typed_decode_error(&err))
}

/// JSON body extractor whose failures name the offending field.
///
/// Syntax, content type and size are checked by [`json_config`]; the typed
/// decode then runs with path tracking.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for JsonBody<T> {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let value = web::Json::<Value>::from_request(req, payload);
        let path = req.path().to_owned();
        Box::pin(async move {
            let web::Json(value) = value.await?;
            decode_body(value).map(JsonBody).map_err(|err| {
                debug!(error = %err, path = %path, "rejected JSON body");
                err.into()
            })
        })
    }
}

/// JSON extractor configuration rendering failures with the API error
/// envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use booking_backend::inbound::http::validation::json_config;
///
/// let app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, req: &HttpRequest| {
            debug!(error = %err, path = req.path(), "rejected JSON payload");
            payload_error(&err).into()
        })
}
