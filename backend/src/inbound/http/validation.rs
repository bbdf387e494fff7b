//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Message returned when a request body is not valid JSON for its type.
pub(crate) const MALFORMED_BODY_MESSAGE: &str = "Invalid request format";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidLength,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidLength => "invalid_length",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Inclusive character-count bounds for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LengthBounds {
    pub(crate) min: usize,
    pub(crate) max: usize,
}

impl LengthBounds {
    fn contains(self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_bounds(self, code: ErrorCode, bounds: LengthBounds, actual: usize) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
            "min": bounds.min,
            "max": bounds.max,
            "length": actual,
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName, message: &str) -> Error {
    ValidationError::new(field.as_str(), message).with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_length_error(
    field: FieldName,
    message: &str,
    bounds: LengthBounds,
    actual: usize,
) -> Error {
    ValidationError::new(field.as_str(), message).with_bounds(
        ErrorCode::InvalidLength,
        bounds,
        actual,
    )
}

/// Check `value` is present, non-empty and within `bounds` characters.
///
/// The text is returned exactly as sent; surrounding whitespace counts
/// toward the length and is part of the lookup key.
pub(crate) fn require_within_bounds(
    value: Option<String>,
    field: FieldName,
    bounds: LengthBounds,
    messages: (&str, &str),
) -> Result<String, Error> {
    let (missing, invalid) = messages;
    let text = value
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing_field_error(field, missing))?;

    let len = text.chars().count();
    if !bounds.contains(len) {
        return Err(invalid_length_error(field, invalid, bounds, len));
    }
    Ok(text)
}

fn malformed_body_error(_err: &JsonPayloadError) -> Error {
    Error::invalid_request(MALFORMED_BODY_MESSAGE)
        .with_details(json!({ "code": ErrorCode::MalformedBody.as_str() }))
}

/// JSON extractor configuration that reports unparsable bodies through the
/// domain error schema.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        debug!(path = %req.path(), error = %err, "rejected malformed JSON body");
        malformed_body_error(&err).into()
    })
}
