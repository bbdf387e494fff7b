//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses by way of [`ErrorCode::classification`]. Expected rejections
//! (unknown identifier, inactive employee, too little salary history) are
//! distinguished from collaborator failures by their code, never by message
//! text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The national number does not match any employee.
    NotFound,
    /// The employee exists but is flagged inactive.
    NotActive,
    /// The employee has too few salary records to compute a status.
    InsufficientData,
    /// A dependency is temporarily unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain or a collaborator.
    InternalError,
}

impl ErrorCode {
    /// Numeric classification, aligned with HTTP status semantics.
    ///
    /// # Examples
    /// ```
    /// use getemps::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NotActive.classification(), 406);
    /// assert_eq!(ErrorCode::InsufficientData.classification(), 422);
    /// ```
    #[must_use]
    pub const fn classification(self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            Self::NotFound => 404,
            Self::NotActive => 406,
            Self::InsufficientData => 422,
            Self::ServiceUnavailable => 503,
            Self::InternalError => 500,
        }
    }

    /// Whether the code represents an expected, user-facing rejection rather
    /// than a fault.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            Self::InvalidRequest | Self::NotFound | Self::NotActive | Self::InsufficientData
        )
    }

    const fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Invalid National Number",
            Self::NotActive => "User is not Active",
            Self::InsufficientData => "INSUFFICIENT_DATA",
            Self::ServiceUnavailable => "Service unavailable",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
/// - `trace_id`, when present, is non-empty.
///
/// # Examples
/// ```
/// use getemps::domain::{Error, ErrorCode};
///
/// let err = Error::not_active("User is not Active");
/// assert_eq!(err.code(), ErrorCode::NotActive);
/// assert!(err.is_rejection());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// The trace identifier was blank.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

impl Error {
    /// Create a new error, capturing the ambient trace identifier.
    ///
    /// A blank message is replaced by the code's canonical message so the
    /// invariant holds without panicking.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(error) => error,
            Err(_) => Self::unchecked(code, code.fallback_message().to_owned()),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::unchecked(code, message))
    }

    fn unchecked(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured when the error was created.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Shorthand for `self.code().is_rejection()`.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        self.code.is_rejection()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use getemps::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::internal("history load failed")
    ///     .with_details(json!({ "stage": "salary_history" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier, replacing any captured one.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Fallible variant of [`Error::with_trace_id`].
    pub fn try_with_trace_id(
        self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        Ok(self.with_trace_id(trace_id))
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::NotActive`].
    pub fn not_active(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotActive, message)
    }

    /// Convenience constructor for [`ErrorCode::InsufficientData`].
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientData, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            trace_id,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        error.trace_id = None;
        if let Some(trace_id) = trace_id {
            error = error.try_with_trace_id(trace_id)?;
        }
        error.details = details;
        Ok(error)
    }
}
