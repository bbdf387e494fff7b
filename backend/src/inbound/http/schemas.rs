//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! domain types but live in the inbound adapter layer where framework
//! concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The national number does not match any employee.
    #[schema(rename = "not_found")]
    NotFound,
    /// The employee is flagged inactive.
    #[schema(rename = "not_active")]
    NotActive,
    /// Fewer than three salary records exist.
    #[schema(rename = "insufficient_data")]
    InsufficientData,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid National Number")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::SalaryStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SalaryStatus)]
pub enum SalaryStatusSchema {
    /// Adjusted average above 2000.
    #[schema(rename = "GREEN")]
    Green,
    /// Adjusted average exactly 2000.
    #[schema(rename = "ORANGE")]
    Orange,
    /// Adjusted average below 2000.
    #[schema(rename = "RED")]
    Red,
}

/// OpenAPI schema for [`crate::domain::SalarySummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SalarySummary)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SalarySummarySchema {
    #[schema(example = 2145.0)]
    average_salary: f64,
    #[schema(example = 2475.0)]
    highest_salary: f64,
    #[schema(example = 6435.0)]
    sum_of_salaries: f64,
}

/// OpenAPI schema for [`crate::domain::StatusSnapshot`].
///
/// Employee identity with adjusted salary figures and the derived status.
#[derive(ToSchema)]
#[schema(as = crate::domain::StatusSnapshot)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeStatusSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "jdoe")]
    username: String,
    #[schema(example = "NAT1001")]
    national_number: String,
    #[schema(example = "jdoe@example.com")]
    email: String,
    #[schema(example = "+15550100")]
    phone: String,
    is_active: bool,
    salary_details: SalarySummarySchema,
    status: SalaryStatusSchema,
    /// RFC 3339 computation timestamp.
    #[schema(value_type = String, format = DateTime)]
    last_updated: String,
}
