//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: the employee status endpoint and the health probes
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`EmployeeStatusSchema`] and friends) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated document is served by Swagger UI in debug builds.

use crate::inbound::http::employees::EmployeeStatusRequest;
use crate::inbound::http::health::HealthReport;
use crate::inbound::http::schemas::{
    EmployeeStatusSchema, ErrorCodeSchema, ErrorSchema, SalaryStatusSchema, SalarySummarySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee status API",
        description = "Salary status lookup by national number, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::get_employee_status,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeStatusRequest,
        EmployeeStatusSchema,
        SalarySummarySchema,
        SalaryStatusSchema,
        ErrorSchema,
        ErrorCodeSchema,
        HealthReport
    )),
    tags(
        (name = "employees", description = "Employee salary status"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
