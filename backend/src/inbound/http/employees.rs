//! Employee status API handler.
//!
//! ```text
//! POST /api/GetEmpStatus {"nationalNumber":"NAT1001"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, StatusSnapshot};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeeStatusSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, LengthBounds, require_within_bounds};

const NATIONAL_NUMBER_FIELD: FieldName = FieldName::new("nationalNumber");
const NATIONAL_NUMBER_BOUNDS: LengthBounds = LengthBounds { min: 3, max: 50 };
const NATIONAL_NUMBER_REQUIRED: &str = "National number is required";
const NATIONAL_NUMBER_INVALID: &str = "Invalid national number format";

/// Request body for `POST /api/GetEmpStatus`.
///
/// Example JSON:
/// `{"nationalNumber":"NAT1001"}`
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatusRequest {
    /// External employee identifier; 3 to 50 characters, matched as sent.
    #[serde(default, alias = "NationalNumber")]
    #[schema(example = "NAT1001", min_length = 3, max_length = 50)]
    pub national_number: Option<String>,
}

impl EmployeeStatusRequest {
    fn into_national_number(self) -> Result<String, Error> {
        require_within_bounds(
            self.national_number,
            NATIONAL_NUMBER_FIELD,
            NATIONAL_NUMBER_BOUNDS,
            (NATIONAL_NUMBER_REQUIRED, NATIONAL_NUMBER_INVALID),
        )
    }
}

/// Resolve the salary status of one employee.
///
/// Rejections keep their message and map to 404 (unknown national number),
/// 406 (inactive employee) or 422 (fewer than three salary records).
#[utoipa::path(
    post,
    path = "/api/GetEmpStatus",
    request_body = EmployeeStatusRequest,
    responses(
        (status = 200, description = "Employee status", body = EmployeeStatusSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Invalid National Number", body = ErrorSchema),
        (status = 406, description = "User is not Active", body = ErrorSchema),
        (status = 422, description = "Insufficient salary history", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeStatus"
)]
#[post("/GetEmpStatus")]
pub async fn get_employee_status(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeStatusRequest>,
) -> ApiResult<web::Json<StatusSnapshot>> {
    let national_number = payload.into_inner().into_national_number()?;
    let snapshot = state.status.resolve_status(&national_number).await?;
    Ok(web::Json(snapshot))
}

#[cfg(test)]
mod tests;
