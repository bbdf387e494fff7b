//! Tests for the employee status handler.

use super::*;
use crate::domain::ports::MockEmployeeStatusQuery;
use crate::domain::{EmployeeId, NationalNumber, SalaryStatus, SalarySummary, TRACE_ID_HEADER};
use crate::inbound::http::validation::json_config;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn snapshot(national_number: &str) -> StatusSnapshot {
    StatusSnapshot {
        id: EmployeeId::new(1),
        username: "jdoe".to_owned(),
        national_number: NationalNumber::new(national_number),
        email: "jdoe@example.com".to_owned(),
        phone: "+15550100".to_owned(),
        is_active: true,
        salary: SalarySummary {
            average: 2145.0,
            highest: 2475.0,
            sum: 6435.0,
        },
        status: SalaryStatus::Green,
        last_updated: Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

fn test_app(
    query: MockEmployeeStatusQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(web::scope("/api").service(get_employee_status))
}

fn untouched_query() -> MockEmployeeStatusQuery {
    let mut query = MockEmployeeStatusQuery::new();
    query.expect_resolve_status().never();
    query
}

async fn post_json(query: MockEmployeeStatusQuery, body: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(query)).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/GetEmpStatus")
        .set_json(&body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON payload");
    (status, value)
}

#[rstest]
#[case(json!({ "nationalNumber": "NAT1001" }))]
#[case(json!({ "NationalNumber": "NAT1001" }))]
#[actix_web::test]
async fn resolves_status_for_national_number(#[case] body: Value) {
    let mut query = MockEmployeeStatusQuery::new();
    query
        .expect_resolve_status()
        .withf(|national_number: &str| national_number == "NAT1001")
        .times(1)
        .returning(|national_number| Ok(snapshot(national_number)));

    let (status, value) = post_json(query, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["nationalNumber"], json!("NAT1001"));
    assert_eq!(value["status"], json!("GREEN"));
    assert_eq!(value["isActive"], json!(true));
    assert_eq!(value["salaryDetails"]["averageSalary"], json!(2145.0));
    assert_eq!(value["salaryDetails"]["highestSalary"], json!(2475.0));
    assert_eq!(value["salaryDetails"]["sumOfSalaries"], json!(6435.0));
    assert!(value["lastUpdated"].is_string());
}

#[rstest]
#[case(json!({}), "National number is required", "missing_field")]
#[case(json!({ "nationalNumber": "" }), "National number is required", "missing_field")]
#[case(json!({ "nationalNumber": "NA" }), "Invalid national number format", "invalid_length")]
#[case(
    json!({ "nationalNumber": "N".repeat(51) }),
    "Invalid national number format",
    "invalid_length"
)]
#[actix_web::test]
async fn invalid_national_numbers_are_rejected_before_resolution(
    #[case] body: Value,
    #[case] message: &str,
    #[case] code: &str,
) {
    let (status, value) = post_json(untouched_query(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], json!("invalid_request"));
    assert_eq!(value["message"], json!(message));
    assert_eq!(value["details"]["field"], json!("nationalNumber"));
    assert_eq!(value["details"]["code"], json!(code));
}

#[rstest]
#[actix_web::test]
async fn surrounding_whitespace_is_passed_through_unchanged() {
    let mut query = MockEmployeeStatusQuery::new();
    query
        .expect_resolve_status()
        .withf(|national_number: &str| national_number == " NAT1001 ")
        .times(1)
        .returning(|national_number| {
            Err(Error::not_found(format!("Invalid National Number: {national_number}")))
        });

    let (status, value) = post_json(query, json!({ "nationalNumber": " NAT1001 " })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["code"], json!("not_found"));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_rejected_with_generic_message() {
    let app = actix_test::init_service(test_app(untouched_query())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/GetEmpStatus")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"nationalNumber\": ")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
    assert_eq!(value["code"], json!("invalid_request"));
    assert_eq!(value["message"], json!("Invalid request format"));
    assert_eq!(value["details"]["code"], json!("malformed_body"));
}

#[rstest]
#[case(
    Error::not_found("Invalid National Number"),
    StatusCode::NOT_FOUND,
    "not_found",
    "Invalid National Number"
)]
#[case(
    Error::not_active("User is not Active"),
    StatusCode::NOT_ACCEPTABLE,
    "not_active",
    "User is not Active"
)]
#[case(
    Error::insufficient_data("INSUFFICIENT_DATA"),
    StatusCode::UNPROCESSABLE_ENTITY,
    "insufficient_data",
    "INSUFFICIENT_DATA"
)]
#[case(
    Error::internal("salary_history failed: connection reset"),
    StatusCode::INTERNAL_SERVER_ERROR,
    "internal_error",
    "Internal server error"
)]
#[actix_web::test]
async fn domain_errors_map_to_status_codes(
    #[case] error: Error,
    #[case] expected_status: StatusCode,
    #[case] expected_code: &str,
    #[case] expected_message: &str,
) {
    let mut query = MockEmployeeStatusQuery::new();
    query
        .expect_resolve_status()
        .times(1)
        .returning(move |_| Err(error.clone()));

    let (status, value) = post_json(query, json!({ "nationalNumber": "NAT1001" })).await;

    assert_eq!(status, expected_status);
    assert_eq!(value["code"], json!(expected_code));
    assert_eq!(value["message"], json!(expected_message));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_keep_trace_header_but_hide_details() {
    let mut query = MockEmployeeStatusQuery::new();
    query.expect_resolve_status().times(1).returning(|_| {
        Err(Error::internal("identity_lookup failed: refused")
            .with_trace_id("3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .with_details(json!({ "stage": "identity_lookup" })))
    });
    let app = actix_test::init_service(test_app(query)).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/GetEmpStatus")
        .set_json(json!({ "nationalNumber": "NAT1001" }))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(
        header.as_deref(),
        Some("3fa85f64-5717-4562-b3fc-2c963f66afa6")
    );
    let value: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
    assert!(value.get("details").is_none());
}
