//! HTTP inbound adapter exposing REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the status API and health endpoints on an Actix service config.
///
/// Callers provide [`state::HttpState`] and [`health::HealthState`] as app
/// data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(web::scope("/api").service(employees::get_employee_status))
        .service(health::health)
        .service(health::ready)
        .service(health::live);
}
