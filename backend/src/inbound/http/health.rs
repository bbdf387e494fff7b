//! Health endpoints: a status summary plus liveness and readiness probes for
//! orchestration and load balancers. Documented in OpenAPI via Utoipa.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use chrono::SecondsFormat;
use mockable::Clock;
use serde::Serialize;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    clock: Arc<dyn Clock>,
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            clock,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503 to trigger restarts.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthReport {
    #[schema(example = "healthy")]
    status: String,
    /// RFC 3339 timestamp in UTC.
    #[schema(example = "2024-05-01T09:00:00Z")]
    timestamp: String,
}

/// Summary health check reporting that the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Service is healthy", body = HealthReport)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    let report = HealthReport {
        status: "healthy".to_owned(),
        timestamp: state
            .clock
            .utc()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(report)
}

/// Readiness probe. Return 200 when dependencies are initialised and the server can handle traffic; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (
            status = 405,
            description = "Method not allowed; only GET probes are supported"
        ),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once draining.
/// Call `HealthState::mark_unhealthy` before graceful shutdown to surface the drain early.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive"),
        (
            status = 405,
            description = "Method not allowed; only GET probes are supported"
        ),
        (
            status = 503,
            description = "Server is shutting down"
        )
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use serde_json::Value;

    struct FixtureClock;

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
                .single()
                .expect("valid timestamp")
        }
    }

    #[fixture]
    fn state() -> web::Data<HealthState> {
        web::Data::new(HealthState::new(Arc::new(FixtureClock)))
    }

    async fn probe(state: web::Data<HealthState>, uri: &str) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(ready)
                .service(live),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        response.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn health_reports_healthy_with_timestamp(state: web::Data<HealthState>) {
        let app = actix_test::init_service(App::new().app_data(state).service(health)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("health JSON");
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["timestamp"], "2024-05-01T09:00:00Z");
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_flips_once_marked(state: web::Data<HealthState>) {
        assert_eq!(
            probe(state.clone(), "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        state.mark_ready();
        assert_eq!(probe(state, "/health/ready").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_fails_after_shutdown_begins(state: web::Data<HealthState>) {
        assert_eq!(probe(state.clone(), "/health/live").await, StatusCode::OK);
        state.mark_unhealthy();
        assert_eq!(
            probe(state, "/health/live").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
