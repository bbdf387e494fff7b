//! Optional Prometheus metrics middleware.
//!
//! The layer is always installed; without a registry it only boxes the
//! response body so both branches share one service type.

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

const METRICS_NAMESPACE: &str = "getemps";
const METRICS_ENDPOINT: &str = "/metrics";

/// Build request metrics exposed at `/metrics`.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn build_prometheus() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint(METRICS_ENDPOINT)
        .build()
        .map_err(|err| std::io::Error::other(format!("prometheus setup failed: {err}")))
}

#[derive(Clone)]
pub(crate) struct MetricsLayer(Option<Arc<PrometheusMetrics>>);

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        Self(metrics.map(Arc::new))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        if let Some(metrics) = self.0.clone() {
            let fut = Compat::new((*metrics).clone()).new_transform(service);
            return Box::pin(async move { Ok(boxed::service(fut.await?)) });
        }
        Box::pin(async move {
            let svc = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            Ok(boxed::service(svc))
        })
    }
}
