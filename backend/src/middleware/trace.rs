//! Tracing middleware attaching a request-scoped trace identifier.
//!
//! Each incoming request receives a UUID [`TraceId`] stored in task-local
//! storage for correlation across logs and error responses. Domain errors
//! built while handling the request capture it automatically. A completion
//! event records the status code, latency, client address and user agent.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`TraceId::propagate`] when spawning new tasks to ensure the active trace
//! identifier follows the work.

use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info, info_span};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Tracing middleware attaching a request-scoped UUID and
/// adding a `trace-id` header to every response.
///
/// Handlers can read the trace ID via [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use getemps::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
///
/// Applications should not use this type directly.
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let header_value = trace_id.to_string();
        let span = info_span!(
            "http_request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );
        let peer = RequestPeer::from_request(&req);
        let started = Instant::now();
        let fut = self.service.call(req);
        Box::pin(TraceId::scope(
            trace_id,
            async move {
                let mut res = match fut.await {
                    Ok(res) => res,
                    Err(err) => {
                        error!(
                            latency_ms = millis(started.elapsed()),
                            client_ip = %peer.client_ip,
                            user_agent = %peer.user_agent,
                            error = %err,
                            "request failed"
                        );
                        return Err(err);
                    }
                };
                info!(
                    status_code = res.status().as_u16(),
                    latency_ms = millis(started.elapsed()),
                    client_ip = %peer.client_ip,
                    user_agent = %peer.user_agent,
                    "request completed"
                );
                match HeaderValue::from_str(&header_value) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(
                            %error,
                            trace_id = %trace_id,
                            "failed to encode trace identifier header"
                        );
                    }
                }
                Ok(res)
            }
            .instrument(span),
        ))
    }
}

struct RequestPeer {
    client_ip: String,
    user_agent: String,
}

impl RequestPeer {
    fn from_request(req: &ServiceRequest) -> Self {
        let client_ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("-")
            .to_owned();
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-")
            .to_owned();
        Self {
            client_ip,
            user_agent,
        }
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
