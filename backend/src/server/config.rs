//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::web;
use getemps::inbound::http::state::HttpState;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: web::Data<HttpState>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration around the handler state.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state: web::Data::new(http_state),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
