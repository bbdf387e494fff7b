//! Service entry-point: loads settings, wires the status pipeline and serves
//! the HTTP API.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use getemps::inbound::http::health::HealthState;
use getemps::outbound::persistence::{DbPool, PoolConfig};
use getemps::settings::{AppSettings, SettingsError};
use ortho_config::OrthoConfig;

use server::{ServerConfig, build_http_state, build_status_cache, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    settings.validate().map_err(io::Error::other)?;
    let bind_addr = settings.socket_addr().map_err(io::Error::other)?;
    let database_url = settings
        .database_url()
        .ok_or_else(|| io::Error::other(SettingsError::MissingDatabaseUrl))?;

    let pool = DbPool::new(
        PoolConfig::new(database_url)
            .with_max_size(settings.pool_max_size())
            .with_connection_timeout(settings.pool_timeout()),
    )
    .await
    .map_err(|e| io::Error::other(e.into_message()))?;

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let cache = build_status_cache(&settings, clock.clone()).await;
    let http_state = build_http_state(&pool, &settings, cache.cache(), clock.clone());

    let config = ServerConfig::new(bind_addr, http_state);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_prometheus()?));

    let health_state = web::Data::new(HealthState::new(clock));
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "employee status service listening");

    let result = server.await;
    health_state.mark_unhealthy();
    cache.shutdown();
    info!("employee status service stopped");
    result
}
