//! Builders wiring settings into the status cache and the HTTP state.

use std::sync::Arc;

use mockable::Clock;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use getemps::domain::EmployeeStatusService;
use getemps::domain::ports::StatusCache;
use getemps::inbound::http::state::HttpState;
use getemps::outbound::cache::{InMemoryStatusCache, RedisCacheConfig, RedisStatusCache};
use getemps::outbound::persistence::{DbPool, DieselEmployeeRepository, DieselSalaryRepository};
use getemps::settings::AppSettings;

/// Status cache selected from settings, plus any background task it owns.
pub(crate) struct CacheHandle {
    cache: Option<Arc<dyn StatusCache>>,
    janitor: Option<JoinHandle<()>>,
}

impl CacheHandle {
    fn disabled() -> Self {
        Self {
            cache: None,
            janitor: None,
        }
    }

    pub(crate) fn cache(&self) -> Option<Arc<dyn StatusCache>> {
        self.cache.clone()
    }

    /// Stop the in-memory sweeper, if one is running.
    pub(crate) fn shutdown(self) {
        if let Some(janitor) = self.janitor {
            janitor.abort();
        }
    }
}

fn in_memory_cache(settings: &AppSettings, clock: Arc<dyn Clock>) -> CacheHandle {
    let cache = Arc::new(InMemoryStatusCache::new(settings.cache_ttl(), clock));
    let janitor = cache.spawn_janitor(settings.cache_cleanup_interval());
    info!(
        ttl_secs = settings.cache_ttl().as_secs(),
        cleanup_secs = settings.cache_cleanup_interval().as_secs(),
        "using in-memory status cache"
    );
    CacheHandle {
        cache: Some(cache),
        janitor: Some(janitor),
    }
}

/// Select the status cache: none when disabled, Redis when a URL is set,
/// otherwise the in-memory store.
///
/// A Redis server that cannot be reached at startup falls back to the
/// in-memory store.
pub(crate) async fn build_status_cache(
    settings: &AppSettings,
    clock: Arc<dyn Clock>,
) -> CacheHandle {
    if !settings.cache_enabled() {
        info!("status cache disabled");
        return CacheHandle::disabled();
    }

    let Some(url) = settings.redis_url() else {
        return in_memory_cache(settings, clock);
    };

    let config = RedisCacheConfig::new(url).with_default_ttl(settings.cache_ttl());
    match RedisStatusCache::connect(config).await {
        Ok(cache) => {
            info!(
                ttl_secs = settings.cache_ttl().as_secs(),
                "using redis status cache"
            );
            CacheHandle {
                cache: Some(Arc::new(cache)),
                janitor: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "redis status cache unavailable; falling back to in-memory");
            in_memory_cache(settings, clock)
        }
    }
}

/// Build handler state backed by the Diesel repositories.
pub(crate) fn build_http_state(
    pool: &DbPool,
    settings: &AppSettings,
    cache: Option<Arc<dyn StatusCache>>,
    clock: Arc<dyn Clock>,
) -> HttpState {
    let retry = settings.retry_policy();
    let employees = DieselEmployeeRepository::new(pool.clone()).with_retry_policy(retry);
    let salaries = DieselSalaryRepository::new(pool.clone()).with_retry_policy(retry);
    let service = EmployeeStatusService::new(Arc::new(employees), Arc::new(salaries), cache, clock)
        .with_cache_ttl(settings.cache_ttl());
    HttpState::new(Arc::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> AppSettings {
        AppSettings {
            bind_addr: None,
            database_url: Some("postgres://localhost/getemps".to_owned()),
            pool_max_size: None,
            pool_timeout_secs: None,
            cache_disabled: false,
            cache_ttl_secs: None,
            cache_cleanup_secs: None,
            redis_url: None,
            retry_attempts: None,
            retry_backoff_ms: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_cache_builds_no_store(mut settings: AppSettings) {
        settings.cache_disabled = true;
        let handle = build_status_cache(&settings, Arc::new(DefaultClock)).await;
        assert!(handle.cache().is_none());
        handle.shutdown();
    }

    #[rstest]
    #[tokio::test]
    async fn enabled_cache_without_redis_uses_memory(settings: AppSettings) {
        let handle = build_status_cache(&settings, Arc::new(DefaultClock)).await;
        assert!(handle.cache().is_some());
        assert!(handle.janitor.is_some(), "in-memory store is swept");
        handle.shutdown();
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_redis_url_falls_back_to_memory(mut settings: AppSettings) {
        settings.redis_url = Some("not a url".to_owned());
        let handle = build_status_cache(&settings, Arc::new(DefaultClock)).await;
        assert!(handle.cache().is_some());
        assert!(handle.janitor.is_some());
        handle.shutdown();
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_redis_falls_back_to_memory(mut settings: AppSettings) {
        settings.redis_url = Some("redis://127.0.0.1:1/0".to_owned());
        let handle = build_status_cache(&settings, Arc::new(DefaultClock)).await;
        assert!(handle.cache().is_some());
        assert!(handle.janitor.is_some(), "fallback store is the in-memory one");
        handle.shutdown();
    }
}
