use super::*;
use crate::domain::{NationalNumber, SalaryStatus, SalarySummary, StatusSnapshot};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct MapStatusCache {
    store: Mutex<HashMap<String, StatusSnapshot>>,
}

#[async_trait]
impl StatusCache for MapStatusCache {
    async fn get(
        &self,
        key: &StatusCacheKey,
    ) -> Result<Option<StatusSnapshot>, StatusCacheError> {
        let guard = self.store.lock().expect("cache poisoned");
        Ok(guard.get(key.as_str()).cloned())
    }

    async fn set(
        &self,
        key: &StatusCacheKey,
        snapshot: &StatusSnapshot,
        _ttl: Duration,
    ) -> Result<(), StatusCacheError> {
        let mut guard = self.store.lock().expect("cache poisoned");
        guard.insert(key.as_str().to_owned(), snapshot.clone());
        Ok(())
    }

    async fn delete(&self, key: &StatusCacheKey) -> Result<(), StatusCacheError> {
        let mut guard = self.store.lock().expect("cache poisoned");
        guard.remove(key.as_str());
        Ok(())
    }
}

#[fixture]
fn snapshot() -> StatusSnapshot {
    StatusSnapshot {
        id: crate::domain::EmployeeId::new(2),
        username: "asmith".to_owned(),
        national_number: NationalNumber::new("NAT1002"),
        email: "asmith@example.com".to_owned(),
        phone: "+15550101".to_owned(),
        is_active: true,
        salary: SalarySummary {
            average: 2500.0,
            highest: 2500.0,
            sum: 10_000.0,
        },
        status: SalaryStatus::Green,
        last_updated: Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

#[rstest]
#[tokio::test]
async fn cache_port_is_object_safe_and_round_trips(snapshot: StatusSnapshot) {
    let cache: Arc<dyn StatusCache> = Arc::new(MapStatusCache::default());
    let key = StatusCacheKey::for_national_number(&snapshot.national_number);

    cache
        .set(&key, &snapshot, Duration::ZERO)
        .await
        .expect("set succeeds");
    assert_eq!(cache.get(&key).await.expect("get"), Some(snapshot));

    cache.delete(&key).await.expect("delete succeeds");
    cache.delete(&key).await.expect("repeat delete is a no-op");
    assert_eq!(cache.get(&key).await.expect("get"), None);
}

#[rstest]
#[case(EmployeeRepositoryError::connection("refused"), true)]
#[case(EmployeeRepositoryError::query("syntax"), false)]
#[case(EmployeeRepositoryError::not_found("NAT0"), false)]
fn employee_errors_classify_transience(
    #[case] err: EmployeeRepositoryError,
    #[case] transient: bool,
) {
    assert_eq!(err.is_transient(), transient);
}

#[rstest]
#[case(SalaryRepositoryError::connection("reset"), true)]
#[case(SalaryRepositoryError::query("bad month"), false)]
fn salary_errors_classify_transience(#[case] err: SalaryRepositoryError, #[case] transient: bool) {
    assert_eq!(err.is_transient(), transient);
}

#[rstest]
fn port_error_messages_name_their_source() {
    assert_eq!(
        EmployeeRepositoryError::not_found("NAT9").to_string(),
        "no employee with national number NAT9"
    );
    assert_eq!(
        StatusCacheError::backend("timeout").to_string(),
        "status cache backend failure: timeout"
    );
}
