//! Employee status resolution service.
//!
//! Implements [`EmployeeStatusQuery`] as a cache-aside pipeline:
//! - cache check (hit short-circuits everything else);
//! - identity lookup and the activity gate;
//! - sufficiency gate on the salary record count;
//! - history load, calculation and snapshot assembly;
//! - detached cache populate whose failure never reaches the caller.
//!
//! The first failing stage terminates the request. Collaborator failures
//! become internal errors tagged with the stage that failed.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    EmployeeRepository, EmployeeRepositoryError, EmployeeStatusQuery, SalaryRepository,
    SalaryRepositoryError, StatusCache, StatusCacheKey,
};
use crate::domain::{Error, NationalNumber, SalaryCalculator, StatusSnapshot, TraceId};

/// Minimum number of salary records required to compute a status.
pub const MIN_SALARY_RECORDS: u64 = 3;

const INVALID_NATIONAL_NUMBER: &str = "Invalid National Number";
const NOT_ACTIVE: &str = "User is not Active";
const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";

/// Pipeline stage that failed because a collaborator errored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStage {
    /// Employee lookup by national number.
    IdentityLookup,
    /// Salary record count for the sufficiency gate.
    SalaryCount,
    /// Salary history load.
    SalaryHistory,
}

impl ResolutionStage {
    /// Stable snake_case label used in error details and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdentityLookup => "identity_lookup",
            Self::SalaryCount => "salary_count",
            Self::SalaryHistory => "salary_history",
        }
    }

    fn failure(self, cause: impl fmt::Display) -> Error {
        Error::internal(format!("{} failed: {cause}", self.as_str()))
            .with_details(json!({ "stage": self.as_str() }))
    }
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status resolver wiring repositories, an optional cache and a clock.
#[derive(Clone)]
pub struct EmployeeStatusService<E, S> {
    employees: Arc<E>,
    salaries: Arc<S>,
    cache: Option<Arc<dyn StatusCache>>,
    cache_ttl: Duration,
    clock: Arc<dyn Clock>,
    calculator: SalaryCalculator,
}

impl<E, S> EmployeeStatusService<E, S> {
    /// Create a resolver.
    ///
    /// Pass `None` for `cache` to run every request through the full
    /// pipeline. Snapshots are cached with the store's default TTL unless
    /// [`Self::with_cache_ttl`] overrides it.
    pub fn new(
        employees: Arc<E>,
        salaries: Arc<S>,
        cache: Option<Arc<dyn StatusCache>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            salaries,
            cache,
            cache_ttl: Duration::ZERO,
            clock,
            calculator: SalaryCalculator,
        }
    }

    /// Override the TTL passed to the cache on populate.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    async fn cached(&self, key: &StatusCacheKey, fingerprint: &str) -> Option<StatusSnapshot> {
        let cache = self.cache.as_ref()?;
        match cache.get(key).await {
            Ok(Some(snapshot)) => {
                debug!(national_number_fp = fingerprint, "status cache hit");
                Some(snapshot)
            }
            Ok(None) => {
                debug!(national_number_fp = fingerprint, "status cache miss");
                None
            }
            Err(err) => {
                warn!(
                    national_number_fp = fingerprint,
                    error = %err,
                    "status cache read failed; treating as miss"
                );
                None
            }
        }
    }

    fn populate(&self, key: StatusCacheKey, snapshot: StatusSnapshot, fingerprint: String) {
        let Some(cache) = self.cache.clone() else {
            return;
        };
        let ttl = self.cache_ttl;
        let trace_id = TraceId::current();
        tokio::spawn(TraceId::propagate(trace_id, async move {
            match cache.set(&key, &snapshot, ttl).await {
                Ok(()) => debug!(national_number_fp = %fingerprint, "status snapshot cached"),
                Err(err) => warn!(
                    national_number_fp = %fingerprint,
                    error = %err,
                    "failed to cache status snapshot"
                ),
            }
        }));
    }
}

impl<E, S> EmployeeStatusService<E, S>
where
    E: EmployeeRepository,
    S: SalaryRepository,
{
    async fn compute(&self, national_number: &NationalNumber) -> Result<StatusSnapshot, Error> {
        let employee = self
            .employees
            .find_by_national_number(national_number)
            .await
            .map_err(map_employee_error)?;

        if !employee.is_active {
            return Err(Error::not_active(NOT_ACTIVE));
        }

        let count = self
            .salaries
            .count_for_employee(employee.id)
            .await
            .map_err(|err| map_salary_error(ResolutionStage::SalaryCount, err))?;
        if count < MIN_SALARY_RECORDS {
            return Err(Error::insufficient_data(INSUFFICIENT_DATA)
                .with_details(json!({ "records": count, "required": MIN_SALARY_RECORDS })));
        }

        let history = self
            .salaries
            .list_for_employee(employee.id)
            .await
            .map_err(|err| map_salary_error(ResolutionStage::SalaryHistory, err))?;

        let calculation = self.calculator.calculate(&history);
        Ok(StatusSnapshot::assemble(
            &employee,
            calculation.summary,
            calculation.status,
            self.clock.utc(),
        ))
    }
}

fn map_employee_error(err: EmployeeRepositoryError) -> Error {
    match err {
        EmployeeRepositoryError::NotFound { .. } => Error::not_found(INVALID_NATIONAL_NUMBER),
        other => ResolutionStage::IdentityLookup.failure(other),
    }
}

fn map_salary_error(stage: ResolutionStage, err: SalaryRepositoryError) -> Error {
    stage.failure(err)
}

fn log_failure(err: &Error, fingerprint: &str) {
    if err.is_rejection() {
        info!(
            national_number_fp = fingerprint,
            code = ?err.code(),
            "status request rejected"
        );
    } else {
        error!(
            national_number_fp = fingerprint,
            code = ?err.code(),
            details = ?err.details(),
            error = %err,
            "status resolution failed"
        );
    }
}

#[async_trait]
impl<E, S> EmployeeStatusQuery for EmployeeStatusService<E, S>
where
    E: EmployeeRepository,
    S: SalaryRepository,
{
    async fn resolve_status(&self, national_number: &str) -> Result<StatusSnapshot, Error> {
        let national_number = NationalNumber::new(national_number);
        let fingerprint = national_number.fingerprint();
        let key = StatusCacheKey::for_national_number(&national_number);

        if let Some(snapshot) = self.cached(&key, &fingerprint).await {
            return Ok(snapshot);
        }

        let snapshot = self
            .compute(&national_number)
            .await
            .inspect_err(|err| log_failure(err, &fingerprint))?;

        info!(
            national_number_fp = %fingerprint,
            status = %snapshot.status,
            "status resolved"
        );
        self.populate(key, snapshot.clone(), fingerprint);
        Ok(snapshot)
    }
}

#[cfg(test)]
#[path = "employee_status_service_tests.rs"]
mod tests;
