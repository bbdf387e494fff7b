//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, NationalNumber};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::EmployeeRow;
use super::pool::DbPool;
use super::retry::{RetryPolicy, retry_transient};
use super::schema::users;

/// Diesel-backed identity lookup over the `users` table.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
    retry: RetryPolicy,
}

impl DieselEmployeeRepository {
    /// Create a repository with the default retry policy.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

fn map_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    map_diesel_error(
        error,
        EmployeeRepositoryError::query,
        EmployeeRepositoryError::connection,
    )
}

fn require_row(
    row: Option<EmployeeRow>,
    national_number: &NationalNumber,
) -> Result<Employee, EmployeeRepositoryError> {
    row.map(Employee::from)
        .ok_or_else(|| EmployeeRepositoryError::not_found(national_number.as_str()))
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_by_national_number(
        &self,
        national_number: &NationalNumber,
    ) -> Result<Employee, EmployeeRepositoryError> {
        let pool = &self.pool;
        let key = national_number.as_str();

        let row = retry_transient(&self.retry, "find_employee", move || async move {
            let mut conn = pool
                .get()
                .await
                .map_err(|err| map_pool_error(err, EmployeeRepositoryError::connection))?;

            users::table
                .filter(users::national_number.eq(key))
                .select(EmployeeRow::as_select())
                .first(&mut conn)
                .await
                .optional()
                .map_err(map_error)
        })
        .await?;

        require_row(row, national_number)
    }
}
