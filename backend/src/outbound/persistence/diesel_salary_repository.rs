//! PostgreSQL-backed `SalaryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SalaryRepository, SalaryRepositoryError};
use crate::domain::{EmployeeId, SalaryRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::SalaryRow;
use super::pool::DbPool;
use super::retry::{RetryPolicy, retry_transient};
use super::schema::salaries;

/// Diesel-backed compensation lookup over the `salaries` table.
#[derive(Clone)]
pub struct DieselSalaryRepository {
    pool: DbPool,
    retry: RetryPolicy,
}

impl DieselSalaryRepository {
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

fn map_error(error: diesel::result::Error) -> SalaryRepositoryError {
    map_diesel_error(
        error,
        SalaryRepositoryError::query,
        SalaryRepositoryError::connection,
    )
}

fn rows_to_records(rows: Vec<SalaryRow>) -> Result<Vec<SalaryRecord>, SalaryRepositoryError> {
    rows.into_iter()
        .map(|row| {
            let (year, month) = (row.year, row.month);
            SalaryRecord::try_from(row).map_err(|err| {
                SalaryRepositoryError::query(format!("invalid salary row {year}-{month}: {err}"))
            })
        })
        .collect()
}

fn count_to_u64(count: i64) -> Result<u64, SalaryRepositoryError> {
    u64::try_from(count)
        .map_err(|_| SalaryRepositoryError::query(format!("negative salary count {count}")))
}

#[async_trait]
impl SalaryRepository for DieselSalaryRepository {
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<SalaryRecord>, SalaryRepositoryError> {
        let pool = &self.pool;
        let owner = employee_id.get();

        let rows = retry_transient(&self.retry, "list_salaries", move || async move {
            let mut conn = pool
                .get()
                .await
                .map_err(|err| map_pool_error(err, SalaryRepositoryError::connection))?;

            salaries::table
                .filter(salaries::user_id.eq(owner))
                .order((salaries::year.asc(), salaries::month.asc()))
                .select(SalaryRow::as_select())
                .load(&mut conn)
                .await
                .map_err(map_error)
        })
        .await?;

        rows_to_records(rows)
    }

    async fn count_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<u64, SalaryRepositoryError> {
        let pool = &self.pool;
        let owner = employee_id.get();

        let count: i64 = retry_transient(&self.retry, "count_salaries", move || async move {
            let mut conn = pool
                .get()
                .await
                .map_err(|err| map_pool_error(err, SalaryRepositoryError::connection))?;

            salaries::table
                .filter(salaries::user_id.eq(owner))
                .count()
                .get_result(&mut conn)
                .await
                .map_err(map_error)
        })
        .await?;

        count_to_u64(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn row(month: i32) -> SalaryRow {
        SalaryRow {
            year: 2024,
            month,
            salary: 2000.0,
            user_id: 1,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn valid_rows_keep_storage_order() {
        let records = rows_to_records(vec![row(1), row(2), row(12)]).expect("valid rows");
        let months: Vec<u8> = records.iter().map(|r| r.month.get()).collect();
        assert_eq!(months, vec![1, 2, 12]);
    }

    #[rstest]
    fn out_of_range_month_is_a_query_error() {
        let err = rows_to_records(vec![row(1), row(13)]).expect_err("invalid month");
        assert!(matches!(err, SalaryRepositoryError::Query { .. }));
        assert!(err.to_string().contains("2024-13"));
    }

    #[rstest]
    #[case(0, Some(0))]
    #[case(3, Some(3))]
    #[case(-1, None)]
    fn count_conversion(#[case] raw: i64, #[case] expected: Option<u64>) {
        assert_eq!(count_to_u64(raw).ok(), expected);
    }
}
