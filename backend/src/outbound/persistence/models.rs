//! Internal Diesel row structs and their conversions into domain types.
//!
//! Rows never leave the persistence module; repositories convert them
//! before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    Employee, EmployeeId, Month, MonthValidationError, NationalNumber, SalaryRecord,
};

use super::schema::{salaries, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub username: String,
    pub national_number: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: EmployeeId::new(row.id),
            username: row.username,
            national_number: NationalNumber::new(row.national_number),
            email: row.email,
            phone: row.phone,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Row struct for reading from the salaries table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = salaries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SalaryRow {
    pub year: i32,
    pub month: i32,
    pub salary: f64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<SalaryRow> for SalaryRecord {
    type Error = MonthValidationError;

    fn try_from(row: SalaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: EmployeeId::new(row.user_id),
            year: row.year,
            month: Month::try_from(row.month)?,
            amount: row.salary,
            created_at: row.created_at,
        })
    }
}
