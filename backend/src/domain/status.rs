//! Computed, cacheable employee status snapshot.
//!
//! A snapshot is assembled once per cache miss and is immutable afterwards.
//! Its serde form is both the HTTP response body and the cached
//! representation, so field names are part of the wire contract.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Employee, EmployeeId, NationalNumber};

/// Tri-state salary status derived from the adjusted average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryStatus {
    /// Average strictly above the threshold.
    Green,
    /// Average exactly at the threshold.
    Orange,
    /// Average below the threshold, or no history.
    Red,
}

impl SalaryStatus {
    /// Upper-case label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Orange => "ORANGE",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate salary figures after seasonal and tax adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Mean of the adjusted amounts.
    #[serde(rename = "averageSalary")]
    pub average: f64,
    /// Largest adjusted amount.
    #[serde(rename = "highestSalary")]
    pub highest: f64,
    /// Sum of the adjusted amounts.
    #[serde(rename = "sumOfSalaries")]
    pub sum: f64,
}

/// Status snapshot returned to callers and stored in the cache.
///
/// `last_updated` records when the snapshot was computed. Cache hits return
/// it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Internal employee identifier.
    pub id: EmployeeId,
    /// Display name.
    pub username: String,
    /// External identifier used for the lookup.
    pub national_number: NationalNumber,
    /// Contact e-mail address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Active flag at computation time.
    pub is_active: bool,
    /// Adjusted salary figures.
    #[serde(rename = "salaryDetails")]
    pub salary: SalarySummary,
    /// Derived status.
    pub status: SalaryStatus,
    /// Computation timestamp.
    pub last_updated: DateTime<Utc>,
}

impl StatusSnapshot {
    /// Combine employee fields with a calculation result.
    #[must_use]
    pub fn assemble(
        employee: &Employee,
        salary: SalarySummary,
        status: SalaryStatus,
        computed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: employee.id,
            username: employee.username.clone(),
            national_number: employee.national_number.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            is_active: employee.is_active,
            salary,
            status,
            last_updated: computed_at,
        }
    }
}
