//! Monthly salary records forming an employee's compensation history.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::EmployeeId;

/// Calendar month, guaranteed to lie in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

/// Validation errors returned when constructing a [`Month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MonthValidationError {
    /// The value lies outside `1..=12`.
    #[error("month must be between 1 and 12, got {0}")]
    OutOfRange(i64),
}

impl Month {
    /// December.
    pub const DECEMBER: Self = Self(12);

    /// Validate and construct a month.
    ///
    /// # Examples
    /// ```
    /// use getemps::domain::Month;
    ///
    /// assert!(Month::new(12).is_ok());
    /// assert!(Month::new(13).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, MonthValidationError> {
        if (1..=12).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MonthValidationError::OutOfRange(i64::from(value)))
        }
    }

    /// Numeric month value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether the month falls in the June–August summer period.
    #[must_use]
    pub const fn is_summer(self) -> bool {
        matches!(self.0, 6..=8)
    }
}

impl TryFrom<u8> for Month {
    type Error = MonthValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Month {
    type Error = MonthValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| MonthValidationError::OutOfRange(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<Month> for u8 {
    fn from(value: Month) -> Self {
        value.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// One month of pay for an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRecord {
    /// Owning employee.
    pub employee_id: EmployeeId,
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: Month,
    /// Gross amount paid; non-negative.
    pub amount: f64,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}
