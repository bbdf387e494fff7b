//! Pure salary calculation: seasonal adjustment, tax, statistics, status.
//!
//! The stages run in a fixed order and each consumes the previous stage's
//! output:
//!
//! 1. seasonal adjustment per record (December bonus, summer deduction);
//! 2. pre-tax total of the adjusted amounts;
//! 3. a uniform tax deduction on every adjusted amount when the total is
//!    strictly above [`TAX_THRESHOLD`];
//! 4. sum, average, highest, and the status threshold on the average.
//!
//! Status comparisons use exact floating-point equality at
//! [`STATUS_THRESHOLD`].

use super::{SalaryRecord, SalaryStatus, SalarySummary};

/// Multiplier applied to December salaries.
pub const HOLIDAY_BONUS_FACTOR: f64 = 1.10;
/// Multiplier applied to June, July, and August salaries.
pub const SUMMER_DEDUCTION_FACTOR: f64 = 0.95;
/// Pre-tax total above which the tax deduction applies.
pub const TAX_THRESHOLD: f64 = 10_000.0;
/// Multiplier applied to every adjusted amount once taxed.
pub const TAX_FACTOR: f64 = 0.93;
/// Average separating `RED`, `ORANGE`, and `GREEN`.
pub const STATUS_THRESHOLD: f64 = 2_000.0;

/// Output of [`SalaryCalculator::calculate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryCalculation {
    /// Aggregate figures.
    pub summary: SalarySummary,
    /// Derived status.
    pub status: SalaryStatus,
}

impl SalaryCalculation {
    /// Result for an empty history.
    pub const EMPTY: Self = Self {
        summary: SalarySummary {
            average: 0.0,
            highest: 0.0,
            sum: 0.0,
        },
        status: SalaryStatus::Red,
    };
}

/// Stateless, deterministic salary calculator.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use getemps::domain::{EmployeeId, Month, SalaryCalculator, SalaryRecord, SalaryStatus};
///
/// let record = |month, amount| SalaryRecord {
///     employee_id: EmployeeId::new(1),
///     year: 2024,
///     month: Month::new(month).expect("valid month"),
///     amount,
///     created_at: Utc::now(),
/// };
/// let history = [record(1, 1000.0), record(2, 1500.0), record(3, 2000.0)];
///
/// let result = SalaryCalculator.calculate(&history);
/// assert_eq!(result.summary.sum, 4500.0);
/// assert_eq!(result.status, SalaryStatus::Red);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    /// Run the full calculation over a salary history.
    #[must_use]
    pub fn calculate(&self, records: &[SalaryRecord]) -> SalaryCalculation {
        if records.is_empty() {
            return SalaryCalculation::EMPTY;
        }

        let adjusted: Vec<f64> = records.iter().map(seasonally_adjusted).collect();
        let pre_tax_total = total(&adjusted);
        let final_amounts = apply_tax(adjusted, pre_tax_total);
        final_statistics(&final_amounts)
    }
}

/// Apply the December bonus or summer deduction to one record.
#[must_use]
pub fn seasonally_adjusted(record: &SalaryRecord) -> f64 {
    if record.month == super::Month::DECEMBER {
        record.amount * HOLIDAY_BONUS_FACTOR
    } else if record.month.is_summer() {
        record.amount * SUMMER_DEDUCTION_FACTOR
    } else {
        record.amount
    }
}

/// Map an adjusted average onto a status.
///
/// # Examples
/// ```
/// use getemps::domain::{SalaryStatus, status_for_average};
///
/// assert_eq!(status_for_average(2000.0), SalaryStatus::Orange);
/// assert_eq!(status_for_average(2000.01), SalaryStatus::Green);
/// assert_eq!(status_for_average(1999.99), SalaryStatus::Red);
/// ```
#[must_use]
pub fn status_for_average(average: f64) -> SalaryStatus {
    if average > STATUS_THRESHOLD {
        SalaryStatus::Green
    } else if average == STATUS_THRESHOLD {
        SalaryStatus::Orange
    } else {
        SalaryStatus::Red
    }
}

fn total(amounts: &[f64]) -> f64 {
    amounts.iter().fold(0.0, |acc, amount| acc + amount)
}

fn apply_tax(adjusted: Vec<f64>, pre_tax_total: f64) -> Vec<f64> {
    if pre_tax_total > TAX_THRESHOLD {
        adjusted.into_iter().map(|amount| amount * TAX_FACTOR).collect()
    } else {
        adjusted
    }
}

fn final_statistics(amounts: &[f64]) -> SalaryCalculation {
    let Some(first) = amounts.first().copied() else {
        return SalaryCalculation::EMPTY;
    };

    let sum = total(amounts);
    let average = sum / amounts.len() as f64;
    let highest = amounts.iter().copied().fold(first, f64::max);

    SalaryCalculation {
        summary: SalarySummary {
            average,
            highest,
            sum,
        },
        status: status_for_average(average),
    }
}

#[cfg(test)]
mod tests;
