//! Behavioural coverage for the salary calculator stages and boundaries.

use super::*;
use crate::domain::{EmployeeId, Month};
use chrono::{TimeZone, Utc};
use rstest::rstest;

const TOLERANCE: f64 = 1e-9;

fn record(month: u8, amount: f64) -> SalaryRecord {
    SalaryRecord {
        employee_id: EmployeeId::new(1),
        year: 2024,
        month: Month::new(month).expect("valid month"),
        amount,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
fn empty_history_is_red_with_zero_figures() {
    let result = SalaryCalculator.calculate(&[]);
    assert_eq!(result, SalaryCalculation::EMPTY);
    assert_eq!(result.summary.average, 0.0);
    assert_eq!(result.summary.highest, 0.0);
    assert_eq!(result.summary.sum, 0.0);
    assert_eq!(result.status, SalaryStatus::Red);
}

#[rstest]
#[case(12, 2200.0)]
#[case(6, 1900.0)]
#[case(7, 1900.0)]
#[case(8, 1900.0)]
#[case(1, 2000.0)]
#[case(5, 2000.0)]
#[case(9, 2000.0)]
#[case(11, 2000.0)]
fn seasonal_adjustment_by_month(#[case] month: u8, #[case] expected: f64) {
    assert_close(seasonally_adjusted(&record(month, 2000.0)), expected);
}

#[rstest]
fn unadjusted_months_pass_amount_through_verbatim() {
    let amount = 1234.567_f64;
    assert_eq!(seasonally_adjusted(&record(3, amount)), amount);
}

#[rstest]
#[case(2000.0, SalaryStatus::Orange)]
#[case(2000.01, SalaryStatus::Green)]
#[case(1999.99, SalaryStatus::Red)]
#[case(0.0, SalaryStatus::Red)]
fn status_threshold_is_exact(#[case] average: f64, #[case] expected: SalaryStatus) {
    assert_eq!(status_for_average(average), expected);
}

#[rstest]
fn average_exactly_at_threshold_is_orange() {
    let history = [record(1, 2000.0), record(2, 2000.0), record(3, 2000.0)];
    let result = SalaryCalculator.calculate(&history);
    assert_eq!(result.summary.average, 2000.0);
    assert_eq!(result.status, SalaryStatus::Orange);
}

#[rstest]
fn pre_tax_total_of_exactly_ten_thousand_is_not_taxed() {
    let history = [
        record(1, 2500.0),
        record(2, 2500.0),
        record(3, 2500.0),
        record(4, 2500.0),
    ];
    let result = SalaryCalculator.calculate(&history);
    assert_eq!(result.summary.sum, 10_000.0);
    assert_eq!(result.summary.highest, 2500.0);
    assert_eq!(result.summary.average, 2500.0);
    assert_eq!(result.status, SalaryStatus::Green);
}

#[rstest]
fn pre_tax_total_above_ten_thousand_taxes_every_record() {
    let history = [
        record(1, 2500.0),
        record(2, 2500.0),
        record(3, 2500.0),
        record(4, 2500.01),
    ];
    let result = SalaryCalculator.calculate(&history);
    assert_close(result.summary.sum, 10_000.01 * TAX_FACTOR);
    assert_close(result.summary.highest, 2500.01 * TAX_FACTOR);
    assert_close(result.summary.average, 10_000.01 * TAX_FACTOR / 4.0);
    assert_eq!(result.status, SalaryStatus::Green);
}

#[rstest]
fn tax_threshold_uses_seasonally_adjusted_total() {
    // Raw total is 10 000 but the December bonus pushes it over the threshold.
    let history = [record(10, 2500.0), record(11, 2500.0), record(12, 5000.0)];
    let result = SalaryCalculator.calculate(&history);
    let expected_sum = (2500.0 + 2500.0 + 5500.0) * TAX_FACTOR;
    assert_close(result.summary.sum, expected_sum);
    assert_close(result.summary.highest, 5500.0 * TAX_FACTOR);
}

#[rstest]
fn summer_deduction_can_keep_total_under_threshold() {
    // Raw total is 10 200; after the summer deduction it drops to 9 690.
    let history = [record(6, 3400.0), record(7, 3400.0), record(8, 3400.0)];
    let result = SalaryCalculator.calculate(&history);
    assert_close(result.summary.sum, 3400.0 * 0.95 * 3.0);
    assert_close(result.summary.average, 3230.0);
    assert_eq!(result.status, SalaryStatus::Green);
}

#[rstest]
fn tax_can_pull_average_below_threshold() {
    let history = [
        record(1, 2100.0),
        record(2, 2100.0),
        record(3, 2100.0),
        record(4, 2100.0),
        record(5, 2100.0),
    ];
    let result = SalaryCalculator.calculate(&history);
    assert_close(result.summary.average, 2100.0 * TAX_FACTOR);
    assert_eq!(result.status, SalaryStatus::Red);
}

#[rstest]
fn nat1001_scenario_is_red() {
    let history = [record(1, 1000.0), record(2, 1500.0), record(3, 2000.0)];
    let result = SalaryCalculator.calculate(&history);
    assert_eq!(result.summary.sum, 4500.0);
    assert_eq!(result.summary.average, 1500.0);
    assert_eq!(result.summary.highest, 2000.0);
    assert_eq!(result.status, SalaryStatus::Red);
}

#[rstest]
fn highest_is_independent_of_input_order() {
    let forward = [record(1, 1000.0), record(12, 3000.0), record(7, 2000.0)];
    let reversed = [record(7, 2000.0), record(12, 3000.0), record(1, 1000.0)];
    let first = SalaryCalculator.calculate(&forward);
    let second = SalaryCalculator.calculate(&reversed);
    assert_eq!(first.summary.highest, second.summary.highest);
    assert_eq!(first.status, second.status);
}

#[rstest]
fn calculation_is_deterministic() {
    let history = [record(6, 1800.0), record(12, 2600.0), record(3, 2100.0)];
    assert_eq!(
        SalaryCalculator.calculate(&history),
        SalaryCalculator.calculate(&history)
    );
}
