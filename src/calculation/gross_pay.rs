//! Gross pay calculation.
//!
//! This module computes gross pay from the normal/overtime hours split,
//! the employee's base rate, and any flat allowances.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;

use super::rounding::round_to_two_dp;

/// Calculates gross pay for an hourly employee.
///
/// Normal hours are paid at the base rate, overtime hours at the base
/// rate times the configured multiplier (1.5 by default). Allowances are
/// flat amounts added after the overtime premium, never rate-multiplied.
/// The result is rounded to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PayrollConfig::default();
/// let gross = calculate_gross_pay(
///     Decimal::from_str("38").unwrap(),
///     Decimal::from_str("7").unwrap(),
///     Decimal::from_str("48").unwrap(),
///     Decimal::ZERO,
///     &config,
/// );
/// assert_eq!(gross, Decimal::from_str("2328.00").unwrap());
/// ```
pub fn calculate_gross_pay(
    normal_hours: Decimal,
    overtime_hours: Decimal,
    base_rate: Decimal,
    allowances: Decimal,
    config: &PayrollConfig,
) -> Decimal {
    let normal_pay = normal_hours * base_rate;
    let overtime_pay = overtime_hours * base_rate * config.overtime().multiplier;

    round_to_two_dp(normal_pay + overtime_pay + allowances)
}
