//! Superannuation calculation.
//!
//! This module computes the employer superannuation contribution as a
//! fraction of gross pay. Super is paid on top of gross and is not
//! deducted from net pay.

use rust_decimal::Decimal;

use super::rounding::round_to_two_dp;

/// The statutory default contribution rate (11.5%), used when an
/// employee record does not specify its own rate.
pub const DEFAULT_SUPER_RATE: Decimal = Decimal::from_parts(115, 0, 0, false, 3);

/// Calculates the superannuation contribution for a gross amount.
///
/// Non-positive gross amounts attract no contribution; otherwise the
/// contribution is `gross * super_rate` rounded to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_super, DEFAULT_SUPER_RATE};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = Decimal::from_str("1325.00").unwrap();
/// let contribution = calculate_super(gross, DEFAULT_SUPER_RATE);
/// assert_eq!(contribution, Decimal::from_str("152.38").unwrap());
/// ```
pub fn calculate_super(gross: Decimal, super_rate: Decimal) -> Decimal {
    if gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    round_to_two_dp(gross * super_rate)
}
