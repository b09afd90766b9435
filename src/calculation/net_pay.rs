//! Net pay calculation.

use rust_decimal::Decimal;

use super::rounding::round_to_two_dp;

/// Calculates net pay: gross minus tax, rounded to cents.
///
/// Superannuation is an employer contribution and is not deducted here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let net = calculate_net(
///     Decimal::from_str("1325.00").unwrap(),
///     Decimal::from_str("133.75").unwrap(),
/// );
/// assert_eq!(net, Decimal::from_str("1191.25").unwrap());
/// ```
pub fn calculate_net(gross: Decimal, tax: Decimal) -> Decimal {
    round_to_two_dp(gross - tax)
}
