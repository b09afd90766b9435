//! Rounding rule shared by the calculation pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to 2 decimal places, half away from zero.
///
/// This is the single rounding rule of the engine, applied to currency
/// amounts (cents) and to hours (cent-of-hour granularity) at each
/// aggregation point of the pipeline. Using one rule everywhere keeps
/// repeated calculations byte-identical for auditability.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_two_dp;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("152.375").unwrap();
/// assert_eq!(round_to_two_dp(value), Decimal::from_str("152.38").unwrap());
/// ```
pub fn round_to_two_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
