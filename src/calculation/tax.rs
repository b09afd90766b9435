//! Progressive income tax calculation.
//!
//! This module maps a gross amount onto the configured tax bracket table
//! and computes the tax owed using each bracket's precomputed cumulative
//! base.

use rust_decimal::Decimal;

use crate::config::TaxTable;

use super::rounding::round_to_two_dp;

/// The 0.01 gap between consecutive bracket bounds.
///
/// Bracket mins sit one cent above the previous bracket's max, so the
/// excess over a bracket's min is adjusted by one cent to make tax
/// continuous across bracket boundaries.
const BRACKET_GAP: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Calculates income tax for a gross amount.
///
/// Non-positive gross amounts and amounts within a zero-rate bracket owe
/// no tax. Otherwise the tax is the bracket's cumulative base plus the
/// marginal rate applied to the excess over the bracket's min (adjusted
/// by the one-cent bracket gap), rounded to cents.
///
/// When no bracket matches, the highest bracket is used as a defensive
/// fallback. The fallback intentionally omits the one-cent adjustment,
/// reproducing the behavior of the system this table was taken from; it
/// is unreachable for cent-rounded input against a table covering
/// `[0, ∞)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::default();
/// let tax = calculate_tax(Decimal::from_str("1325.00").unwrap(), &table);
/// assert_eq!(tax, Decimal::from_str("133.75").unwrap());
/// ```
pub fn calculate_tax(gross: Decimal, table: &TaxTable) -> Decimal {
    if gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let Some(bracket) = table.bracket_for(gross) else {
        return match table.highest_bracket() {
            Some(bracket) => {
                let excess = gross - bracket.min;
                round_to_two_dp(bracket.base + excess * bracket.rate)
            }
            None => Decimal::ZERO,
        };
    };

    if bracket.rate.is_zero() {
        return Decimal::ZERO;
    }

    let excess = gross - bracket.min + BRACKET_GAP;
    round_to_two_dp(bracket.base + excess * bracket.rate)
}
