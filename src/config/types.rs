//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, including the
//! progressive tax bracket table.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// One bracket of the progressive income tax table.
///
/// Brackets are inclusive on both bounds; consecutive brackets are
/// defined with a 0.01 gap between one bracket's `max` and the next
/// bracket's `min`, so exactly one bracket matches any cent-rounded
/// gross amount. The `base` field is the precomputed cumulative tax for
/// all income below `min`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (inclusive).
    pub min: Decimal,
    /// The upper bound of the bracket (inclusive); `None` means unbounded.
    pub max: Option<Decimal>,
    /// The marginal tax rate applied to income within this bracket.
    pub rate: Decimal,
    /// Cumulative tax for all income below this bracket's `min`.
    pub base: Decimal,
}

impl TaxBracket {
    /// Returns true if the gross amount falls within this bracket.
    pub fn contains(&self, gross: Decimal) -> bool {
        gross >= self.min && self.max.is_none_or(|max| gross <= max)
    }
}

/// The progressive tax bracket table.
///
/// The table is an immutable, injectable configuration value rather than
/// a global constant, so alternate tax regimes can be exercised in tests
/// without recompilation. [`TaxTable::default`] provides the standard
/// six-bracket table.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::default();
/// let bracket = table.bracket_for(Decimal::new(1325, 0)).unwrap();
/// assert_eq!(bracket.base, Decimal::new(53, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxTable {
    /// The brackets, ordered by ascending `min` and covering `[0, ∞)`.
    pub brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Finds the bracket containing the given gross amount, if any.
    pub fn bracket_for(&self, gross: Decimal) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.contains(gross))
    }

    /// Returns the highest bracket, used as the defensive fallback when
    /// no bracket matches.
    pub fn highest_bracket(&self) -> Option<&TaxBracket> {
        self.brackets.last()
    }

    /// Validates the structural invariants of the table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTaxTable`] if the table is empty,
    /// a bracket's bounds are inverted, the brackets are not ordered by
    /// ascending `min`, or the final bracket is bounded.
    pub fn validate(&self) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(EngineError::InvalidTaxTable {
                message: "table has no brackets".to_string(),
            });
        }

        for (i, bracket) in self.brackets.iter().enumerate() {
            if let Some(max) = bracket.max {
                if max < bracket.min {
                    return Err(EngineError::InvalidTaxTable {
                        message: format!("bracket {} has max below min", i),
                    });
                }
            }
            if i > 0 && bracket.min <= self.brackets[i - 1].min {
                return Err(EngineError::InvalidTaxTable {
                    message: format!("bracket {} is not ordered by ascending min", i),
                });
            }
        }

        // The table must cover [0, ∞): the last bracket is open-ended.
        if self
            .brackets
            .last()
            .is_some_and(|bracket| bracket.max.is_some())
        {
            return Err(EngineError::InvalidTaxTable {
                message: "final bracket must be unbounded".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for TaxTable {
    /// The standard weekly bracket table.
    ///
    /// `base[i] = base[i-1] + rate[i-1] * (max[i-1] - min[i-1])`.
    fn default() -> Self {
        fn bracket(min: Decimal, max: Option<Decimal>, rate: Decimal, base: Decimal) -> TaxBracket {
            TaxBracket {
                min,
                max,
                rate,
                base,
            }
        }

        Self {
            brackets: vec![
                bracket(
                    Decimal::ZERO,
                    Some(Decimal::new(370, 0)),
                    Decimal::ZERO,
                    Decimal::ZERO,
                ),
                bracket(
                    Decimal::new(37001, 2),
                    Some(Decimal::new(900, 0)),
                    Decimal::new(10, 2),
                    Decimal::ZERO,
                ),
                bracket(
                    Decimal::new(90001, 2),
                    Some(Decimal::new(1500, 0)),
                    Decimal::new(19, 2),
                    Decimal::new(53, 0),
                ),
                bracket(
                    Decimal::new(150001, 2),
                    Some(Decimal::new(3000, 0)),
                    Decimal::new(325, 3),
                    Decimal::new(167, 0),
                ),
                bracket(
                    Decimal::new(300001, 2),
                    Some(Decimal::new(5000, 0)),
                    Decimal::new(37, 2),
                    Decimal::new(6545, 1),
                ),
                bracket(
                    Decimal::new(500001, 2),
                    None,
                    Decimal::new(45, 2),
                    Decimal::new(13945, 1),
                ),
            ],
        }
    }
}

/// Overtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OvertimeConfig {
    /// Hours per pay period above which overtime applies.
    pub threshold_hours: Decimal,
    /// Multiplier applied to the base rate for overtime hours.
    pub multiplier: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            threshold_hours: Decimal::new(38, 0),
            multiplier: Decimal::new(15, 1),
        }
    }
}

/// Superannuation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuperannuationConfig {
    /// The contribution rate used when an employee record specifies none.
    pub default_rate: Decimal,
}

impl Default for SuperannuationConfig {
    fn default() -> Self {
        Self {
            default_rate: Decimal::new(115, 3),
        }
    }
}

/// The complete payroll configuration.
///
/// Aggregates the settings loaded from the YAML files in a payroll
/// configuration directory. [`PayrollConfig::default`] provides the
/// built-in values used by tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct PayrollConfig {
    /// Overtime threshold and multiplier.
    overtime: OvertimeConfig,
    /// Superannuation settings.
    superannuation: SuperannuationConfig,
    /// The progressive tax bracket table.
    tax: TaxTable,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        overtime: OvertimeConfig,
        superannuation: SuperannuationConfig,
        tax: TaxTable,
    ) -> Self {
        Self {
            overtime,
            superannuation,
            tax,
        }
    }

    /// Returns the overtime settings.
    pub fn overtime(&self) -> &OvertimeConfig {
        &self.overtime
    }

    /// Returns the superannuation settings.
    pub fn superannuation(&self) -> &SuperannuationConfig {
        &self.superannuation
    }

    /// Returns the tax bracket table.
    pub fn tax(&self) -> &TaxTable {
        &self.tax
    }
}
