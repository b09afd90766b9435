//! Payrun and payrun totals models.
//!
//! This module contains the [`Payrun`] and [`PayrunTotals`] types that
//! aggregate the payslips produced for one pay period.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Payslip;

/// Aggregated totals across all payslips in a payrun.
///
/// Each field is the sum of the corresponding payslip field, rounded to
/// cents once at the end (sum-then-round).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrunTotals {
    /// Total gross pay across the payrun.
    pub gross: Decimal,
    /// Total tax withheld across the payrun.
    pub tax: Decimal,
    /// Total superannuation contributions across the payrun.
    #[serde(rename = "super")]
    pub superannuation: Decimal,
    /// Total net pay across the payrun.
    pub net: Decimal,
}

/// A batch generation of payslips for a set of employees over one period.
///
/// A payrun exclusively owns its payslip sequence and totals; both are
/// value-computed at creation and never mutated afterwards. The set of
/// payslips is fixed at creation, one per requested employee, including
/// zero-valued entries for employees lacking a matching timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payrun {
    /// Unique identifier for this payrun.
    pub id: Uuid,
    /// The start date of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Aggregated totals across all payslips.
    pub totals: PayrunTotals,
    /// The payslips in this payrun, in employee request order.
    pub payslips: Vec<Payslip>,
    /// When the payrun was generated.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_payrun() -> Payrun {
        Payrun {
            id: Uuid::new_v4(),
            period_start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
            totals: PayrunTotals {
                gross: dec("3653.00"),
                tax: dec("569.85"),
                superannuation: dec("420.10"),
                net: dec("3083.15"),
            },
            payslips: vec![Payslip::zero("emp_001")],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_serialize_super_field_name() {
        let payrun = create_test_payrun();
        let json = serde_json::to_string(&payrun.totals).unwrap();
        assert!(json.contains("\"super\":\"420.10\""));
    }

    #[test]
    fn test_payrun_serialization_round_trip() {
        let payrun = create_test_payrun();
        let json = serde_json::to_string(&payrun).unwrap();
        let deserialized: Payrun = serde_json::from_str(&json).unwrap();
        assert_eq!(payrun, deserialized);
    }

    #[test]
    fn test_payrun_ids_are_unique() {
        let a = create_test_payrun();
        let b = create_test_payrun();
        assert_ne!(a.id, b.id);
    }
}
