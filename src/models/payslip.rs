//! Payslip model.
//!
//! This module defines the [`Payslip`] struct, the computed pay result for
//! one employee over one pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay result for one employee in a payrun.
///
/// A payslip is derived entirely from an [`Employee`](super::Employee) and
/// the matching [`Timesheet`](super::Timesheet) for the period, and is
/// immutable once computed. All monetary fields are rounded to cents.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Payslip;
///
/// let payslip = Payslip::zero("emp_001");
/// assert_eq!(payslip.gross, rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The ID of the employee this payslip is for.
    pub employee_id: String,
    /// Hours paid at the base rate.
    pub normal_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Gross pay: base earnings plus overtime premium plus allowances.
    pub gross: Decimal,
    /// Income tax withheld from gross pay.
    pub tax: Decimal,
    /// Employer superannuation contribution (not deducted from net).
    #[serde(rename = "super")]
    pub superannuation: Decimal,
    /// Net pay: gross minus tax.
    pub net: Decimal,
}

impl Payslip {
    /// Creates an all-zero payslip for an employee.
    ///
    /// Used when an employee has no matching timesheet for the payrun
    /// period; the employee still appears in the payrun with zero pay.
    pub fn zero(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            normal_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            gross: Decimal::ZERO,
            tax: Decimal::ZERO,
            superannuation: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }
}
