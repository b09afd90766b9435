//! Payslip and payrun assembly.
//!
//! This module orchestrates the calculation pipeline per employee and
//! aggregates the resulting payslips into a payrun with totals.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{Employee, Payrun, PayrunTotals, Payslip, Timesheet};

use super::gross_pay::calculate_gross_pay;
use super::hours::calculate_hours;
use super::net_pay::calculate_net;
use super::rounding::round_to_two_dp;
use super::superannuation::calculate_super;
use super::tax::calculate_tax;

/// Calculates the payslip for one employee from their timesheet.
///
/// Runs the full pipeline: hours aggregation, gross pay, tax and
/// superannuation (both from gross), and net pay.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// if any timesheet entry contains a malformed clock string.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payslip;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{Employee, EmploymentType, Timesheet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     first_name: "Alice".to_string(),
///     last_name: "Nguyen".to_string(),
///     employment_type: EmploymentType::Hourly,
///     base_hourly_rate: Decimal::new(35, 0),
///     super_rate: Decimal::new(115, 3),
///     bank: None,
/// };
/// let timesheet = Timesheet {
///     employee_id: "emp_001".to_string(),
///     period_start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
///     entries: vec![],
///     allowances: Decimal::ZERO,
/// };
/// let payslip = calculate_payslip(&employee, &timesheet, &config).unwrap();
/// assert_eq!(payslip.gross, Decimal::ZERO);
/// ```
pub fn calculate_payslip(
    employee: &Employee,
    timesheet: &Timesheet,
    config: &PayrollConfig,
) -> EngineResult<Payslip> {
    let hours = calculate_hours(&timesheet.entries, config)?;

    let gross = calculate_gross_pay(
        hours.normal_hours,
        hours.overtime_hours,
        employee.base_hourly_rate,
        timesheet.allowances,
        config,
    );

    // Tax and super are independent, both derived from gross.
    let tax = calculate_tax(gross, config.tax());
    let superannuation = calculate_super(gross, employee.super_rate);
    let net = calculate_net(gross, tax);

    Ok(Payslip {
        employee_id: employee.id.clone(),
        normal_hours: hours.normal_hours,
        overtime_hours: hours.overtime_hours,
        gross,
        tax,
        superannuation,
        net,
    })
}

/// Generates a payrun for a set of employees over one pay period.
///
/// For each employee, the timesheet matching `(employee_id, period_start,
/// period_end)` exactly is used; an employee with no matching timesheet
/// receives an all-zero payslip rather than being omitted. Payslips keep
/// the employee input order. Totals are the field-wise sums of the
/// payslips, rounded to cents once at the end.
///
/// The payrun gets a fresh unique identifier and creation timestamp;
/// everything else is deterministic in the inputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// if any matched timesheet contains a malformed clock string.
pub fn generate_payrun(
    period_start: NaiveDate,
    period_end: NaiveDate,
    employees: &[Employee],
    timesheets: &[Timesheet],
    config: &PayrollConfig,
) -> EngineResult<Payrun> {
    let mut payslips = Vec::with_capacity(employees.len());

    for employee in employees {
        let timesheet = timesheets
            .iter()
            .find(|ts| ts.matches_period(&employee.id, period_start, period_end));

        let payslip = match timesheet {
            Some(timesheet) => calculate_payslip(employee, timesheet, config)?,
            None => Payslip::zero(&employee.id),
        };
        payslips.push(payslip);
    }

    let totals = calculate_totals(&payslips);

    Ok(Payrun {
        id: Uuid::new_v4(),
        period_start,
        period_end,
        totals,
        payslips,
        created_at: Utc::now(),
    })
}

/// Sums payslip fields into payrun totals, rounding each total to cents
/// at the end (sum-then-round).
fn calculate_totals(payslips: &[Payslip]) -> PayrunTotals {
    let mut gross = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    let mut superannuation = Decimal::ZERO;
    let mut net = Decimal::ZERO;

    for payslip in payslips {
        gross += payslip.gross;
        tax += payslip.tax;
        superannuation += payslip.superannuation;
        net += payslip.net;
    }

    PayrunTotals {
        gross: round_to_two_dp(gross),
        tax: round_to_two_dp(tax),
        superannuation: round_to_two_dp(superannuation),
        net: round_to_two_dp(net),
    }
}
