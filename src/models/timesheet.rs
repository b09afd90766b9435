//! Timesheet model and related types.
//!
//! This module defines the Timesheet and TimesheetEntry structs for
//! representing hours worked by an employee over a pay period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a single shift on a timesheet.
///
/// Start and end times are clock times in `HH:MM` format on the same
/// calendar day; overnight shifts are not supported. Parsing and worked
/// minute arithmetic live in [`crate::calculation::hours`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// The calendar day the shift was worked.
    pub date: NaiveDate,
    /// The shift start time in `HH:MM` format.
    pub start: String,
    /// The shift end time in `HH:MM` format.
    pub end: String,
    /// Unpaid break time in minutes, subtracted from the worked duration.
    #[serde(default)]
    pub unpaid_break_mins: u32,
}

/// Represents one employee's timesheet for a pay period.
///
/// A timesheet is uniquely identified by `(employee_id, period_start,
/// period_end)`. Entries are not required to be sorted; aggregation is
/// order-independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    /// The ID of the employee this timesheet belongs to.
    pub employee_id: String,
    /// The start date of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// The shifts worked during the period.
    #[serde(default)]
    pub entries: Vec<TimesheetEntry>,
    /// Flat allowances paid on top of hourly earnings.
    #[serde(default)]
    pub allowances: Decimal,
}

impl Timesheet {
    /// Checks whether this timesheet is the one for the given employee
    /// and pay period.
    ///
    /// The match requires exact equality of employee ID and both period
    /// dates; a timesheet whose period merely overlaps the requested
    /// range does not match.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Timesheet;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let timesheet = Timesheet {
    ///     employee_id: "emp_001".to_string(),
    ///     period_start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    ///     period_end: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
    ///     entries: vec![],
    ///     allowances: Decimal::ZERO,
    /// };
    ///
    /// assert!(timesheet.matches_period(
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
    /// ));
    /// ```
    pub fn matches_period(
        &self,
        employee_id: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> bool {
        self.employee_id == employee_id
            && self.period_start == period_start
            && self.period_end == period_end
    }
}
