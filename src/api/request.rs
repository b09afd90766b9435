//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/payruns`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_SUPER_RATE;
use crate::models::{BankDetails, Employee, EmploymentType, Timesheet, TimesheetEntry};

/// Request body for the `POST /payruns` endpoint.
///
/// Contains the pay period, the employee set, and the timesheets to
/// draw from. Timesheets that do not match the requested period exactly
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrunRequest {
    /// The start date of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// The employees to generate payslips for.
    pub employees: Vec<EmployeeRequest>,
    /// The timesheets available for the period.
    #[serde(default)]
    pub timesheets: Vec<TimesheetRequest>,
    /// Optional subset of employee IDs to include; all employees when
    /// absent or empty.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
}

/// Employee information in a payrun request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The type of employment arrangement.
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    /// The base hourly rate of pay.
    pub base_hourly_rate: Decimal,
    /// The superannuation contribution rate.
    #[serde(default = "default_super_rate")]
    pub super_rate: Decimal,
    /// Optional bank payment details.
    #[serde(default)]
    pub bank: Option<BankRequest>,
}

fn default_super_rate() -> Decimal {
    DEFAULT_SUPER_RATE
}

/// Bank details in a payrun request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankRequest {
    /// The BSB number.
    pub bsb: String,
    /// The account number.
    pub account: String,
}

/// Timesheet information in a payrun request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The ID of the employee this timesheet belongs to.
    pub employee_id: String,
    /// The start date of the timesheet's pay period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the timesheet's pay period (inclusive).
    pub period_end: NaiveDate,
    /// The shifts worked during the period.
    #[serde(default)]
    pub entries: Vec<TimesheetEntryRequest>,
    /// Flat allowances paid on top of hourly earnings.
    #[serde(default)]
    pub allowances: Decimal,
}

/// Timesheet entry information in a payrun request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetEntryRequest {
    /// The calendar day the shift was worked.
    pub date: NaiveDate,
    /// The shift start time in `HH:MM` format.
    pub start: String,
    /// The shift end time in `HH:MM` format.
    pub end: String,
    /// Unpaid break time in minutes.
    #[serde(default)]
    pub unpaid_break_mins: u32,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            employment_type: req.employment_type,
            base_hourly_rate: req.base_hourly_rate,
            super_rate: req.super_rate,
            bank: req.bank.map(Into::into),
        }
    }
}

impl From<BankRequest> for BankDetails {
    fn from(req: BankRequest) -> Self {
        BankDetails {
            bsb: req.bsb,
            account: req.account,
        }
    }
}

impl From<TimesheetRequest> for Timesheet {
    fn from(req: TimesheetRequest) -> Self {
        Timesheet {
            employee_id: req.employee_id,
            period_start: req.period_start,
            period_end: req.period_end,
            entries: req.entries.into_iter().map(Into::into).collect(),
            allowances: req.allowances,
        }
    }
}

impl From<TimesheetEntryRequest> for TimesheetEntry {
    fn from(req: TimesheetEntryRequest) -> Self {
        TimesheetEntry {
            date: req.date,
            start: req.start,
            end: req.end,
            unpaid_break_mins: req.unpaid_break_mins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_payrun_request() {
        let json = r#"{
            "period_start": "2026-01-05",
            "period_end": "2026-01-11",
            "employees": [
                {
                    "id": "emp_001",
                    "first_name": "Alice",
                    "last_name": "Nguyen",
                    "type": "hourly",
                    "base_hourly_rate": "35",
                    "super_rate": "0.115"
                }
            ],
            "timesheets": [
                {
                    "employee_id": "emp_001",
                    "period_start": "2026-01-05",
                    "period_end": "2026-01-11",
                    "entries": [
                        {
                            "date": "2026-01-05",
                            "start": "09:00",
                            "end": "17:30",
                            "unpaid_break_mins": 30
                        }
                    ],
                    "allowances": "30"
                }
            ]
        }"#;

        let request: PayrunRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employees.len(), 1);
        assert_eq!(request.employees[0].id, "emp_001");
        assert_eq!(request.timesheets.len(), 1);
        assert_eq!(request.timesheets[0].entries[0].unpaid_break_mins, 30);
        assert!(request.employee_ids.is_none());
    }

    #[test]
    fn test_deserialize_request_with_employee_ids_filter() {
        let json = r#"{
            "period_start": "2026-01-05",
            "period_end": "2026-01-11",
            "employees": [],
            "employee_ids": ["emp_001", "emp_002"]
        }"#;

        let request: PayrunRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.employee_ids,
            Some(vec!["emp_001".to_string(), "emp_002".to_string()])
        );
        assert!(request.timesheets.is_empty());
    }

    #[test]
    fn test_employee_conversion() {
        let req = EmployeeRequest {
            id: "emp_001".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            employment_type: EmploymentType::Hourly,
            base_hourly_rate: Decimal::from_str("35").unwrap(),
            super_rate: Decimal::from_str("0.115").unwrap(),
            bank: Some(BankRequest {
                bsb: "083-123".to_string(),
                account: "12345678".to_string(),
            }),
        };

        let employee: Employee = req.into();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.bank.as_ref().unwrap().bsb, "083-123");
    }

    #[test]
    fn test_timesheet_conversion_preserves_entry_order() {
        let req = TimesheetRequest {
            employee_id: "emp_001".to_string(),
            period_start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
            entries: vec![
                TimesheetEntryRequest {
                    date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
                    start: "09:00".to_string(),
                    end: "17:00".to_string(),
                    unpaid_break_mins: 0,
                },
                TimesheetEntryRequest {
                    date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                    start: "08:00".to_string(),
                    end: "16:00".to_string(),
                    unpaid_break_mins: 0,
                },
            ],
            allowances: Decimal::ZERO,
        };

        let timesheet: Timesheet = req.into();
        assert_eq!(timesheet.entries[0].start, "09:00");
        assert_eq!(timesheet.entries[1].start, "08:00");
    }
}
