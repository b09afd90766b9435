//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payrun;
mod payslip;
mod timesheet;

pub use employee::{BankDetails, Employee, EmploymentType};
pub use payrun::{Payrun, PayrunTotals};
pub use payslip::Payslip;
pub use timesheet::{Timesheet, TimesheetEntry};
