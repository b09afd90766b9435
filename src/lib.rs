//! Payroll Calculation Engine for hourly employees
//!
//! This crate converts timesheets into worked hours, applies an overtime
//! threshold, computes gross pay, progressive income tax, superannuation
//! and net pay, and assembles the results into payslips and payruns.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
