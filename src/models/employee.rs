//! Employee model and related types.
//!
//! This module defines the Employee struct, EmploymentType enum and bank
//! payment details for representing workers in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_SUPER_RATE;

/// Represents the type of employment arrangement.
///
/// Only hourly employees are supported; the enum exists so that salaried
/// or contractor arrangements can be added without changing the model shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Paid per hour worked, with overtime above the weekly threshold.
    Hourly,
}

/// Bank payment details for an employee.
///
/// These are pass-through data for downstream payment systems and play
/// no part in any calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// The BSB number (e.g., "083-123").
    pub bsb: String,
    /// The account number.
    pub account: String,
}

/// Represents an employee subject to payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
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
    /// The superannuation contribution rate as a fraction in [0, 1].
    #[serde(default = "default_super_rate")]
    pub super_rate: Decimal,
    /// Optional bank payment details (pass-through only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankDetails>,
}

fn default_super_rate() -> Decimal {
    DEFAULT_SUPER_RATE
}

impl Employee {
    /// Returns the employee's full name.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentType};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Alice".to_string(),
    ///     last_name: "Nguyen".to_string(),
    ///     employment_type: EmploymentType::Hourly,
    ///     base_hourly_rate: Decimal::new(3500, 2),
    ///     super_rate: Decimal::new(115, 3),
    ///     bank: None,
    /// };
    /// assert_eq!(employee.full_name(), "Alice Nguyen");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
