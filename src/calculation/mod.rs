//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions of the pay
//! pipeline: time arithmetic and hours aggregation, gross pay with the
//! overtime premium, progressive tax lookup, superannuation, net pay,
//! and the assembly of payslips into payruns.

mod gross_pay;
mod hours;
mod net_pay;
mod payrun;
mod rounding;
mod superannuation;
mod tax;

pub use gross_pay::calculate_gross_pay;
pub use hours::{
    CalculatedHours, calculate_hours, minutes_to_hours, parse_time_to_minutes, worked_minutes,
};
pub use net_pay::calculate_net;
pub use payrun::{calculate_payslip, generate_payrun};
pub use rounding::round_to_two_dp;
pub use superannuation::{DEFAULT_SUPER_RATE, calculate_super};
pub use tax::calculate_tax;
