//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll configuration from
//! YAML files, including overtime settings, superannuation defaults, and
//! the progressive tax bracket table. The tax table is an injectable
//! value so alternate tax regimes can be tested without recompilation.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Tax brackets: {}", config.config().tax().brackets.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimeConfig, PayrollConfig, SuperannuationConfig, TaxBracket, TaxTable};
