//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoint for generating payruns
//! from employees and timesheets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrunRequest;
pub use response::ApiError;
pub use state::AppState;
