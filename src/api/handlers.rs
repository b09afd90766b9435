//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::generate_payrun;
use crate::models::{Employee, Timesheet};

use super::request::PayrunRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payruns", post(generate_payrun_handler))
        .with_state(state)
}

/// Handler for the `POST /payruns` endpoint.
///
/// Validates the request, generates a payrun for the period, and returns
/// it with status 201.
async fn generate_payrun_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrunRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payrun request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the period ordering
    if request.period_start > request.period_end {
        warn!(
            correlation_id = %correlation_id,
            period_start = %request.period_start,
            period_end = %request.period_end,
            "Invalid pay period ordering"
        );
        let error = ApiError::validation_error(
            "Period start date must be before or equal to period end date",
        );
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    // Convert request types to domain types
    let mut employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let timesheets: Vec<Timesheet> = request.timesheets.into_iter().map(Into::into).collect();

    // Restrict to the requested employee subset, rejecting unknown IDs
    if let Some(ids) = request.employee_ids.as_ref().filter(|ids| !ids.is_empty()) {
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !employees.iter().any(|e| &e.id == *id))
            .cloned()
            .collect();

        if !missing.is_empty() {
            warn!(
                correlation_id = %correlation_id,
                missing = %missing.join(", "),
                "Requested employees not found"
            );
            let error = ApiError::employees_not_found(&missing);
            return (StatusCode::NOT_FOUND, Json(error)).into_response();
        }

        employees.retain(|e| ids.contains(&e.id));
    }

    if employees.is_empty() {
        warn!(correlation_id = %correlation_id, "No employees in payrun request");
        let error = ApiError::validation_error("No employees found for payrun generation");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    // Generate the payrun
    let config = state.config().config();
    match generate_payrun(
        request.period_start,
        request.period_end,
        &employees,
        &timesheets,
        config,
    ) {
        Ok(payrun) => {
            info!(
                correlation_id = %correlation_id,
                payrun_id = %payrun.id,
                employees_count = employees.len(),
                total_gross = %payrun.totals.gross,
                total_net = %payrun.totals.net,
                "Payrun generated successfully"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payrun),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payrun generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
