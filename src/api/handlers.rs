//! HTTP request handlers for the scheduling engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::has_hard_violation;
use crate::rules::{self, EvaluationContext};
use crate::scheduler;

use super::request::{EvaluateRequest, ScheduleRunRequest};
use super::response::{ApiError, ApiErrorResponse, EvaluationResponse, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 response, teasing apart
/// missing-field errors from syntax errors.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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
    }
}

/// Handler for the POST /evaluate endpoint.
///
/// Evaluates one candidate shift against the full rule set and returns
/// the ordered violations plus a blocking flag.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let profile = match state.profiles().get(&request.profile) {
        Ok(profile) => profile,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                profile = %request.profile,
                "Profile not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let employee = match &request.employee_id {
        Some(employee_id) => {
            match request
                .roster
                .iter()
                .find(|employee| &employee.id == employee_id)
            {
                Some(employee) => Some(employee),
                None => {
                    warn!(
                        correlation_id = %correlation_id,
                        employee_id = %employee_id,
                        "Employee not on roster"
                    );
                    return (
                        StatusCode::BAD_REQUEST,
                        [(header::CONTENT_TYPE, "application/json")],
                        Json(ApiError::with_details(
                            "UNKNOWN_EMPLOYEE",
                            format!("Employee not on roster: {}", employee_id),
                            "The employee_id must reference a roster entry in the request",
                        )),
                    )
                        .into_response();
                }
            }
        }
        None => None,
    };

    let context = EvaluationContext {
        shifts: &request.shifts,
        availability: &request.availability,
        profile,
        roles: &request.roles,
        roster: &request.roster,
    };
    let violations = rules::evaluate(&request.shift, employee, &context);
    let blocking = has_hard_violation(&violations);

    info!(
        correlation_id = %correlation_id,
        shift_id = %request.shift.id,
        violations = violations.len(),
        blocking,
        "Evaluation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(EvaluationResponse {
            evaluation_id: correlation_id,
            violations,
            blocking,
        }),
    )
        .into_response()
}

/// Handler for the POST /schedule endpoint.
///
/// Runs the full two-phase auto-scheduler and returns the proposed plan.
/// The result is a dry run: committing it remains the caller's decision,
/// gated on the absence of hard violations.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRunRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let profile = match state.profiles().get(&request.profile) {
        Ok(profile) => profile.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                profile = %request.profile,
                "Profile not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let engine_request = request.into_engine_request(profile);
    let start_time = Instant::now();
    let result = scheduler::run(&engine_request);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        shifts = result.shifts.len(),
        unmet = result.unmet.len(),
        violations = result.violations.len(),
        total_score = result.score.total,
        duration_us = duration.as_micros(),
        "Schedule run completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ScheduleResponse {
            plan_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            shifts: result.shifts,
            unmet: result.unmet,
            violations: result.violations,
            score: result.score,
        }),
    )
        .into_response()
}
