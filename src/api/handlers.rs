//! HTTP request handlers for the PAYG withholding engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_payg_withholding, calculate_superannuation_guarantee, generate_payment_summary,
    generate_stp_data, validate_tfn,
};
use crate::models::PayRun;

use super::request::{PaymentSummaryRequest, StpRequest, TfnValidationRequest, WithholdingRequest};
use super::response::{ApiError, ApiErrorResponse, TfnValidationResponse, WithholdingResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate-payg", post(calculate_payg_handler))
        .route("/validate-tfn", post(validate_tfn_handler))
        .route("/payment-summary", post(payment_summary_handler))
        .route("/stp-data", post(stp_data_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure onto the API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
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
                ApiError::validation_error(body_text)
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

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /calculate-payg endpoint.
///
/// Calculates the PAYG withholding and the superannuation guarantee for
/// one pay period.
async fn calculate_payg_handler(
    State(state): State<AppState>,
    payload: Result<Json<WithholdingRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing PAYG withholding request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let tables = match state.config().resolve(request.financial_year) {
        Ok(tables) => tables,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Tax table lookup failed"
            );
            return engine_error(err.into());
        }
    };

    let frequency = request.frequency();
    let start_time = Instant::now();
    let calculation = calculate_payg_withholding(
        request.gross_amount,
        frequency,
        &request.employee_details,
        tables,
    );
    let superannuation =
        calculate_superannuation_guarantee(request.gross_amount, &tables.superannuation);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        gross_amount = %request.gross_amount,
        frequency = frequency.as_str(),
        financial_year = %tables.financial_year,
        net_pay = %calculation.net_pay,
        duration_us = duration.as_micros(),
        "PAYG withholding calculated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(WithholdingResponse {
            calculation,
            superannuation,
        }),
    )
        .into_response()
}

/// Handler for POST /validate-tfn endpoint.
///
/// Checks the format of a tax file number. The number itself is never
/// logged.
async fn validate_tfn_handler(
    payload: Result<Json<TfnValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing TFN validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let is_valid = validate_tfn(&request.tfn);
    info!(correlation_id = %correlation_id, is_valid, "TFN format checked");

    let message = if is_valid {
        "Valid TFN format"
    } else {
        "Invalid TFN format"
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(TfnValidationResponse {
            is_valid,
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Handler for POST /payment-summary endpoint.
///
/// Aggregates the supplied pay records into an annual payment summary.
async fn payment_summary_handler(
    payload: Result<Json<PaymentSummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payment summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let record_count = request.records.len();
    let summary =
        generate_payment_summary(&request.employee, &request.records, request.financial_year);

    info!(
        correlation_id = %correlation_id,
        employee_id = %summary.employee_id,
        financial_year = %summary.financial_year,
        records = record_count,
        total_gross = %summary.total_gross,
        "Payment summary generated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for POST /stp-data endpoint.
///
/// Shapes a completed pay run into a Single Touch Payroll submission.
async fn stp_data_handler(
    payload: Result<Json<StpRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing STP data request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let pay_run: PayRun = request.into();
    let submission = generate_stp_data(&pay_run);

    info!(
        correlation_id = %correlation_id,
        payrun_id = %submission.payrun_id,
        employees = submission.employees.len(),
        total_gross = %submission.totals.total_gross,
        "STP data generated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(submission),
    )
        .into_response()
}
