//! Response types for the PAYG withholding engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{FinancialYear, WithholdingResult};

/// Response body for the `/calculate-payg` endpoint.
///
/// Carries the withholding calculation together with the superannuation
/// guarantee on the same gross, the shape the payroll front end consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingResponse {
    /// The PAYG withholding calculation.
    pub calculation: WithholdingResult,
    /// The employer superannuation guarantee for the same gross.
    pub superannuation: Decimal,
}

/// Response body for the `/validate-tfn` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfnValidationResponse {
    /// Whether the tax file number has a valid format.
    pub is_valid: bool,
    /// Presentation text for the validation outcome.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a tax table not found error response.
    pub fn table_not_found(financial_year: FinancialYear) -> Self {
        Self::with_details(
            "TABLE_NOT_FOUND",
            format!("No tax tables for financial year {}", financial_year),
            format!(
                "The financial year '{}' has no tax tables loaded in this engine",
                financial_year
            ),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTaxTable {
                financial_year,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid tax table for {}", financial_year),
                    message,
                ),
            },
            EngineError::TableNotFound { financial_year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::table_not_found(financial_year),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
