//! HTTP API layer for the PAYG withholding engine.
//!
//! This module provides the REST surface over the calculation engine,
//! with JSON request/response handling and standardised error bodies.

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use request::{PaymentSummaryRequest, StpRequest, TfnValidationRequest, WithholdingRequest};
pub use response::{ApiError, ApiErrorResponse, TfnValidationResponse, WithholdingResponse};
pub use state::AppState;
