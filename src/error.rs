//! Error types for the PAYG Withholding Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading tax tables and
//! serving calculations.

use thiserror::Error;

use crate::models::FinancialYear;

/// The main error type for the PAYG Withholding Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The
/// calculation functions themselves are total: invalid amounts degrade to
/// zeroed results rather than erroring, so these variants only surface from
/// the configuration and lookup edges.
///
/// # Example
///
/// ```
/// use payg_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax table failed structural validation.
    #[error("Invalid tax table for {financial_year}: {message}")]
    InvalidTaxTable {
        /// The financial year of the offending table.
        financial_year: FinancialYear,
        /// A description of the invariant that was violated.
        message: String,
    },

    /// No tax table is loaded for the requested financial year.
    #[error("No tax table loaded for financial year {financial_year}")]
    TableNotFound {
        /// The financial year that was requested.
        financial_year: FinancialYear,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
