//! Calculation logic for the PAYG withholding engine.
//!
//! This module contains all the calculation functions for Australian payroll
//! compliance, including annualized progressive bracket tax, the Low Income
//! Tax Offset, the Medicare levy and surcharge, per-period PAYG withholding,
//! the superannuation guarantee, tax file number validation, annual payment
//! summary generation, and Single Touch Payroll submission shaping.

mod annual_tax;
mod lito;
mod medicare;
mod payment_summary;
mod rounding;
mod stp;
mod superannuation;
mod tfn;
mod withholding;

pub use annual_tax::{calculate_annual_tax, calculate_bracket_tax};
pub use lito::calculate_lito;
pub use medicare::calculate_medicare_levy;
pub use payment_summary::generate_payment_summary;
pub use rounding::round_to_cents;
pub use stp::generate_stp_data;
pub use superannuation::calculate_superannuation_guarantee;
pub use tfn::{tfn_passes_checksum, validate_tfn};
pub use withholding::calculate_payg_withholding;
