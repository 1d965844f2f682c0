//! PAYG Withholding Engine for Australian payroll
//!
//! This crate implements the Australian Taxation Office calculations a payroll
//! system needs each pay period: PAYG withholding from the resident tax
//! brackets, the Low Income Tax Offset, the Medicare levy and surcharge, the
//! superannuation guarantee, TFN validation, and the payment-summary / Single
//! Touch Payroll aggregates reported to the ATO.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
