//! Configuration loading and management for the PAYG withholding engine.
//!
//! This module provides functionality to load versioned ATO tax tables from
//! YAML files, including tax brackets, Medicare levy parameters, the Low
//! Income Tax Offset, and the superannuation guarantee rate.
//!
//! # Example
//!
//! ```no_run
//! use payg_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/ato").unwrap();
//! let tables = loader.latest().unwrap();
//! println!("Loaded tables for {}", tables.financial_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AtoTables, LitoParams, MedicareParams, SuperannuationParams, SurchargeThresholds, TaxBracket,
    TaxYearTables,
};
