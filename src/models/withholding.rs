//! Withholding calculation result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-period money breakdown of a withholding calculation.
///
/// Mirrors the top-level figures plus the gross they were derived from, in
/// the shape payslip renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The gross pay for the period.
    pub gross_amount: Decimal,
    /// Income tax withheld for the period.
    pub tax_withheld: Decimal,
    /// Medicare levy (plus any surcharge) for the period.
    pub medicare_levy: Decimal,
    /// Gross less tax and levy.
    pub net_pay: Decimal,
}

/// The result of a PAYG withholding calculation for one pay period.
///
/// All monetary fields are rounded half-up to cents and carry exactly two
/// decimal places, so equal inputs always serialize to identical JSON. The
/// result intentionally has no identifiers or timestamps: the calculation is
/// a pure function of its inputs and the active tax table.
///
/// # Example
///
/// ```
/// use payg_engine::models::{PayBreakdown, WithholdingResult};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = WithholdingResult {
///     tax_withheld: Decimal::from_str("141.66").unwrap(),
///     medicare_levy: Decimal::from_str("20.00").unwrap(),
///     net_pay: Decimal::from_str("838.34").unwrap(),
///     breakdown: PayBreakdown {
///         gross_amount: Decimal::from_str("1000.00").unwrap(),
///         tax_withheld: Decimal::from_str("141.66").unwrap(),
///         medicare_levy: Decimal::from_str("20.00").unwrap(),
///         net_pay: Decimal::from_str("838.34").unwrap(),
///     },
/// };
/// assert_eq!(result.breakdown.gross_amount, Decimal::from_str("1000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingResult {
    /// Income tax withheld for the period.
    pub tax_withheld: Decimal,
    /// Medicare levy (plus any surcharge) for the period.
    pub medicare_levy: Decimal,
    /// Gross less tax and levy.
    pub net_pay: Decimal,
    /// The per-period breakdown including the gross amount.
    pub breakdown: PayBreakdown,
}
