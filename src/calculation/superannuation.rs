//! Superannuation guarantee calculation.

use rust_decimal::Decimal;

use crate::config::SuperannuationParams;

use super::rounding::round_to_cents;

/// Calculates the employer superannuation guarantee for a gross amount.
///
/// The guarantee is a flat percentage of gross pay, rounded to cents. The
/// gross is taken per pay period as supplied; no annualization is applied,
/// and no maximum contribution base caps the result, which is a
/// simplification of the full ATO rules.
///
/// # Arguments
///
/// * `gross_amount` - The gross pay for the period
/// * `params` - The superannuation parameters for the financial year
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_superannuation_guarantee;
/// use payg_engine::config::SuperannuationParams;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = SuperannuationParams {
///     guarantee_rate: Decimal::from_str("0.115").unwrap(),
/// };
///
/// let contribution = calculate_superannuation_guarantee(Decimal::from(2000), &params);
/// assert_eq!(contribution, Decimal::from_str("230.00").unwrap());
/// ```
pub fn calculate_superannuation_guarantee(
    gross_amount: Decimal,
    params: &SuperannuationParams,
) -> Decimal {
    round_to_cents(gross_amount * params.guarantee_rate)
}
