//! Low Income Tax Offset calculation.
//!
//! The LITO reduces the tax payable by lower-income earners. It is a
//! piecewise-linear offset: a flat maximum up to a threshold, then a
//! straight-line taper down to zero.

use rust_decimal::Decimal;

use crate::config::LitoParams;

/// Calculates the Low Income Tax Offset for an annual income.
///
/// The offset is the full `max_offset` for incomes up to `taper_start`,
/// tapers at `taper_rate` per dollar for incomes up to and including
/// `taper_end`, and is zero above that. The taper boundary is inclusive:
/// at exactly `taper_end` the remaining tapered offset still applies, and
/// the offset drops to zero only strictly above it.
///
/// The returned offset is not rounded; the annual tax calculation rounds
/// once after the offset is applied.
///
/// # Arguments
///
/// * `annual_income` - The annual gross income
/// * `params` - The LITO parameters for the financial year
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_lito;
/// use payg_engine::config::LitoParams;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = LitoParams {
///     max_offset: Decimal::from(700),
///     taper_start: Decimal::from(37500),
///     taper_end: Decimal::from(45000),
///     taper_rate: Decimal::from_str("0.05").unwrap(),
/// };
///
/// assert_eq!(calculate_lito(Decimal::from(30000), &params), Decimal::from(700));
/// assert_eq!(calculate_lito(Decimal::from(40000), &params), Decimal::from(575));
/// assert_eq!(calculate_lito(Decimal::from(50000), &params), Decimal::ZERO);
/// ```
pub fn calculate_lito(annual_income: Decimal, params: &LitoParams) -> Decimal {
    if annual_income <= params.taper_start {
        params.max_offset
    } else if annual_income <= params.taper_end {
        let reduction = (annual_income - params.taper_start) * params.taper_rate;
        (params.max_offset - reduction).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}
