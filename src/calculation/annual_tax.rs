//! Annual income tax calculation over the progressive bracket table.
//!
//! Tax is recomputed marginally on every call: each bracket contributes its
//! rate applied to the slice of income that falls inside it. The published
//! per-bracket base figures in the table are not used by the computation.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, TaxYearTables};

use super::lito::calculate_lito;
use super::rounding::round_to_cents;

/// Computes raw marginal tax over an ordered bracket table.
///
/// For each bracket the income reaches, the slice between the bracket floor
/// and the lesser of the income and the bracket ceiling is taxed at the
/// bracket's marginal rate. No offsets or rounding are applied here.
///
/// # Arguments
///
/// * `annual_income` - The annual gross income
/// * `brackets` - The ordered bracket table, lowest bracket first
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_bracket_tax;
/// use payg_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     TaxBracket {
///         min: Decimal::ZERO,
///         max: Some(Decimal::from(18200)),
///         rate: Decimal::ZERO,
///         base: Decimal::ZERO,
///     },
///     TaxBracket {
///         min: Decimal::from(18201),
///         max: None,
///         rate: Decimal::from_str("0.19").unwrap(),
///         base: Decimal::ZERO,
///     },
/// ];
///
/// let tax = calculate_bracket_tax(Decimal::from(20000), &brackets);
/// assert_eq!(tax, Decimal::from_str("341.81").unwrap());
/// ```
pub fn calculate_bracket_tax(annual_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if annual_income > bracket.min {
            let ceiling = match bracket.max {
                Some(max) => annual_income.min(max),
                None => annual_income,
            };
            tax += (ceiling - bracket.min) * bracket.rate;
        }
    }

    tax
}

/// Calculates the annual income tax for a financial year.
///
/// Runs the marginal bracket scan, subtracts the Low Income Tax Offset,
/// floors the result at zero, and rounds to cents. The offset can never
/// push tax below zero.
///
/// # Arguments
///
/// * `annual_income` - The annual gross income
/// * `tables` - The tax tables for the financial year
///
/// # Returns
///
/// The annual tax in dollars, rounded to cents.
pub fn calculate_annual_tax(annual_income: Decimal, tables: &TaxYearTables) -> Decimal {
    let bracket_tax = calculate_bracket_tax(annual_income, &tables.brackets);
    let lito = calculate_lito(annual_income, &tables.lito);
    let tax = (bracket_tax - lito).max(Decimal::ZERO);

    round_to_cents(tax)
}
