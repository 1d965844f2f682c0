//! PAYG withholding calculation for a single pay period.
//!
//! This is the orchestrating calculation: it annualizes the period gross,
//! computes annual tax and Medicare levy, de-annualizes both, and rounds
//! every monetary output to cents.

use rust_decimal::Decimal;

use crate::config::TaxYearTables;
use crate::models::{PayBreakdown, PayFrequency, TaxDetails, WithholdingResult};

use super::annual_tax::calculate_annual_tax;
use super::medicare::calculate_medicare_levy;
use super::rounding::round_to_cents;

/// Calculates the PAYG withholding for one pay period.
///
/// The gross amount is annualized by the frequency's periods per year, the
/// annual tax (brackets minus LITO) and annual Medicare levy are computed,
/// and both are divided back down to the pay period. Net pay is the gross
/// less the unrounded per-period tax and levy, so the single rounding step
/// happens at the output boundary.
///
/// Zero or negative gross degrades to a pass-through result instead of
/// erroring: every figure is zero except the top-level net pay, which
/// carries the gross amount through unchanged.
///
/// # Arguments
///
/// * `gross_amount` - The gross pay for the period
/// * `frequency` - The pay frequency
/// * `details` - The employee's declaration details
/// * `tables` - The tax tables for the financial year
///
/// # Examples
///
/// ```no_run
/// use payg_engine::calculation::calculate_payg_withholding;
/// use payg_engine::config::ConfigLoader;
/// use payg_engine::models::{PayFrequency, TaxDetails};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/ato")?;
/// let tables = loader.latest()?;
///
/// let result = calculate_payg_withholding(
///     Decimal::from(1000),
///     PayFrequency::Weekly,
///     &TaxDetails::default(),
///     tables,
/// );
/// println!("Withheld: {}, net: {}", result.tax_withheld, result.net_pay);
/// # Ok::<(), payg_engine::error::EngineError>(())
/// ```
pub fn calculate_payg_withholding(
    gross_amount: Decimal,
    frequency: PayFrequency,
    details: &TaxDetails,
    tables: &TaxYearTables,
) -> WithholdingResult {
    if gross_amount <= Decimal::ZERO {
        return pass_through_result(gross_amount);
    }

    let periods = frequency.periods_per_year();
    let annual_gross = gross_amount * periods;

    let annual_tax = calculate_annual_tax(annual_gross, tables);
    let tax_withheld = annual_tax / periods;

    let annual_levy = calculate_medicare_levy(annual_gross, details, &tables.medicare);
    let levy_per_period = annual_levy / periods;

    let net_pay = gross_amount - tax_withheld - levy_per_period;

    WithholdingResult {
        tax_withheld: round_to_cents(tax_withheld),
        medicare_levy: round_to_cents(levy_per_period),
        net_pay: round_to_cents(net_pay),
        breakdown: PayBreakdown {
            gross_amount: round_to_cents(gross_amount),
            tax_withheld: round_to_cents(tax_withheld),
            medicare_levy: round_to_cents(levy_per_period),
            net_pay: round_to_cents(net_pay),
        },
    }
}

/// The degraded result for zero or negative gross.
///
/// The top-level net pay carries the gross through exactly as supplied;
/// the breakdown is fully zeroed, gross included.
fn pass_through_result(gross_amount: Decimal) -> WithholdingResult {
    let zero = round_to_cents(Decimal::ZERO);

    WithholdingResult {
        tax_withheld: zero,
        medicare_levy: zero,
        net_pay: gross_amount,
        breakdown: PayBreakdown {
            gross_amount: zero,
            tax_withheld: zero,
            medicare_levy: zero,
            net_pay: zero,
        },
    }
}
