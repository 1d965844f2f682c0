//! Medicare levy and surcharge calculation.
//!
//! The base levy applies to all annual income. The surcharge applies only
//! to high earners without private health insurance, with the threshold
//! chosen by the household their declared marital status maps to.

use rust_decimal::Decimal;

use crate::config::MedicareParams;
use crate::models::{SurchargeHousehold, TaxDetails};

use super::rounding::round_to_cents;

/// Calculates the annual Medicare levy, including any surcharge.
///
/// The base levy is `annual_income * levy_rate`. The surcharge of
/// `annual_income * surcharge_rate` is added only when the employee has no
/// private health insurance AND their marital status maps to a surcharge
/// household whose income threshold is exceeded. Statuses that map to no
/// household (see [`MaritalStatus::surcharge_household`]) never attract
/// the surcharge.
///
/// Returns the annual levy rounded to cents; the withholding calculation
/// de-annualizes it to the pay period.
///
/// # Arguments
///
/// * `annual_income` - The annual gross income
/// * `details` - The employee's declaration details
/// * `params` - The Medicare parameters for the financial year
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_medicare_levy;
/// use payg_engine::config::{MedicareParams, SurchargeThresholds};
/// use payg_engine::models::{MaritalStatus, TaxDetails};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = MedicareParams {
///     levy_rate: Decimal::from_str("0.02").unwrap(),
///     surcharge_rate: Decimal::from_str("0.01").unwrap(),
///     surcharge_thresholds: SurchargeThresholds {
///         single: Decimal::from(90000),
///         family: Decimal::from(180000),
///     },
/// };
/// let details = TaxDetails {
///     has_private_health_insurance: false,
///     marital_status: MaritalStatus::Single,
/// };
///
/// // 95000 * 0.02 + 95000 * 0.01 = 2850
/// let levy = calculate_medicare_levy(Decimal::from(95000), &details, &params);
/// assert_eq!(levy, Decimal::from_str("2850.00").unwrap());
/// ```
///
/// [`MaritalStatus::surcharge_household`]: crate::models::MaritalStatus::surcharge_household
pub fn calculate_medicare_levy(
    annual_income: Decimal,
    details: &TaxDetails,
    params: &MedicareParams,
) -> Decimal {
    let mut levy = annual_income * params.levy_rate;

    if !details.has_private_health_insurance {
        if let Some(household) = details.marital_status.surcharge_household() {
            let threshold = match household {
                SurchargeHousehold::Single => params.surcharge_thresholds.single,
                SurchargeHousehold::Family => params.surcharge_thresholds.family,
            };
            if annual_income > threshold {
                levy += annual_income * params.surcharge_rate;
            }
        }
    }

    round_to_cents(levy)
}
