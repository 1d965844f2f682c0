//! Pay frequency and annualization.
//!
//! PAYG withholding is computed on annualized income: the per-period gross is
//! scaled up to a yearly amount, taxed against the annual brackets, and the
//! resulting tax is scaled back down to the pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often an employee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid every week (52 periods per year).
    Weekly,
    /// Paid every two weeks (26 periods per year).
    Fortnightly,
    /// Paid every month (12 periods per year).
    Monthly,
    /// Paid once a year (1 period per year).
    Yearly,
}

impl PayFrequency {
    /// Returns the number of pay periods in a year for this frequency.
    ///
    /// # Example
    ///
    /// ```
    /// use payg_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::Fortnightly.periods_per_year(), Decimal::from(26));
    /// ```
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => Decimal::from(52),
            PayFrequency::Fortnightly => Decimal::from(26),
            PayFrequency::Monthly => Decimal::from(12),
            PayFrequency::Yearly => Decimal::ONE,
        }
    }

    /// Parses a frequency string, falling back to weekly.
    ///
    /// Recognizes `weekly`, `fortnightly`, `monthly`, and `yearly`, ignoring
    /// case and surrounding whitespace. Anything else, including an empty
    /// string, is treated as weekly rather than rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use payg_engine::models::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::parse_lenient("monthly"), PayFrequency::Monthly);
    /// assert_eq!(PayFrequency::parse_lenient("every-other-day"), PayFrequency::Weekly);
    /// ```
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fortnightly" => PayFrequency::Fortnightly,
            "monthly" => PayFrequency::Monthly,
            "yearly" => PayFrequency::Yearly,
            _ => PayFrequency::Weekly,
        }
    }

    /// Returns the snake_case name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Fortnightly => "fortnightly",
            PayFrequency::Monthly => "monthly",
            PayFrequency::Yearly => "yearly",
        }
    }
}
