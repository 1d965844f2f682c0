//! Employee tax declaration details.
//!
//! This module holds the subset of an employee's tax file number declaration
//! that the withholding calculation actually consumes: private health
//! insurance cover and marital status, which together gate the Medicare levy
//! surcharge.

use serde::{Deserialize, Serialize};

/// Marital status as collected on the tax declaration form.
///
/// The declaration form offers `single`, `married`, `de_facto`, `widowed`
/// and `divorced`; the Medicare levy surcharge thresholds are published for
/// the `single` and `family` households only. See
/// [`surcharge_household`](MaritalStatus::surcharge_household) for how the
/// two vocabularies meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Single household.
    Single,
    /// Married.
    Married,
    /// De facto relationship.
    DeFacto,
    /// Widowed.
    Widowed,
    /// Divorced.
    Divorced,
    /// Family household, as used by the surcharge threshold table.
    Family,
    /// No status declared, or a value outside the known vocabulary.
    #[default]
    #[serde(other)]
    Undeclared,
}

/// The household bucket used by the Medicare levy surcharge thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeHousehold {
    /// Assessed against the single-person income threshold.
    Single,
    /// Assessed against the family income threshold.
    Family,
}

impl MaritalStatus {
    /// Maps a declared marital status to its surcharge household, if any.
    ///
    /// Only `single` and `family` participate in the surcharge check; every
    /// other status (including all the remaining declaration-form options)
    /// maps to `None` and is never surcharged. Whether `married`/`de_facto`
    /// should be assessed as `family` is an open product question awaiting
    /// an ATO mapping decision, so those statuses stay outside the check
    /// for now.
    ///
    /// # Example
    ///
    /// ```
    /// use payg_engine::models::{MaritalStatus, SurchargeHousehold};
    ///
    /// assert_eq!(
    ///     MaritalStatus::Single.surcharge_household(),
    ///     Some(SurchargeHousehold::Single)
    /// );
    /// assert_eq!(MaritalStatus::Married.surcharge_household(), None);
    /// ```
    pub fn surcharge_household(&self) -> Option<SurchargeHousehold> {
        match self {
            MaritalStatus::Single => Some(SurchargeHousehold::Single),
            MaritalStatus::Family => Some(SurchargeHousehold::Family),
            MaritalStatus::Married
            | MaritalStatus::DeFacto
            | MaritalStatus::Widowed
            | MaritalStatus::Divorced
            | MaritalStatus::Undeclared => None,
        }
    }
}

/// Tax declaration inputs for a single withholding calculation.
///
/// Supplied per call and never stored by the engine. Both fields default to
/// the values an empty declaration would produce, so callers that have no
/// declaration on file can pass `TaxDetails::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDetails {
    /// Whether the employee holds private health insurance. Uninsured
    /// employees above the income threshold attract the surcharge.
    #[serde(default)]
    pub has_private_health_insurance: bool,
    /// The declared marital status.
    #[serde(default)]
    pub marital_status: MaritalStatus,
}
