//! Configuration types for ATO tax tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML tax table files, one file per financial year.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::FinancialYear;

/// One marginal tax bracket from the resident rates table.
///
/// Bracket bounds follow the ATO's whole-dollar publication convention:
/// each bracket's `min` is one dollar above the previous bracket's `max`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The lowest income the bracket applies to.
    pub min: Decimal,
    /// The highest income the bracket applies to. `None` for the top bracket.
    pub max: Option<Decimal>,
    /// The marginal rate applied within this bracket (e.g. "0.325").
    pub rate: Decimal,
    /// The ATO-published cumulative tax at the bracket floor.
    ///
    /// The engine recomputes tax marginally from the brackets themselves, so
    /// this figure is carried as published reference data only. It is not
    /// checked against the marginal computation: the published figures are
    /// rounded to whole dollars and do not reproduce it exactly.
    pub base: Decimal,
}

/// Medicare levy thresholds above which the surcharge applies.
#[derive(Debug, Clone, Deserialize)]
pub struct SurchargeThresholds {
    /// Annual income threshold for single taxpayers.
    pub single: Decimal,
    /// Annual income threshold for family taxpayers.
    pub family: Decimal,
}

/// Medicare levy parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MedicareParams {
    /// The base levy rate applied to all annual income (e.g. "0.02").
    pub levy_rate: Decimal,
    /// The additional surcharge rate for uninsured high earners (e.g. "0.01").
    pub surcharge_rate: Decimal,
    /// Income thresholds above which the surcharge applies.
    pub surcharge_thresholds: SurchargeThresholds,
}

/// Low Income Tax Offset parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct LitoParams {
    /// The full offset amount for incomes up to `taper_start`.
    pub max_offset: Decimal,
    /// The income up to which the full offset applies.
    pub taper_start: Decimal,
    /// The income at which the tapered offset ends.
    pub taper_end: Decimal,
    /// The reduction per dollar of income above `taper_start` (e.g. "0.05").
    pub taper_rate: Decimal,
}

/// Superannuation guarantee parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SuperannuationParams {
    /// The employer contribution rate as a fraction of gross pay (e.g. "0.115").
    pub guarantee_rate: Decimal,
}

/// The complete set of regulatory constants for one financial year.
///
/// Deserialized from one YAML file under the configuration directory,
/// e.g. `config/ato/2024-25.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearTables {
    /// The financial year these tables apply to.
    pub financial_year: FinancialYear,
    /// The ordered marginal bracket table, lowest bracket first.
    pub brackets: Vec<TaxBracket>,
    /// Medicare levy parameters.
    pub medicare: MedicareParams,
    /// Low Income Tax Offset parameters.
    pub lito: LitoParams,
    /// Superannuation guarantee parameters.
    pub superannuation: SuperannuationParams,
}

impl TaxYearTables {
    /// Checks the structural invariants of the bracket table.
    ///
    /// The brackets must start at zero, ascend contiguously under the
    /// whole-dollar convention, and end with exactly one unbounded bracket.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidTaxTable {
            financial_year: self.financial_year,
            message,
        };

        if self.brackets.is_empty() {
            return Err(invalid("bracket table is empty".to_string()));
        }

        let first = &self.brackets[0];
        if first.min != Decimal::ZERO {
            return Err(invalid(format!(
                "first bracket must start at 0, found {}",
                first.min
            )));
        }

        for (index, pair) in self.brackets.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            let max = current.max.ok_or_else(|| {
                invalid(format!("bracket {} is unbounded but not last", index))
            })?;
            if max <= current.min {
                return Err(invalid(format!(
                    "bracket {} has max {} not above min {}",
                    index, max, current.min
                )));
            }
            if next.min != max + Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} starts at {} but the previous bracket ends at {}",
                    index + 1,
                    next.min,
                    max
                )));
            }
        }

        let last = self
            .brackets
            .last()
            .ok_or_else(|| invalid("bracket table is empty".to_string()))?;
        if last.max.is_some() {
            return Err(invalid("last bracket must be unbounded".to_string()));
        }

        Ok(())
    }
}

/// All loaded year tables, keyed by financial year.
///
/// Construction sorts the tables oldest first so that `latest` always
/// refers to the most recent financial year on hand.
#[derive(Debug, Clone)]
pub struct AtoTables {
    tables: Vec<TaxYearTables>,
}

impl AtoTables {
    /// Creates a new table set from its component years.
    pub fn new(tables: Vec<TaxYearTables>) -> Self {
        let mut sorted_tables = tables;
        sorted_tables.sort_by_key(|t| t.financial_year);
        Self {
            tables: sorted_tables,
        }
    }

    /// Returns the tables for a specific financial year.
    pub fn for_year(&self, financial_year: FinancialYear) -> EngineResult<&TaxYearTables> {
        self.tables
            .iter()
            .find(|t| t.financial_year == financial_year)
            .ok_or(EngineError::TableNotFound { financial_year })
    }

    /// Returns the tables for the most recent financial year on hand.
    pub fn latest(&self) -> EngineResult<&TaxYearTables> {
        self.tables.last().ok_or_else(|| EngineError::ConfigNotFound {
            path: "no tax tables loaded".to_string(),
        })
    }

    /// Resolves an optional financial year to its tables.
    ///
    /// `None` selects the most recent year, matching the behavior of
    /// requests that do not pin a year.
    pub fn resolve(&self, financial_year: Option<FinancialYear>) -> EngineResult<&TaxYearTables> {
        match financial_year {
            Some(year) => self.for_year(year),
            None => self.latest(),
        }
    }

    /// Returns every loaded year table, oldest first.
    pub fn all(&self) -> &[TaxYearTables] {
        &self.tables
    }
}
