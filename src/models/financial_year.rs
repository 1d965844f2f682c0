//! Financial year value type.
//!
//! Australian tax tables, payment summaries, and STP reporting are all keyed
//! by the financial year, which runs from 1 July to 30 June and is written
//! `2024-25` in ATO publications.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An Australian financial year (1 July to 30 June).
///
/// The year is identified by its starting calendar year: `2024-25` starts on
/// 1 July 2024 and ends on 30 June 2025. Serialized as the ATO label string.
///
/// # Example
///
/// ```
/// use payg_engine::models::FinancialYear;
/// use chrono::NaiveDate;
///
/// let fy: FinancialYear = "2024-25".parse().unwrap();
/// assert_eq!(fy, FinancialYear::starting(2024));
/// assert!(fy.contains(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()));
/// assert!(!fy.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear {
    start_year: i32,
}

/// Error returned when a financial year label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid financial year label '{label}': expected the form 2024-25")]
pub struct ParseFinancialYearError {
    /// The label that failed to parse.
    pub label: String,
}

impl FinancialYear {
    /// Creates the financial year starting on 1 July of the given year.
    pub fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Returns the calendar year containing this financial year's 1 July.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the financial year containing the given date.
    ///
    /// Dates from July onward belong to the year that starts in that
    /// calendar year; January through June dates belong to the previous one.
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() >= 7 {
            Self::starting(date.year())
        } else {
            Self::starting(date.year() - 1)
        }
    }

    /// The first day of the financial year (1 July).
    pub fn start_date(&self) -> NaiveDate {
        // Only fails outside chrono's representable year range.
        NaiveDate::from_ymd_opt(self.start_year, 7, 1).unwrap_or_default()
    }

    /// The last day of the financial year (30 June).
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year + 1, 6, 30).unwrap_or_default()
    }

    /// Returns true if the date falls within this financial year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

impl FromStr for FinancialYear {
    type Err = ParseFinancialYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFinancialYearError {
            label: s.to_string(),
        };

        let (start, end) = s.split_once('-').ok_or_else(err)?;
        let start_year: i32 = start.parse().map_err(|_| err())?;
        let end_suffix: i32 = end.parse().map_err(|_| err())?;

        // The suffix must be the two-digit form of the following year.
        if start.len() != 4 || end.len() != 2 || end_suffix != (start_year + 1).rem_euclid(100) {
            return Err(err());
        }

        Ok(Self::starting(start_year))
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = ParseFinancialYearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(fy: FinancialYear) -> Self {
        fy.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        let fy = FinancialYear::starting(2024);
        assert_eq!(fy.to_string(), "2024-25");
        assert_eq!("2024-25".parse::<FinancialYear>().unwrap(), fy);
    }

    #[test]
    fn test_century_boundary_label() {
        assert_eq!(FinancialYear::starting(1999).to_string(), "1999-00");
        assert_eq!(
            "1999-00".parse::<FinancialYear>().unwrap(),
            FinancialYear::starting(1999)
        );
    }

    #[test]
    fn test_rejects_mismatched_suffix() {
        assert!("2024-26".parse::<FinancialYear>().is_err());
        assert!("2024-2025".parse::<FinancialYear>().is_err());
        assert!("24-25".parse::<FinancialYear>().is_err());
        assert!("garbage".parse::<FinancialYear>().is_err());
    }

    #[test]
    fn test_dates_span_july_to_june() {
        let fy = FinancialYear::starting(2024);
        assert_eq!(fy.start_date(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(fy.end_date(), NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert!(fy.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert!(fy.contains(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
        assert!(!fy.contains(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }

    #[test]
    fn test_from_date_uses_july_boundary() {
        let before = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(FinancialYear::from_date(before), FinancialYear::starting(2023));
        assert_eq!(FinancialYear::from_date(after), FinancialYear::starting(2024));
    }

    #[test]
    fn test_serializes_as_label_string() {
        let fy = FinancialYear::starting(2024);
        assert_eq!(serde_json::to_string(&fy).unwrap(), "\"2024-25\"");

        let parsed: FinancialYear = serde_json::from_str("\"2024-25\"").unwrap();
        assert_eq!(parsed, fy);
    }

    #[test]
    fn test_deserialize_rejects_bad_label() {
        let result: Result<FinancialYear, _> = serde_json::from_str("\"2024\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_follows_start_year() {
        assert!(FinancialYear::starting(2023) < FinancialYear::starting(2024));
    }
}
