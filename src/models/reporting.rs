//! ATO reporting models: payment summaries and Single Touch Payroll.
//!
//! These types shape already-persisted pay-period records into the annual
//! payment summary per employee and the per-payrun STP submission. The engine
//! only aggregates; fetching and storing the records is the caller's concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FinancialYear;

/// One persisted pay-period record for an employee.
///
/// Upstream document stores are loosely schemaed, so every monetary field
/// defaults to zero when absent rather than failing the aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRecord {
    /// Gross pay for the period.
    #[serde(default)]
    pub gross_amount: Decimal,
    /// Tax withheld for the period.
    #[serde(default)]
    pub tax_withheld: Decimal,
    /// Superannuation guarantee contribution for the period.
    #[serde(default)]
    pub superannuation: Decimal,
}

/// Employee identity fields carried onto a payment summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's tax file number.
    pub tax_file_number: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// Postal address, when on file.
    #[serde(default)]
    pub address: String,
}

impl EmployeeProfile {
    /// The employee's display name as printed on the summary.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

/// Annual payment summary for one employee in one financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// The employee's tax file number.
    pub tfn: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's address.
    pub address: String,
    /// The financial year the summary covers.
    pub financial_year: FinancialYear,
    /// Total gross pay across the year.
    pub total_gross: Decimal,
    /// Total tax withheld across the year.
    pub total_tax_withheld: Decimal,
    /// Total superannuation contributions across the year.
    pub total_superannuation: Decimal,
    /// Total gross less total tax withheld.
    pub net_pay: Decimal,
}

/// One employee's figures within a pay run, as supplied for STP reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRunEmployee {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's tax file number.
    pub tax_file_number: String,
    /// Gross pay in this pay run.
    #[serde(default)]
    pub gross_amount: Decimal,
    /// Tax withheld in this pay run.
    #[serde(default)]
    pub tax_withheld: Decimal,
    /// Superannuation contribution in this pay run.
    #[serde(default)]
    pub superannuation: Decimal,
    /// Net pay in this pay run.
    #[serde(default)]
    pub net_pay: Decimal,
}

/// A completed pay run to be shaped into an STP submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRun {
    /// The reporting business's identifier.
    pub business_id: String,
    /// Unique identifier for the pay run.
    pub payrun_id: String,
    /// The date employees were paid.
    pub pay_date: NaiveDate,
    /// Per-employee figures for this pay run.
    pub employees: Vec<PayRunEmployee>,
}

/// One employee line within an STP submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StpEmployeeLine {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's tax file number.
    pub tfn: String,
    /// Gross pay in this pay run.
    pub gross_amount: Decimal,
    /// Tax withheld in this pay run.
    pub tax_withheld: Decimal,
    /// Superannuation contribution in this pay run.
    pub superannuation: Decimal,
    /// Net pay in this pay run.
    pub net_pay: Decimal,
}

/// Payrun-level totals reported to the ATO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StpTotals {
    /// Sum of gross pay across all employees.
    pub total_gross: Decimal,
    /// Sum of tax withheld across all employees.
    pub total_tax_withheld: Decimal,
    /// Sum of superannuation across all employees.
    pub total_superannuation: Decimal,
}

/// A Single Touch Payroll submission for one pay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StpSubmission {
    /// The reporting business's identifier.
    pub business_id: String,
    /// Unique identifier for the pay run.
    pub payrun_id: String,
    /// The date employees were paid.
    pub pay_date: NaiveDate,
    /// Per-employee report lines.
    pub employees: Vec<StpEmployeeLine>,
    /// Payrun-level totals.
    pub totals: StpTotals,
}
