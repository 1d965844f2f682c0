//! Annual payment summary generation.

use rust_decimal::Decimal;

use crate::models::{EmployeeProfile, FinancialYear, PayRecord, PaymentSummary};

use super::rounding::round_to_cents;

/// Generates the annual payment summary for one employee.
///
/// Sums gross, tax withheld, and superannuation across the supplied pay
/// records and rounds each total to cents. Net pay is gross less tax
/// withheld; superannuation is an employer contribution on top of gross,
/// so it is reported but not subtracted. Records with missing monetary
/// fields arrive as zeros from the serde boundary, so sparse documents
/// aggregate cleanly.
///
/// The caller selects which records belong to the year (payslips dated
/// 1 July to 1 July); the financial year parameter only labels the
/// summary.
///
/// # Arguments
///
/// * `employee` - Identity fields for the summary header
/// * `records` - The employee's pay records for the year
/// * `financial_year` - The financial year the summary covers
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::generate_payment_summary;
/// use payg_engine::models::{EmployeeProfile, FinancialYear, PayRecord};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = EmployeeProfile {
///     employee_id: "emp_001".to_string(),
///     tax_file_number: "123456782".to_string(),
///     first_name: "Mei".to_string(),
///     surname: "Tanaka".to_string(),
///     address: "12 Collins St, Melbourne VIC".to_string(),
/// };
/// let record = PayRecord {
///     gross_amount: Decimal::from(1000),
///     tax_withheld: Decimal::from_str("141.66").unwrap(),
///     superannuation: Decimal::from(115),
/// };
///
/// let summary = generate_payment_summary(
///     &employee,
///     &[record.clone(), record],
///     FinancialYear::starting(2024),
/// );
/// assert_eq!(summary.total_gross, Decimal::from_str("2000.00").unwrap());
/// assert_eq!(summary.net_pay, Decimal::from_str("1716.68").unwrap());
/// ```
pub fn generate_payment_summary(
    employee: &EmployeeProfile,
    records: &[PayRecord],
    financial_year: FinancialYear,
) -> PaymentSummary {
    let total_gross: Decimal = records.iter().map(|r| r.gross_amount).sum();
    let total_tax_withheld: Decimal = records.iter().map(|r| r.tax_withheld).sum();
    let total_superannuation: Decimal = records.iter().map(|r| r.superannuation).sum();

    PaymentSummary {
        employee_id: employee.employee_id.clone(),
        tfn: employee.tax_file_number.clone(),
        name: employee.full_name(),
        address: employee.address.clone(),
        financial_year,
        total_gross: round_to_cents(total_gross),
        total_tax_withheld: round_to_cents(total_tax_withheld),
        total_superannuation: round_to_cents(total_superannuation),
        net_pay: round_to_cents(total_gross - total_tax_withheld),
    }
}
