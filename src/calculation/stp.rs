//! Single Touch Payroll submission shaping.

use crate::models::{PayRun, StpEmployeeLine, StpSubmission, StpTotals};

/// Shapes a completed pay run into an STP submission.
///
/// Maps each employee's figures onto a report line and sums the payrun
/// totals. This is pure aggregation: the inputs are already rounded money
/// from the withholding calculation, and Decimal sums are exact, so no
/// further rounding is applied.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::generate_stp_data;
/// use payg_engine::models::{PayRun, PayRunEmployee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let run = PayRun {
///     business_id: "biz_001".to_string(),
///     payrun_id: "run_2025_07".to_string(),
///     pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
///     employees: vec![PayRunEmployee {
///         employee_id: "emp_001".to_string(),
///         tax_file_number: "123456782".to_string(),
///         gross_amount: Decimal::from(1000),
///         tax_withheld: Decimal::from_str("141.66").unwrap(),
///         superannuation: Decimal::from(115),
///         net_pay: Decimal::from_str("838.34").unwrap(),
///     }],
/// };
///
/// let submission = generate_stp_data(&run);
/// assert_eq!(submission.totals.total_gross, Decimal::from(1000));
/// assert_eq!(submission.employees[0].tfn, "123456782");
/// ```
pub fn generate_stp_data(pay_run: &PayRun) -> StpSubmission {
    let employees: Vec<StpEmployeeLine> = pay_run
        .employees
        .iter()
        .map(|employee| StpEmployeeLine {
            employee_id: employee.employee_id.clone(),
            tfn: employee.tax_file_number.clone(),
            gross_amount: employee.gross_amount,
            tax_withheld: employee.tax_withheld,
            superannuation: employee.superannuation,
            net_pay: employee.net_pay,
        })
        .collect();

    let totals = StpTotals {
        total_gross: pay_run.employees.iter().map(|e| e.gross_amount).sum(),
        total_tax_withheld: pay_run.employees.iter().map(|e| e.tax_withheld).sum(),
        total_superannuation: pay_run.employees.iter().map(|e| e.superannuation).sum(),
    };

    StpSubmission {
        business_id: pay_run.business_id.clone(),
        payrun_id: pay_run.payrun_id.clone(),
        pay_date: pay_run.pay_date,
        employees,
        totals,
    }
}
