//! Request types for the PAYG withholding engine API.
//!
//! This module defines the JSON request structures for the engine endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    EmployeeProfile, FinancialYear, PayFrequency, PayRecord, PayRun, PayRunEmployee, TaxDetails,
};

/// Request body for the `/calculate-payg` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingRequest {
    /// The gross pay for the period.
    pub gross_amount: Decimal,
    /// The pay frequency as sent by the caller (e.g. "weekly").
    ///
    /// Kept as a raw string at this boundary: unrecognized values fall back
    /// to weekly rather than failing the request.
    pub pay_frequency: String,
    /// The employee's declaration details. An absent or empty object means
    /// no private health insurance and an undeclared marital status.
    #[serde(default)]
    pub employee_details: TaxDetails,
    /// The financial year whose tables apply. Defaults to the latest year
    /// on hand.
    #[serde(default)]
    pub financial_year: Option<FinancialYear>,
}

impl WithholdingRequest {
    /// The pay frequency parsed with the lenient unknown-means-weekly rule.
    pub fn frequency(&self) -> PayFrequency {
        PayFrequency::parse_lenient(&self.pay_frequency)
    }
}

/// Request body for the `/validate-tfn` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfnValidationRequest {
    /// The tax file number to validate, separators allowed.
    pub tfn: String,
}

/// Request body for the `/payment-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSummaryRequest {
    /// Identity fields for the summary header.
    pub employee: EmployeeProfile,
    /// The employee's pay records for the year, as fetched by the caller.
    #[serde(default)]
    pub records: Vec<PayRecord>,
    /// The financial year the summary covers.
    pub financial_year: FinancialYear,
}

/// Request body for the `/stp-data` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StpRequest {
    /// The reporting business's identifier.
    pub business_id: String,
    /// Unique identifier for the pay run.
    pub payrun_id: String,
    /// The date employees were paid.
    pub pay_date: NaiveDate,
    /// Per-employee figures for this pay run.
    #[serde(default)]
    pub employees: Vec<PayRunEmployee>,
}

impl From<StpRequest> for PayRun {
    fn from(req: StpRequest) -> Self {
        PayRun {
            business_id: req.business_id,
            payrun_id: req.payrun_id,
            pay_date: req.pay_date,
            employees: req.employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaritalStatus;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_withholding_request() {
        let json = r#"{
            "gross_amount": "1000.00",
            "pay_frequency": "weekly",
            "employee_details": {
                "has_private_health_insurance": true,
                "marital_status": "single"
            }
        }"#;

        let request: WithholdingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.gross_amount, Decimal::from_str("1000.00").unwrap());
        assert_eq!(request.frequency(), PayFrequency::Weekly);
        assert!(request.employee_details.has_private_health_insurance);
        assert_eq!(request.employee_details.marital_status, MaritalStatus::Single);
        assert_eq!(request.financial_year, None);
    }

    #[test]
    fn test_withholding_request_details_default_when_absent() {
        let json = r#"{"gross_amount": "1000.00", "pay_frequency": "weekly"}"#;

        let request: WithholdingRequest = serde_json::from_str(json).unwrap();
        assert!(!request.employee_details.has_private_health_insurance);
        assert_eq!(
            request.employee_details.marital_status,
            MaritalStatus::Undeclared
        );
    }

    #[test]
    fn test_withholding_request_unknown_frequency_is_weekly() {
        let json = r#"{"gross_amount": "1000.00", "pay_frequency": "daily"}"#;

        let request: WithholdingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.frequency(), PayFrequency::Weekly);
    }

    #[test]
    fn test_withholding_request_pinned_financial_year() {
        let json = r#"{
            "gross_amount": "1000.00",
            "pay_frequency": "weekly",
            "financial_year": "2024-25"
        }"#;

        let request: WithholdingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.financial_year, Some(FinancialYear::starting(2024)));
    }

    #[test]
    fn test_deserialize_payment_summary_request() {
        let json = r#"{
            "employee": {
                "employee_id": "emp_001",
                "tax_file_number": "123456782",
                "first_name": "Mei",
                "surname": "Tanaka"
            },
            "records": [
                {"gross_amount": "1000.00", "tax_withheld": "141.66", "superannuation": "115.00"}
            ],
            "financial_year": "2024-25"
        }"#;

        let request: PaymentSummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.employee_id, "emp_001");
        assert_eq!(request.records.len(), 1);
        assert_eq!(request.financial_year, FinancialYear::starting(2024));
    }

    #[test]
    fn test_stp_request_converts_to_pay_run() {
        let json = r#"{
            "business_id": "biz_001",
            "payrun_id": "run_2025_07",
            "pay_date": "2025-07-15",
            "employees": [
                {
                    "employee_id": "emp_001",
                    "tax_file_number": "123456782",
                    "gross_amount": "1000.00"
                }
            ]
        }"#;

        let request: StpRequest = serde_json::from_str(json).unwrap();
        let pay_run: PayRun = request.into();

        assert_eq!(pay_run.payrun_id, "run_2025_07");
        assert_eq!(pay_run.employees.len(), 1);
        assert_eq!(pay_run.employees[0].net_pay, Decimal::ZERO);
    }
}
