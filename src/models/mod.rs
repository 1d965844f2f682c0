//! Domain models shared across calculation, configuration, and API layers.

mod financial_year;
mod frequency;
mod reporting;
mod tax_details;
mod withholding;

pub use financial_year::{FinancialYear, ParseFinancialYearError};
pub use frequency::PayFrequency;
pub use reporting::{
    EmployeeProfile, PayRecord, PayRun, PayRunEmployee, PaymentSummary, StpEmployeeLine,
    StpSubmission, StpTotals,
};
pub use tax_details::{MaritalStatus, SurchargeHousehold, TaxDetails};
pub use withholding::{PayBreakdown, WithholdingResult};
