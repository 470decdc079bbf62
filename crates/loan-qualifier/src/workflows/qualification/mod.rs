//! Applicant-to-rate-sheet qualification: ratio calculators, the four
//! threshold filters, and the staged pipeline that chains them.

mod calculators;
pub mod domain;
mod filters;
mod pipeline;
pub mod report;

#[cfg(test)]
mod tests;

pub use calculators::{calculate_loan_to_value_ratio, calculate_monthly_debt_ratio};
pub use domain::{ApplicantProfile, LenderOffer, QualificationRatios, OFFER_FIELD_COUNT};
pub use filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
};
pub use pipeline::{
    find_qualifying_loans, QualificationOutcome, QualificationPipeline, QualificationStage,
};
pub use report::{QualificationReporter, QualificationSummary, TracingReporter};

/// Failures raised while decoding offers or computing applicant ratios.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QualificationError {
    #[error("cannot compute {ratio}: {divisor} is zero")]
    DivisionByZero {
        ratio: &'static str,
        divisor: &'static str,
    },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("malformed rate sheet row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}
