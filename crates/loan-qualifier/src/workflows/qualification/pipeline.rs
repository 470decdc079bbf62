use serde::Serialize;
use tracing::debug;

use super::calculators::{calculate_loan_to_value_ratio, calculate_monthly_debt_ratio};
use super::domain::{ApplicantProfile, LenderOffer, QualificationRatios};
use super::filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
};
use super::report::{QualificationReporter, QualificationSummary, TracingReporter};
use super::QualificationError;

/// Filtering stages, each narrowing the offers left by the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationStage {
    MaxLoanSize,
    CreditScore,
    DebtToIncome,
    LoanToValue,
}

impl QualificationStage {
    /// Loan size first, then credit, then the two applicant ratios.
    pub const ORDER: [QualificationStage; 4] = [
        QualificationStage::MaxLoanSize,
        QualificationStage::CreditScore,
        QualificationStage::DebtToIncome,
        QualificationStage::LoanToValue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QualificationStage::MaxLoanSize => "max loan size",
            QualificationStage::CreditScore => "credit score",
            QualificationStage::DebtToIncome => "debt to income",
            QualificationStage::LoanToValue => "loan to value",
        }
    }

    pub fn apply(
        &self,
        profile: &ApplicantProfile,
        ratios: &QualificationRatios,
        offers: &[LenderOffer],
    ) -> Vec<LenderOffer> {
        match self {
            QualificationStage::MaxLoanSize => filter_max_loan_size(profile.loan_amount, offers),
            QualificationStage::CreditScore => filter_credit_score(profile.credit_score, offers),
            QualificationStage::DebtToIncome => {
                filter_debt_to_income(ratios.monthly_debt_ratio, offers)
            }
            QualificationStage::LoanToValue => {
                filter_loan_to_value(ratios.loan_to_value_ratio, offers)
            }
        }
    }
}

/// Result of a single qualification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualificationOutcome {
    pub ratios: QualificationRatios,
    pub summary: QualificationSummary,
    pub qualifying: Vec<LenderOffer>,
}

/// Computes the applicant ratios, runs every stage, then reports the summary.
pub struct QualificationPipeline<R> {
    reporter: R,
}

impl Default for QualificationPipeline<TracingReporter> {
    fn default() -> Self {
        Self::new(TracingReporter)
    }
}

impl<R: QualificationReporter> QualificationPipeline<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub fn run(
        &self,
        offers: &[LenderOffer],
        profile: &ApplicantProfile,
    ) -> Result<QualificationOutcome, QualificationError> {
        let ratios = compute_ratios(profile)?;
        self.reporter.ratios(&ratios);

        let qualifying = run_stages(&QualificationStage::ORDER, profile, &ratios, offers);

        let summary = QualificationSummary::from_count(qualifying.len());
        self.reporter.summary(&summary);

        Ok(QualificationOutcome {
            ratios,
            summary,
            qualifying,
        })
    }
}

pub(crate) fn compute_ratios(
    profile: &ApplicantProfile,
) -> Result<QualificationRatios, QualificationError> {
    let monthly_debt_ratio =
        calculate_monthly_debt_ratio(profile.monthly_debt, profile.monthly_income)?;
    let loan_to_value_ratio = calculate_loan_to_value_ratio(profile.loan_amount, profile.home_value)?;

    Ok(QualificationRatios {
        monthly_debt_ratio,
        loan_to_value_ratio,
    })
}

pub(crate) fn run_stages(
    stages: &[QualificationStage],
    profile: &ApplicantProfile,
    ratios: &QualificationRatios,
    offers: &[LenderOffer],
) -> Vec<LenderOffer> {
    let mut remaining = offers.to_vec();
    for stage in stages {
        let before = remaining.len();
        remaining = stage.apply(profile, ratios, &remaining);
        debug!(
            stage = stage.label(),
            before,
            after = remaining.len(),
            "qualification stage applied"
        );
    }
    remaining
}

/// Filters `offers` down to the ones the applicant qualifies for, reporting through tracing.
pub fn find_qualifying_loans(
    offers: &[LenderOffer],
    credit_score: u16,
    monthly_debt: f64,
    monthly_income: f64,
    loan_amount: f64,
    home_value: f64,
) -> Result<Vec<LenderOffer>, QualificationError> {
    let profile = ApplicantProfile {
        credit_score,
        monthly_debt,
        monthly_income,
        loan_amount,
        home_value,
    };

    QualificationPipeline::default()
        .run(offers, &profile)
        .map(|outcome| outcome.qualifying)
}
