use std::cell::RefCell;

use crate::workflows::qualification::{
    ApplicantProfile, LenderOffer, QualificationRatios, QualificationReporter,
    QualificationSummary,
};

#[derive(Default)]
pub(super) struct RecordingReporter {
    pub(super) ratios: RefCell<Vec<QualificationRatios>>,
    pub(super) summaries: RefCell<Vec<QualificationSummary>>,
}

impl QualificationReporter for RecordingReporter {
    fn ratios(&self, ratios: &QualificationRatios) {
        self.ratios.borrow_mut().push(*ratios);
    }

    fn summary(&self, summary: &QualificationSummary) {
        self.summaries.borrow_mut().push(*summary);
    }
}

/// Applicant at 10% DTI and 80% LTV.
pub(super) fn reference_applicant() -> ApplicantProfile {
    ApplicantProfile {
        credit_score: 750,
        monthly_debt: 500.0,
        monthly_income: 5000.0,
        loan_amount: 200_000.0,
        home_value: 250_000.0,
    }
}

pub(super) fn single_offer_table() -> Vec<LenderOffer> {
    vec![LenderOffer::new(
        "Bank of Fintech - Standard Option",
        250_000.0,
        0.97,
        0.45,
        700,
        4.2,
    )]
}

pub(super) fn rate_sheet() -> Vec<LenderOffer> {
    vec![
        LenderOffer::new("Bank of Big - Premier Option", 300_000.0, 0.85, 0.47, 740, 3.6),
        LenderOffer::new("West Central Credit Union - Starter Plus", 300_000.0, 0.80, 0.44, 650, 3.9),
        LenderOffer::new("FHA Fredie Mac - Starter Plus", 300_000.0, 0.85, 0.45, 550, 4.4),
        LenderOffer::new("Bank of Fintech - Standard Option", 150_000.0, 0.90, 0.50, 680, 4.1),
        LenderOffer::new("Prosper MAX - Premier Option", 400_000.0, 0.97, 0.30, 720, 4.75),
        LenderOffer::new("Goldman MAX - Starter Plus", 200_000.0, 0.80, 0.10, 750, 3.8),
    ]
}

pub(super) fn names(offers: &[LenderOffer]) -> Vec<String> {
    offers.iter().map(|offer| offer.lender_name().to_string()).collect()
}
