use super::domain::LenderOffer;

/// Keeps offers whose maximum loan amount covers the requested loan.
pub fn filter_max_loan_size(loan_amount: f64, offers: &[LenderOffer]) -> Vec<LenderOffer> {
    retain(offers, |offer| loan_amount <= offer.max_loan_amount())
}

/// Keeps offers whose minimum credit score the applicant meets.
pub fn filter_credit_score(credit_score: u16, offers: &[LenderOffer]) -> Vec<LenderOffer> {
    retain(offers, |offer| credit_score >= offer.min_credit_score())
}

/// Keeps offers whose debt-to-income ceiling is at or above the applicant's ratio.
pub fn filter_debt_to_income(monthly_debt_ratio: f64, offers: &[LenderOffer]) -> Vec<LenderOffer> {
    retain(offers, |offer| monthly_debt_ratio <= offer.max_debt_to_income())
}

/// Keeps offers whose loan-to-value ceiling is at or above the applicant's ratio.
pub fn filter_loan_to_value(loan_to_value_ratio: f64, offers: &[LenderOffer]) -> Vec<LenderOffer> {
    retain(offers, |offer| loan_to_value_ratio <= offer.max_loan_to_value())
}

fn retain<F>(offers: &[LenderOffer], keep: F) -> Vec<LenderOffer>
where
    F: Fn(&LenderOffer) -> bool,
{
    offers.iter().filter(|offer| keep(*offer)).cloned().collect()
}
