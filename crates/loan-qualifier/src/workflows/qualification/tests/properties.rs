use proptest::prelude::*;

use crate::workflows::qualification::pipeline::{compute_ratios, run_stages};
use crate::workflows::qualification::{
    calculate_monthly_debt_ratio, filter_credit_score, filter_debt_to_income,
    filter_loan_to_value, filter_max_loan_size, ApplicantProfile, LenderOffer, QualificationStage,
};

fn offer_strategy() -> impl Strategy<Value = LenderOffer> {
    (
        "[A-Z][a-z]{2,10}",
        50_000u32..600_000,
        50u32..100,
        10u32..60,
        500u16..820,
        200u32..900,
    )
        .prop_map(|(name, amount, ltv, dti, score, rate)| {
            LenderOffer::new(
                name,
                f64::from(amount),
                f64::from(ltv) / 100.0,
                f64::from(dti) / 100.0,
                score,
                f64::from(rate) / 100.0,
            )
        })
}

fn applicant_strategy() -> impl Strategy<Value = ApplicantProfile> {
    (
        450u16..850,
        0u32..6_000,
        1_000u32..20_000,
        25_000u32..650_000,
        50_000u32..800_000,
    )
        .prop_map(|(credit_score, debt, income, loan, home)| ApplicantProfile {
            credit_score,
            monthly_debt: f64::from(debt),
            monthly_income: f64::from(income),
            loan_amount: f64::from(loan),
            home_value: f64::from(home),
        })
}

fn is_subsequence(candidate: &[LenderOffer], source: &[LenderOffer]) -> bool {
    let mut remaining = source.iter();
    candidate
        .iter()
        .all(|offer| remaining.any(|source_offer| source_offer == offer))
}

fn permutations(stages: &[QualificationStage]) -> Vec<Vec<QualificationStage>> {
    if stages.len() <= 1 {
        return vec![stages.to_vec()];
    }

    let mut all = Vec::new();
    for (index, stage) in stages.iter().enumerate() {
        let mut rest = stages.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, *stage);
            all.push(tail);
        }
    }
    all
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn debt_ratio_matches_division_and_is_monotonic(
        debt in 0u32..50_000,
        extra_debt in 1u32..5_000,
        income in 1u32..100_000,
        extra_income in 1u32..10_000,
    ) {
        let debt = f64::from(debt);
        let income = f64::from(income);
        let ratio = calculate_monthly_debt_ratio(debt, income).expect("positive income");
        prop_assert_eq!(ratio, debt / income);

        let more_debt = calculate_monthly_debt_ratio(debt + f64::from(extra_debt), income)
            .expect("positive income");
        prop_assert!(more_debt > ratio);

        let more_income = calculate_monthly_debt_ratio(debt, income + f64::from(extra_income))
            .expect("positive income");
        prop_assert!(more_income <= ratio);
    }

    #[test]
    fn filters_return_order_preserving_subsets(
        offers in prop::collection::vec(offer_strategy(), 0..16),
        applicant in applicant_strategy(),
    ) {
        let ratios = compute_ratios(&applicant).expect("ratios");
        let outputs = [
            filter_max_loan_size(applicant.loan_amount, &offers),
            filter_credit_score(applicant.credit_score, &offers),
            filter_debt_to_income(ratios.monthly_debt_ratio, &offers),
            filter_loan_to_value(ratios.loan_to_value_ratio, &offers),
        ];

        for output in &outputs {
            prop_assert!(output.len() <= offers.len());
            prop_assert!(is_subsequence(output, &offers));
        }
    }

    #[test]
    fn pipeline_is_idempotent(
        offers in prop::collection::vec(offer_strategy(), 0..16),
        applicant in applicant_strategy(),
    ) {
        let ratios = compute_ratios(&applicant).expect("ratios");
        let once = run_stages(&QualificationStage::ORDER, &applicant, &ratios, &offers);
        let twice = run_stages(&QualificationStage::ORDER, &applicant, &ratios, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stage_order_does_not_change_the_result(
        offers in prop::collection::vec(offer_strategy(), 0..16),
        applicant in applicant_strategy(),
    ) {
        let ratios = compute_ratios(&applicant).expect("ratios");
        let expected = run_stages(&QualificationStage::ORDER, &applicant, &ratios, &offers);

        for order in permutations(&QualificationStage::ORDER) {
            let actual = run_stages(&order, &applicant, &ratios, &offers);
            prop_assert_eq!(&actual, &expected);
        }
    }
}

#[test]
fn permutations_cover_every_stage_order() {
    assert_eq!(permutations(&QualificationStage::ORDER).len(), 24);
}
