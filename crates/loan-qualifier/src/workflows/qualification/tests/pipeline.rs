use super::common::*;
use crate::workflows::qualification::pipeline::{compute_ratios, run_stages};
use crate::workflows::qualification::{
    find_qualifying_loans, ApplicantProfile, LenderOffer, QualificationError,
    QualificationPipeline, QualificationStage, QualificationSummary,
};

#[test]
fn reference_applicant_qualifies_for_single_offer() {
    let reporter = RecordingReporter::default();
    let pipeline = QualificationPipeline::new(&reporter);

    let outcome = pipeline
        .run(&single_offer_table(), &reference_applicant())
        .expect("pipeline runs");

    assert_eq!(outcome.qualifying, single_offer_table());
    assert_eq!(outcome.summary, QualificationSummary::Single);
    assert_eq!(outcome.ratios.monthly_debt_ratio, 0.1);
    assert_eq!(outcome.ratios.loan_to_value_ratio, 0.8);
    assert_eq!(reporter.summaries.borrow().as_slice(), [QualificationSummary::Single]);
    assert_eq!(reporter.ratios.borrow().len(), 1);
}

#[test]
fn low_credit_score_leaves_nothing() {
    let mut applicant = reference_applicant();
    applicant.credit_score = 600;

    let reporter = RecordingReporter::default();
    let outcome = QualificationPipeline::new(&reporter)
        .run(&single_offer_table(), &applicant)
        .expect("pipeline runs");

    assert!(outcome.qualifying.is_empty());
    assert_eq!(
        reporter.summaries.borrow().as_slice(),
        [QualificationSummary::NoneAvailable]
    );
}

#[test]
fn empty_table_yields_empty_result() {
    let applicant = reference_applicant();
    let qualifying = find_qualifying_loans(
        &[],
        applicant.credit_score,
        applicant.monthly_debt,
        applicant.monthly_income,
        applicant.loan_amount,
        applicant.home_value,
    )
    .expect("empty table is not an error");

    assert!(qualifying.is_empty());
}

#[test]
fn zero_income_fails_before_any_filter_runs() {
    let reporter = RecordingReporter::default();
    let mut applicant = reference_applicant();
    applicant.monthly_income = 0.0;

    let error = QualificationPipeline::new(&reporter)
        .run(&rate_sheet(), &applicant)
        .expect_err("zero income is rejected");

    assert_eq!(
        error,
        QualificationError::DivisionByZero {
            ratio: "monthly debt ratio",
            divisor: "monthly income",
        }
    );
    assert!(reporter.ratios.borrow().is_empty());
    assert!(reporter.summaries.borrow().is_empty());
}

#[test]
fn zero_home_value_propagates() {
    let error = find_qualifying_loans(&rate_sheet(), 750, 500.0, 5000.0, 200_000.0, 0.0)
        .expect_err("zero home value is rejected");
    assert!(matches!(
        error,
        QualificationError::DivisionByZero { divisor: "home value", .. }
    ));
}

#[test]
fn full_rate_sheet_keeps_order_of_survivors() {
    let applicant = ApplicantProfile {
        credit_score: 750,
        monthly_debt: 1500.0,
        monthly_income: 5000.0,
        loan_amount: 200_000.0,
        home_value: 250_000.0,
    };

    let reporter = RecordingReporter::default();
    let outcome = QualificationPipeline::new(&reporter)
        .run(&rate_sheet(), &applicant)
        .expect("pipeline runs");

    assert_eq!(
        names(&outcome.qualifying),
        [
            "Bank of Big - Premier Option",
            "West Central Credit Union - Starter Plus",
            "FHA Fredie Mac - Starter Plus",
            "Prosper MAX - Premier Option",
        ]
    );
    assert_eq!(outcome.summary, QualificationSummary::Many(4));
}

#[test]
fn thresholds_equal_to_applicant_values_qualify() {
    let applicant = reference_applicant();
    let exact = LenderOffer::new("Exact Match Lending", 200_000.0, 0.8, 0.1, 750, 5.0);

    let qualifying = find_qualifying_loans(
        std::slice::from_ref(&exact),
        applicant.credit_score,
        applicant.monthly_debt,
        applicant.monthly_income,
        applicant.loan_amount,
        applicant.home_value,
    )
    .expect("pipeline runs");

    assert_eq!(qualifying, vec![exact]);
}

#[test]
fn each_stage_rejects_on_its_own_criterion() {
    let applicant = reference_applicant();
    let ratios = compute_ratios(&applicant).expect("ratios");
    let table = vec![
        LenderOffer::new("Too Small", 199_999.0, 0.97, 0.45, 700, 4.0),
        LenderOffer::new("Too Strict", 250_000.0, 0.97, 0.45, 751, 4.0),
        LenderOffer::new("Too Leveraged", 250_000.0, 0.97, 0.09, 700, 4.0),
        LenderOffer::new("Too Little Equity", 250_000.0, 0.79, 0.45, 700, 4.0),
    ];

    for (stage, rejected) in QualificationStage::ORDER.iter().zip(&table) {
        let kept = stage.apply(&applicant, &ratios, &table);
        assert_eq!(kept.len(), 3, "{} should drop one offer", stage.label());
        assert!(!kept.contains(rejected), "{} kept {}", stage.label(), rejected.lender_name());
    }

    assert!(run_stages(&QualificationStage::ORDER, &applicant, &ratios, &table).is_empty());
}

#[test]
fn pipeline_is_reentrant_after_a_failure() {
    let reporter = RecordingReporter::default();
    let pipeline = QualificationPipeline::new(&reporter);
    let mut applicant = reference_applicant();
    applicant.home_value = 0.0;
    assert!(pipeline.run(&single_offer_table(), &applicant).is_err());

    applicant.home_value = 250_000.0;
    let outcome = pipeline
        .run(&single_offer_table(), &applicant)
        .expect("corrected input runs");
    assert_eq!(outcome.qualifying.len(), 1);
    assert_eq!(reporter.summaries.borrow().len(), 1);
}
