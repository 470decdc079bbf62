use serde::{Deserialize, Serialize};

use super::QualificationError;

/// Number of positional fields in a rate sheet row.
pub const OFFER_FIELD_COUNT: usize = 6;

const LENDER_NAME: usize = 0;
const MAX_LOAN_AMOUNT: usize = 1;
const MAX_LOAN_TO_VALUE: usize = 2;
const MAX_DEBT_TO_INCOME: usize = 3;
const MIN_CREDIT_SCORE: usize = 4;
const INTEREST_RATE: usize = 5;

/// One row of a lender's rate sheet.
///
/// The parsed thresholds drive the filters; the original field text is kept
/// alongside so a qualifying row can be written back exactly as it was read.
/// Offers are only built by [`LenderOffer::new`] or [`LenderOffer::from_fields`]
/// and are read-only afterwards, so the text always matches the values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LenderOffer {
    lender_name: String,
    max_loan_amount: f64,
    max_loan_to_value: f64,
    max_debt_to_income: f64,
    min_credit_score: u16,
    interest_rate: f64,
    fields: Vec<String>,
}

impl LenderOffer {
    pub fn new(
        lender_name: impl Into<String>,
        max_loan_amount: f64,
        max_loan_to_value: f64,
        max_debt_to_income: f64,
        min_credit_score: u16,
        interest_rate: f64,
    ) -> Self {
        let lender_name = lender_name.into();
        let fields = vec![
            lender_name.clone(),
            max_loan_amount.to_string(),
            max_loan_to_value.to_string(),
            max_debt_to_income.to_string(),
            min_credit_score.to_string(),
            interest_rate.to_string(),
        ];

        Self {
            lender_name,
            max_loan_amount,
            max_loan_to_value,
            max_debt_to_income,
            min_credit_score,
            interest_rate,
            fields,
        }
    }

    /// Decodes a row positionally. `line` is only used for error reporting.
    pub fn from_fields<I, S>(line: u64, fields: I) -> Result<Self, QualificationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|field| field.as_ref().trim().to_string())
            .collect();

        if fields.len() != OFFER_FIELD_COUNT {
            return Err(QualificationError::MalformedRow {
                line,
                reason: format!(
                    "expected {OFFER_FIELD_COUNT} fields, found {}",
                    fields.len()
                ),
            });
        }

        let lender_name = fields[LENDER_NAME].clone();
        if lender_name.is_empty() {
            return Err(QualificationError::MalformedRow {
                line,
                reason: "lender name is empty".to_string(),
            });
        }

        let max_loan_amount = parse_number(line, "max loan amount", &fields[MAX_LOAN_AMOUNT])?;
        let max_loan_to_value =
            parse_number(line, "max loan to value", &fields[MAX_LOAN_TO_VALUE])?;
        let max_debt_to_income =
            parse_number(line, "max debt to income", &fields[MAX_DEBT_TO_INCOME])?;
        let min_credit_score = fields[MIN_CREDIT_SCORE].parse::<u16>().map_err(|err| {
            QualificationError::MalformedRow {
                line,
                reason: format!(
                    "min credit score '{}' is not an integer: {err}",
                    fields[MIN_CREDIT_SCORE]
                ),
            }
        })?;
        let interest_rate = parse_number(line, "interest rate", &fields[INTEREST_RATE])?;

        Ok(Self {
            lender_name,
            max_loan_amount,
            max_loan_to_value,
            max_debt_to_income,
            min_credit_score,
            interest_rate,
            fields,
        })
    }

    pub fn lender_name(&self) -> &str {
        &self.lender_name
    }

    pub fn max_loan_amount(&self) -> f64 {
        self.max_loan_amount
    }

    pub fn max_loan_to_value(&self) -> f64 {
        self.max_loan_to_value
    }

    pub fn max_debt_to_income(&self) -> f64 {
        self.max_debt_to_income
    }

    pub fn min_credit_score(&self) -> u16 {
        self.min_credit_score
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Field text in rate sheet order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

fn parse_number(line: u64, label: &str, raw: &str) -> Result<f64, QualificationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(QualificationError::MalformedRow {
            line,
            reason: format!("{label} '{raw}' is not a finite number"),
        }),
        Err(err) => Err(QualificationError::MalformedRow {
            line,
            reason: format!("{label} '{raw}' is not a number: {err}"),
        }),
    }
}

/// Applicant financials collected for a single qualification run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub credit_score: u16,
    pub monthly_debt: f64,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub home_value: f64,
}

/// Ratios derived from an [`ApplicantProfile`] before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualificationRatios {
    pub monthly_debt_ratio: f64,
    pub loan_to_value_ratio: f64,
}
