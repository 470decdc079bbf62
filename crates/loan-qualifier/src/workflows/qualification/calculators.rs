use super::QualificationError;

/// Monthly debt payments divided by monthly income.
pub fn calculate_monthly_debt_ratio(
    monthly_debt: f64,
    monthly_income: f64,
) -> Result<f64, QualificationError> {
    ratio(
        "monthly debt ratio",
        ("monthly debt", monthly_debt),
        ("monthly income", monthly_income),
    )
}

/// Requested loan amount divided by home value.
pub fn calculate_loan_to_value_ratio(
    loan_amount: f64,
    home_value: f64,
) -> Result<f64, QualificationError> {
    ratio(
        "loan to value ratio",
        ("loan amount", loan_amount),
        ("home value", home_value),
    )
}

fn ratio(
    name: &'static str,
    (numerator_field, numerator): (&'static str, f64),
    (divisor_field, divisor): (&'static str, f64),
) -> Result<f64, QualificationError> {
    ensure_non_negative(numerator_field, numerator)?;
    ensure_non_negative(divisor_field, divisor)?;

    if divisor == 0.0 {
        return Err(QualificationError::DivisionByZero {
            ratio: name,
            divisor: divisor_field,
        });
    }

    Ok(numerator / divisor)
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), QualificationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QualificationError::InvalidInput { field, value })
    }
}
