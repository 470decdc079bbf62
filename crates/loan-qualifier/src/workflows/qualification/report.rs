use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::info;

use super::domain::QualificationRatios;

/// How many offers survived the pipeline, in the three shapes the summary is phrased in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualificationSummary {
    NoneAvailable,
    Single,
    Many(usize),
}

impl QualificationSummary {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::NoneAvailable,
            1 => Self::Single,
            n => Self::Many(n),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::NoneAvailable => 0,
            Self::Single => 1,
            Self::Many(n) => *n,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoneAvailable => "none_available",
            Self::Single => "single",
            Self::Many(_) => "many",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::NoneAvailable => {
                "Sorry, no qualifying loans are available at this time.".to_string()
            }
            Self::Single => "There is 1 qualifying loan available.".to_string(),
            Self::Many(n) => format!("There are {n} qualifying loans available."),
        }
    }
}

impl Serialize for QualificationSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("QualificationSummary", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("count", &self.count())?;
        state.end()
    }
}

/// Renders a ratio as a whole percentage, truncating toward zero.
pub fn whole_percent(ratio: f64) -> i64 {
    (ratio * 100.0).trunc() as i64
}

pub fn monthly_debt_ratio_message(ratios: &QualificationRatios) -> String {
    format!(
        "Your monthly debt to income ratio is {}%",
        whole_percent(ratios.monthly_debt_ratio)
    )
}

pub fn loan_to_value_ratio_message(ratios: &QualificationRatios) -> String {
    format!(
        "Your loan to value ratio is {}%",
        whole_percent(ratios.loan_to_value_ratio)
    )
}

/// Output sink the pipeline reports to. Reporting never alters the qualifying set.
pub trait QualificationReporter {
    fn ratios(&self, ratios: &QualificationRatios);
    fn summary(&self, summary: &QualificationSummary);
}

impl<T: QualificationReporter + ?Sized> QualificationReporter for &T {
    fn ratios(&self, ratios: &QualificationRatios) {
        (**self).ratios(ratios)
    }

    fn summary(&self, summary: &QualificationSummary) {
        (**self).summary(summary)
    }
}

/// Default reporter that emits the summary as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl QualificationReporter for TracingReporter {
    fn ratios(&self, ratios: &QualificationRatios) {
        info!(
            monthly_debt_ratio = ratios.monthly_debt_ratio,
            loan_to_value_ratio = ratios.loan_to_value_ratio,
            "{}; {}",
            monthly_debt_ratio_message(ratios),
            loan_to_value_ratio_message(ratios)
        );
    }

    fn summary(&self, summary: &QualificationSummary) {
        info!(qualifying = summary.count(), "{}", summary.message());
    }
}
