use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::intake::PromptError;
use crate::workflows::qualification::QualificationError;
use crate::workflows::rate_sheet::RateSheetError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Prompt(PromptError),
    RateSheet(RateSheetError),
    Qualification(QualificationError),
    Output(serde_json::Error),
    Usage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Prompt(err) => write!(f, "input error: {}", err),
            AppError::RateSheet(err) => write!(f, "rate sheet error: {}", err),
            AppError::Qualification(err) => write!(f, "qualification error: {}", err),
            AppError::Output(err) => write!(f, "output error: {}", err),
            AppError::Usage(reason) => write!(f, "usage error: {}", reason),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Prompt(err) => Some(err),
            AppError::RateSheet(err) => Some(err),
            AppError::Qualification(err) => Some(err),
            AppError::Output(err) => Some(err),
            AppError::Usage(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PromptError> for AppError {
    fn from(value: PromptError) -> Self {
        Self::Prompt(value)
    }
}

impl From<RateSheetError> for AppError {
    fn from(value: RateSheetError) -> Self {
        Self::RateSheet(value)
    }
}

impl From<QualificationError> for AppError {
    fn from(value: QualificationError) -> Self {
        Self::Qualification(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
