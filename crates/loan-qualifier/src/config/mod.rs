use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub qualifier: QualifierConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let rate_sheet = env::var("QUALIFIER_RATE_SHEET")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let output_path = env::var("QUALIFIER_OUTPUT_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
        let confirm_before_save = match env::var("QUALIFIER_CONFIRM_SAVE") {
            Ok(raw) => parse_flag("QUALIFIER_CONFIRM_SAVE", &raw)?,
            Err(_) => true,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            qualifier: QualifierConfig {
                rate_sheet,
                output_path,
                confirm_before_save,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

pub const DEFAULT_OUTPUT_PATH: &str = "qualifying_loans.csv";

/// Where the rate sheet comes from, where results go, and whether to ask first.
#[derive(Debug, Clone)]
pub struct QualifierConfig {
    pub rate_sheet: Option<PathBuf>,
    pub output_path: PathBuf,
    pub confirm_before_save: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be a boolean (true/false, yes/no), got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
