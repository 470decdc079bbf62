use crate::console::{farewell, write_loan_lines, ConsoleReporter};
use loan_qualifier::error::AppError;
use loan_qualifier::workflows::intake::{PrefilledApplicant, Prompter};
use loan_qualifier::workflows::qualification::{
    ApplicantProfile, LenderOffer, QualificationOutcome, QualificationPipeline,
    QualificationRatios, QualificationSummary,
};
use loan_qualifier::workflows::rate_sheet::{write_qualifying_loans, RateSheet};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub(crate) struct SessionOptions {
    pub(crate) rate_sheet: Option<PathBuf>,
    pub(crate) applicant: PrefilledApplicant,
    pub(crate) output_path: PathBuf,
    pub(crate) confirm_before_save: bool,
    pub(crate) show_loans: bool,
    pub(crate) format: OutputFormat,
}

#[derive(Debug)]
pub(crate) struct SessionResult {
    pub(crate) outcome: QualificationOutcome,
    pub(crate) saved_to: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    rate_sheet: &'a Path,
    header: &'a [String],
    ratios: &'a QualificationRatios,
    summary: &'a QualificationSummary,
    message: String,
    qualifying_loans: &'a [LenderOffer],
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<&'a Path>,
}

/// Load, gather, qualify, then optionally show and save.
pub(crate) fn run<R: BufRead, W: Write>(
    options: &SessionOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionResult, AppError> {
    if options.format == OutputFormat::Json {
        require_prefilled(options)?;
    }

    let rate_sheet_path = match &options.rate_sheet {
        Some(path) => path.clone(),
        None => {
            writeln!(prompter.output())?;
            prompter.ask_rate_sheet_path()?
        }
    };
    let sheet = RateSheet::from_path(&rate_sheet_path)?;

    let profile = gather_profile(&options.applicant, prompter)?;
    info!(
        rate_sheet = %rate_sheet_path.display(),
        offers = sheet.offers().len(),
        "qualifying applicant"
    );

    match options.format {
        OutputFormat::Text => run_text(options, &sheet, &profile, prompter),
        OutputFormat::Json => run_json(options, &rate_sheet_path, &sheet, &profile, prompter),
    }
}

fn run_text<R: BufRead, W: Write>(
    options: &SessionOptions,
    sheet: &RateSheet,
    profile: &ApplicantProfile,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionResult, AppError> {
    let pipeline = QualificationPipeline::new(ConsoleReporter::new(prompter.output()));
    let outcome = pipeline.run(sheet.offers(), profile);
    pipeline.into_reporter().finish()?;
    let outcome = outcome?;

    let mut saved_to = None;
    if !outcome.qualifying.is_empty() {
        if options.confirm_before_save {
            writeln!(prompter.output())?;
            let view = "Would you like to view your qualifying loan information?";
            if prompter.ask_yes_no(view)? {
                writeln!(prompter.output())?;
                write_loan_lines(prompter.output(), &outcome.qualifying)?;
            }
            writeln!(prompter.output())?;
            let download = "Would you like to download your qualifying loan information?";
            if prompter.ask_yes_no(download)? {
                saved_to = Some(save(options, &outcome.qualifying, prompter.output())?);
            }
        } else {
            if options.show_loans {
                writeln!(prompter.output())?;
                write_loan_lines(prompter.output(), &outcome.qualifying)?;
            }
            saved_to = Some(save(options, &outcome.qualifying, prompter.output())?);
        }
    }

    writeln!(prompter.output(), "{}", farewell())?;
    Ok(SessionResult { outcome, saved_to })
}

fn run_json<R: BufRead, W: Write>(
    options: &SessionOptions,
    rate_sheet_path: &Path,
    sheet: &RateSheet,
    profile: &ApplicantProfile,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionResult, AppError> {
    let outcome = QualificationPipeline::default().run(sheet.offers(), profile)?;

    let saved_to = if !options.confirm_before_save && !outcome.qualifying.is_empty() {
        let absolute = write_qualifying_loans(&options.output_path, &outcome.qualifying)?;
        Some(absolute)
    } else {
        None
    };

    let report = JsonReport {
        rate_sheet: rate_sheet_path,
        header: sheet.header(),
        ratios: &outcome.ratios,
        summary: &outcome.summary,
        message: outcome.summary.message(),
        qualifying_loans: &outcome.qualifying,
        saved_to: saved_to.as_deref(),
    };
    serde_json::to_writer_pretty(&mut *prompter.output(), &report)?;
    writeln!(prompter.output())?;

    Ok(SessionResult { outcome, saved_to })
}

/// JSON output owns stdout, so every value a prompt would ask for must already be known.
fn require_prefilled(options: &SessionOptions) -> Result<(), AppError> {
    let applicant = &options.applicant;
    let missing: Vec<&str> = [
        ("--rate-sheet", options.rate_sheet.is_some()),
        ("--credit-score", applicant.credit_score.is_some()),
        ("--monthly-debt", applicant.monthly_debt.is_some()),
        ("--monthly-income", applicant.monthly_income.is_some()),
        ("--loan-amount", applicant.loan_amount.is_some()),
        ("--home-value", applicant.home_value.is_some()),
    ]
    .into_iter()
    .filter(|(_, known)| !known)
    .map(|(flag, _)| flag)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Usage(format!(
            "--format json does not prompt; also pass {}",
            missing.join(", ")
        )))
    }
}

fn gather_profile<R: BufRead, W: Write>(
    prefilled: &PrefilledApplicant,
    prompter: &mut Prompter<R, W>,
) -> Result<ApplicantProfile, AppError> {
    if !prefilled.is_complete() {
        writeln!(prompter.output())?;
    }
    Ok(prompter.complete_profile(prefilled)?)
}

fn save<W: Write>(
    options: &SessionOptions,
    offers: &[LenderOffer],
    out: &mut W,
) -> Result<PathBuf, AppError> {
    let absolute = write_qualifying_loans(&options.output_path, offers)?;
    let file_name = options
        .output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.output_path.display().to_string());
    writeln!(
        out,
        "The qualifying loans shown above have been recorded on the \"{}\" file, which has been downloaded to {}",
        file_name,
        absolute.display()
    )?;
    Ok(absolute)
}
