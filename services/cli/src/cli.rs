use crate::session::{self, OutputFormat, SessionOptions};
use clap::{Args, Parser, Subcommand};
use loan_qualifier::config::AppConfig;
use loan_qualifier::error::AppError;
use loan_qualifier::telemetry;
use loan_qualifier::workflows::intake::{parse_amount, PrefilledApplicant, Prompter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Qualifier",
    about = "Match an applicant's finances against a lender rate sheet",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the loans an applicant qualifies for (default command)
    Qualify(QualifyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct QualifyArgs {
    /// Rate sheet CSV to load; prompted for when omitted
    #[arg(long)]
    rate_sheet: Option<PathBuf>,
    /// Applicant credit score
    #[arg(long)]
    credit_score: Option<u16>,
    /// Total monthly debt payments
    #[arg(long, value_parser = parse_debt)]
    monthly_debt: Option<f64>,
    /// Total monthly income
    #[arg(long, value_parser = parse_positive)]
    monthly_income: Option<f64>,
    /// Desired loan amount
    #[arg(long, value_parser = parse_positive)]
    loan_amount: Option<f64>,
    /// Estimated home value
    #[arg(long, value_parser = parse_positive)]
    home_value: Option<f64>,
    /// Where qualifying loans are saved
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip the view/download questions and save directly
    #[arg(long, alias = "no-confirm", conflicts_with = "confirm")]
    yes: bool,
    /// Ask before viewing and saving even if configuration disables it
    #[arg(long)]
    confirm: bool,
    /// Print qualifying loans when running without confirmation
    #[arg(long)]
    show_loans: bool,
    /// Output style for the results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Qualify(QualifyArgs::default()));

    match command {
        Command::Qualify(args) => run_qualify(args),
    }
}

fn run_qualify(args: QualifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let options = session_options(args, &config);
    info!(?config.environment, confirm = options.confirm_before_save, "loan qualifier starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let result = session::run(&options, &mut prompter)?;

    info!(
        qualifying = result.outcome.summary.count(),
        saved_to = ?result.saved_to,
        "loan qualifier finished"
    );
    Ok(())
}

fn session_options(args: QualifyArgs, config: &AppConfig) -> SessionOptions {
    let confirm_before_save = if args.yes {
        false
    } else if args.confirm {
        true
    } else {
        config.qualifier.confirm_before_save
    };

    SessionOptions {
        rate_sheet: args.rate_sheet.or_else(|| config.qualifier.rate_sheet.clone()),
        applicant: PrefilledApplicant {
            credit_score: args.credit_score,
            monthly_debt: args.monthly_debt,
            monthly_income: args.monthly_income,
            loan_amount: args.loan_amount,
            home_value: args.home_value,
        },
        output_path: args
            .output
            .unwrap_or_else(|| config.qualifier.output_path.clone()),
        confirm_before_save,
        show_loans: args.show_loans,
        format: args.format,
    }
}

fn parse_debt(raw: &str) -> Result<f64, String> {
    parse_amount(raw, true).ok_or_else(|| format!("'{raw}' must be a number of zero or more"))
}

fn parse_positive(raw: &str) -> Result<f64, String> {
    parse_amount(raw, false).ok_or_else(|| format!("'{raw}' must be a number greater than zero"))
}
