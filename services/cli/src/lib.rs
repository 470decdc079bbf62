mod cli;
mod console;
mod session;

use loan_qualifier::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
