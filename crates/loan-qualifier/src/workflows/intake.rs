//! Applicant-facing prompts. Every question re-asks until it gets a usable
//! answer, so the qualification core only ever sees validated values.

use crate::workflows::qualification::ApplicantProfile;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    InputClosed,
    #[error("failed to read or write prompt: {0}")]
    Io(#[from] std::io::Error),
}

/// Applicant values already known before prompting, e.g. from command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrefilledApplicant {
    pub credit_score: Option<u16>,
    pub monthly_debt: Option<f64>,
    pub monthly_income: Option<f64>,
    pub loan_amount: Option<f64>,
    pub home_value: Option<f64>,
}

impl PrefilledApplicant {
    pub fn is_complete(&self) -> bool {
        self.credit_score.is_some()
            && self.monthly_debt.is_some()
            && self.monthly_income.is_some()
            && self.loan_amount.is_some()
            && self.home_value.is_some()
    }
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives callers the prompt's output stream so their messages interleave with the questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Asks for a rate sheet path until one that exists is entered.
    pub fn ask_rate_sheet_path(&mut self) -> Result<PathBuf, PromptError> {
        let mut path = PathBuf::from(self.ask("Please enter the file path to a .csv rate-sheet:")?);
        while !path.exists() {
            writeln!(
                self.output,
                "Sorry, you have entered an incorrect path or filename: '{}' cannot be found...",
                path.display()
            )?;
            path = PathBuf::from(self.ask("Please enter the file path to a .csv rate-sheet:")?);
        }
        Ok(path)
    }

    pub fn ask_credit_score(&mut self) -> Result<u16, PromptError> {
        let mut answer = self.ask("What's your credit score?")?;
        loop {
            match answer.parse::<u16>() {
                Ok(score) => return Ok(score),
                Err(_) => {
                    answer = self.ask(&format!(
                        "'{answer}' is not a whole number. What's your credit score?"
                    ))?;
                }
            }
        }
    }

    /// Asks for a dollar amount. Zero is only accepted when `allow_zero` is set.
    pub fn ask_amount(&mut self, question: &str, allow_zero: bool) -> Result<f64, PromptError> {
        let mut answer = self.ask(question)?;
        loop {
            match parse_amount(&answer, allow_zero) {
                Some(amount) => return Ok(amount),
                None => {
                    let requirement = if allow_zero {
                        "zero or more"
                    } else {
                        "greater than zero"
                    };
                    answer = self.ask(&format!(
                        "Please enter a number {requirement}. {question}"
                    ))?;
                }
            }
        }
    }

    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        let mut answer = self.ask(question)?;
        loop {
            match answer.to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => answer = self.ask("Please respond 'yes' or 'no'...")?,
            }
        }
    }

    pub fn ask_applicant_profile(&mut self) -> Result<ApplicantProfile, PromptError> {
        self.complete_profile(&PrefilledApplicant::default())
    }

    /// Fills in whatever `prefilled` lacks, asking in the usual question order.
    pub fn complete_profile(
        &mut self,
        prefilled: &PrefilledApplicant,
    ) -> Result<ApplicantProfile, PromptError> {
        let credit_score = match prefilled.credit_score {
            Some(score) => score,
            None => self.ask_credit_score()?,
        };
        let monthly_debt = match prefilled.monthly_debt {
            Some(debt) => debt,
            None => self.ask_amount("What's your current amount of monthly debt? $", true)?,
        };
        let monthly_income = match prefilled.monthly_income {
            Some(income) => income,
            None => self.ask_amount("What's your total monthly income? $", false)?,
        };
        let loan_amount = match prefilled.loan_amount {
            Some(amount) => amount,
            None => self.ask_amount("What's your desired loan amount? $", false)?,
        };
        let home_value = match prefilled.home_value {
            Some(value) => value,
            None => self.ask_amount("What's your home value? $", false)?,
        };

        Ok(ApplicantProfile {
            credit_score,
            monthly_debt,
            monthly_income,
            loan_amount,
            home_value,
        })
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Parses a currency answer, tolerating a leading `$` and thousands separators.
pub fn parse_amount(raw: &str, allow_zero: bool) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = cleaned.parse::<f64>().ok()?;

    let acceptable = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    acceptable.then_some(value)
}
