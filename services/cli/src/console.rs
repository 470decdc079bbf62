use colored::Colorize;
use loan_qualifier::workflows::qualification::report::{
    loan_to_value_ratio_message, monthly_debt_ratio_message,
};
use loan_qualifier::workflows::qualification::{
    LenderOffer, QualificationRatios, QualificationReporter, QualificationSummary,
};
use std::cell::RefCell;
use std::io::{self, Write};

/// Prints the pipeline's ratio and summary lines in color.
///
/// Write failures are held until [`ConsoleReporter::finish`] because the
/// reporter trait has no error channel.
pub(crate) struct ConsoleReporter<W> {
    out: RefCell<W>,
    failure: RefCell<Option<io::Error>>,
}

impl<W: Write> ConsoleReporter<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            failure: RefCell::new(None),
        }
    }

    pub(crate) fn finish(self) -> io::Result<W> {
        match self.failure.into_inner() {
            Some(err) => Err(err),
            None => Ok(self.out.into_inner()),
        }
    }

    fn emit(&self, lines: &[String]) {
        let mut out = self.out.borrow_mut();
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{line}"))
            .and_then(|_| out.flush());
        if let Err(err) = result {
            let mut failure = self.failure.borrow_mut();
            if failure.is_none() {
                *failure = Some(err);
            }
        }
    }
}

impl<W: Write> QualificationReporter for ConsoleReporter<W> {
    fn ratios(&self, ratios: &QualificationRatios) {
        self.emit(&[
            String::new(),
            format!("       {}", monthly_debt_ratio_message(ratios))
                .cyan()
                .to_string(),
            format!("       {}", loan_to_value_ratio_message(ratios))
                .cyan()
                .to_string(),
        ]);
    }

    fn summary(&self, summary: &QualificationSummary) {
        let line = format!("       {}", summary.message());
        let styled = match summary {
            QualificationSummary::NoneAvailable => line.bright_white().on_red(),
            QualificationSummary::Single | QualificationSummary::Many(_) => {
                line.yellow().bold().on_cyan()
            }
        };
        self.emit(&[String::new(), styled.to_string()]);
    }
}

/// One offer per line, fields separated by spaces.
pub(crate) fn write_loan_lines<W: Write>(out: &mut W, offers: &[LenderOffer]) -> io::Result<()> {
    for offer in offers {
        writeln!(out, "{}", offer.fields().join(" "))?;
    }
    Ok(())
}

pub(crate) fn farewell() -> String {
    "\n   Thank you for using the Loan Qualification App.\n"
        .magenta()
        .to_string()
}
