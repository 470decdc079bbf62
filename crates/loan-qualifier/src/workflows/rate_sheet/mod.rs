mod parser;
mod writer;

use crate::workflows::qualification::{LenderOffer, QualificationError};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

pub use writer::write_offers;

#[derive(Debug, thiserror::Error)]
pub enum RateSheetError {
    #[error("rate sheet '{}' cannot be found", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to access rate sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rate sheet CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Row(#[from] QualificationError),
}

/// Lender offers loaded from a delimited rate sheet, with the header kept for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSheet {
    header: Vec<String>,
    offers: Vec<LenderOffer>,
}

impl RateSheet {
    pub fn new(header: Vec<String>, offers: Vec<LenderOffer>) -> Self {
        Self { header, offers }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RateSheetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RateSheetError::MissingFile(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        let sheet = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            offers = sheet.offers.len(),
            "rate sheet loaded"
        );
        Ok(sheet)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RateSheetError> {
        let (header, offers) = parser::parse_rate_sheet(reader)?;
        Ok(Self { header, offers })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn offers(&self) -> &[LenderOffer] {
        &self.offers
    }

    pub fn into_offers(self) -> Vec<LenderOffer> {
        self.offers
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

/// Writes qualifying offers to `path` without a header row and returns the absolute path written.
pub fn write_qualifying_loans<P: AsRef<Path>>(
    path: P,
    offers: &[LenderOffer],
) -> Result<PathBuf, RateSheetError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_offers(file, offers)?;

    let absolute = std::path::absolute(path)?;
    info!(
        path = %absolute.display(),
        offers = offers.len(),
        "qualifying loans saved"
    );
    Ok(absolute)
}
