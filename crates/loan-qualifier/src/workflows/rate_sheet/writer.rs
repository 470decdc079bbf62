use crate::workflows::qualification::LenderOffer;
use std::io::Write;

use super::RateSheetError;

/// Writes each offer's original field text, comma-delimited, with no header row.
pub fn write_offers<W: Write>(writer: W, offers: &[LenderOffer]) -> Result<(), RateSheetError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for offer in offers {
        csv_writer.write_record(offer.fields())?;
    }

    csv_writer.flush()?;
    Ok(())
}
