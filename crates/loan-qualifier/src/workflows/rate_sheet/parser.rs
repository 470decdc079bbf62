use crate::workflows::qualification::LenderOffer;
use std::io::Read;

use super::RateSheetError;

/// Splits the first record off as the header and decodes every later record as an offer.
pub(crate) fn parse_rate_sheet<R: Read>(
    reader: R,
) -> Result<(Vec<String>, Vec<LenderOffer>), RateSheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut offers = Vec::new();
    for record in records {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        offers.push(LenderOffer::from_fields(line, record.iter())?);
    }

    Ok((header, offers))
}
