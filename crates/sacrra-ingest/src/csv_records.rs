//! CSV exports: one header row naming attributes, one record per row.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::fields::FieldMapper;
use crate::loader::Ingested;

/// Read CSV records from `reader`. `path` is used for error reporting only.
pub fn parse_csv<R: Read>(path: &Path, reader: R) -> Result<Ingested> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut mapper = FieldMapper::new();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(mapper.map_record(headers.iter().zip(row.iter())));
    }
    Ok(Ingested {
        records,
        unknown_fields: mapper.into_unknown(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_by_header_name() {
        let text = "SA_ID,Account_Number,Current Balance,Notes\n\
                    8001015009087,A100,\"1,500\",x\n\
                    ,,,\n\
                    8001015009088,A200,0\n";
        let ingested = parse_csv(Path::new("input.csv"), text.as_bytes()).unwrap();
        assert_eq!(ingested.records.len(), 2);
        assert_eq!(ingested.records[0].current_balance, "1,500");
        assert_eq!(ingested.records[1].account_number, "A200");
        assert!(ingested.unknown_fields.contains("Notes"));
    }
}
