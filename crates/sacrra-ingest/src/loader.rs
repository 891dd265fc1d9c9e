//! Loading an export file from disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use sacrra_model::AccountRecord;

use crate::csv_records::parse_csv;
use crate::error::{IngestError, Result};
use crate::json::parse_json;

/// Records loaded from one export.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub records: Vec<AccountRecord>,
    /// Export field names that matched no record attribute.
    pub unknown_fields: BTreeSet<String>,
}

/// Supported export formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Load every record from a `.json` or `.csv` export.
pub fn load_records(path: &Path) -> Result<Ingested> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = InputFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let read_error = |source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let ingested = match format {
        InputFormat::Json => {
            let text = fs::read_to_string(path).map_err(read_error)?;
            parse_json(path, &text)?
        }
        InputFormat::Csv => parse_csv(path, fs::File::open(path).map_err(read_error)?)?,
    };

    if !ingested.unknown_fields.is_empty() {
        debug!(
            path = %path.display(),
            fields = ?ingested.unknown_fields,
            "export fields without a record attribute"
        );
    }
    info!(
        path = %path.display(),
        format = ?format,
        record_count = ingested.records.len(),
        "records loaded"
    );
    Ok(ingested)
}
