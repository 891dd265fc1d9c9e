use std::path::PathBuf;

use chrono::NaiveDate;

use sacrra_cli::output::{CheckedFile, FileReport};
use sacrra_transform::GenerateStats;

#[derive(Debug)]
pub struct GenerateResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub transaction_date: NaiveDate,
    pub month_end: NaiveDate,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub stats: GenerateStats,
    pub unknown_fields: Vec<String>,
}

#[derive(Debug)]
pub struct ValidateResult {
    pub path: PathBuf,
    pub checked: CheckedFile,
}
