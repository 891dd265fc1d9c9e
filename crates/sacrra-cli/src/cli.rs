//! CLI argument definitions for the submission generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sacrra_model::{FileKind, FileSelection};
use sacrra_transform::date::parse_compact;

#[derive(Parser)]
#[command(
    name = "sacrra",
    version,
    about = "Layout 700v2 credit-bureau submission generator",
    long_about = "Generate fixed-width Layout 700v2 daily and monthly submission files\n\
                  from exported account records, and validate files on disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include identity values and account numbers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate submission files from an exported record file.
    Generate(GenerateArgs),

    /// Re-validate a submission file on disk.
    Validate(ValidateArgs),

    /// Print the data-line layout table.
    Layout(LayoutArgs),
}

#[derive(Args)]
pub struct SubmitterArgs {
    /// Bureau supplier reference (at most 10 ASCII characters).
    #[arg(long = "supplier-ref", env = "SACRRA_SUPPLIER_REF")]
    pub supplier_ref: String,

    /// Brand name written to the monthly header.
    #[arg(long = "brand-name", env = "SACRRA_BRAND_NAME")]
    pub brand_name: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Exported records (.json or .csv).
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub submitter: SubmitterArgs,

    /// Which files to generate.
    #[arg(long = "type", value_enum, default_value = "daily")]
    pub file_type: FileTypeArg,

    /// Business date of the run as YYYYMMDD (default: today).
    #[arg(long = "transaction-date", value_name = "YYYYMMDD", value_parser = parse_date_arg)]
    pub transaction_date: Option<NaiveDate>,

    /// Month-end date as YYYYMMDD (default: last day of the transaction month).
    #[arg(long = "month-end", value_name = "YYYYMMDD", value_parser = parse_date_arg)]
    pub month_end: Option<NaiveDate>,

    /// Directory that receives the generated files.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Generate and validate without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Submission file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// File kind (default: inferred from the file name).
    #[arg(long = "kind", value_enum)]
    pub kind: Option<FileKindArg>,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Show the daily line, including its trailing fields.
    #[arg(long = "kind", value_enum, default_value = "monthly")]
    pub kind: FileKindArg,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_compact(value.trim()).ok_or_else(|| format!("expected a YYYYMMDD date, got '{value}'"))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FileTypeArg {
    Daily,
    Monthly,
    Both,
}

impl From<FileTypeArg> for FileSelection {
    fn from(value: FileTypeArg) -> Self {
        match value {
            FileTypeArg::Daily => Self::Daily,
            FileTypeArg::Monthly => Self::Monthly,
            FileTypeArg::Both => Self::Both,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FileKindArg {
    Daily,
    Monthly,
}

impl From<FileKindArg> for FileKind {
    fn from(value: FileKindArg) -> Self {
        match value {
            FileKindArg::Daily => Self::Daily,
            FileKindArg::Monthly => Self::Monthly,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
