//! End-to-end generation of daily and monthly submission files.
//!
//! Records flow through the stages in order:
//!
//! 1. [`normalize`](crate::normalize::normalize): sanitize text, parse dates
//!    and amounts, drop records without identity
//! 2. [`resolve`](crate::resolve::resolve): status code, status date and
//!    arrears enrichment
//! 3. classification per file: daily registrations/closures, or monthly
//!    grouping followed by inclusion
//! 4. line building and file assembly with validation
//!
//! A layout violation fails the whole run and no file is returned.

use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use sacrra_layout::{LayoutVersion, LineBuilder, SubmissionFile, assemble, file_name};
use sacrra_model::{AccountRecord, FileKind, FileSelection, RecordKind, SubmitterConfig};

use crate::classify::{
    ClassifiedRecord, DAILY_LOOKBACK_DAYS, DateWindow, classify_daily, classify_monthly,
};
use crate::date::{format_date, month_end};
use crate::error::Result;
use crate::group::group_by_account;
use crate::normalize::{SkipReason, normalize};
use crate::resolve::{ResolvedRecord, resolve};

/// Dates that parameterize one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDates {
    /// Last day of the reported month; names the monthly file.
    pub month_end: NaiveDate,
    /// Business date of the run. Names the daily file, anchors the daily
    /// window, is the header creation date and stands in for "today".
    pub transaction_date: NaiveDate,
}

impl RunDates {
    #[must_use]
    pub fn new(month_end: NaiveDate, transaction_date: NaiveDate) -> Self {
        Self {
            month_end,
            transaction_date,
        }
    }

    /// Month end defaults to the last day of the transaction date's month.
    #[must_use]
    pub fn for_transaction_date(transaction_date: NaiveDate) -> Self {
        Self::new(month_end(transaction_date), transaction_date)
    }
}

/// A record excluded before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Zero-based position in the input.
    pub index: usize,
    pub account_number: String,
    pub reason: SkipReason,
}

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateStats {
    pub input_records: usize,
    pub skipped: Vec<SkippedRecord>,
    pub registrations: usize,
    pub closures: usize,
    /// Distinct accounts seen by the monthly grouper.
    pub monthly_accounts: usize,
    pub monthly_records: usize,
}

impl GenerateStats {
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Files produced by one run, in daily-then-monthly order.
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    pub files: Vec<SubmissionFile>,
    pub stats: GenerateStats,
}

impl GenerateOutput {
    #[must_use]
    pub fn file(&self, kind: FileKind) -> Option<&SubmissionFile> {
        self.files.iter().find(|file| file.kind == kind)
    }
}

/// Runs the pipeline for one submitter and layout version.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a SubmitterConfig,
    version: LayoutVersion,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(config: &'a SubmitterConfig, version: LayoutVersion) -> Self {
        Self { config, version }
    }

    /// Generate the selected files from raw records.
    pub fn generate(
        &self,
        records: &[AccountRecord],
        dates: RunDates,
        selection: FileSelection,
    ) -> Result<GenerateOutput> {
        self.config.validate()?;
        let span = info_span!(
            "generate",
            supplier_ref = %self.config.supplier_ref,
            transaction_date = %format_date(dates.transaction_date),
            month_end = %format_date(dates.month_end),
        );
        let _guard = span.enter();
        let start = Instant::now();

        let mut stats = GenerateStats {
            input_records: records.len(),
            ..GenerateStats::default()
        };
        let resolved = self.prepare(records, dates.transaction_date, &mut stats);

        let mut files = Vec::new();
        for &kind in selection.kinds() {
            let file = match kind {
                FileKind::Daily => self.daily_file(&resolved, dates, &mut stats)?,
                FileKind::Monthly => Some(self.monthly_file(&resolved, dates, &mut stats)?),
            };
            files.extend(file);
        }

        info!(
            input_records = stats.input_records,
            skipped = stats.skipped_count(),
            files = files.len(),
            duration_ms = start.elapsed().as_millis(),
            "generation complete"
        );
        Ok(GenerateOutput { files, stats })
    }

    /// Normalize and resolve every record, recording the ones skipped.
    fn prepare(
        &self,
        records: &[AccountRecord],
        as_of: NaiveDate,
        stats: &mut GenerateStats,
    ) -> Vec<ResolvedRecord> {
        let mut resolved = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match normalize(record) {
                Ok(normalized) => resolved.push(resolve(normalized, as_of)),
                Err(reason) => {
                    warn!(index, %reason, "record skipped");
                    stats.skipped.push(SkippedRecord {
                        index,
                        account_number: record.account_number.trim().to_string(),
                        reason,
                    });
                }
            }
        }
        resolved
    }

    /// Registrations and closures in input order; `None` when there are none.
    fn daily_file(
        &self,
        records: &[ResolvedRecord],
        dates: RunDates,
        stats: &mut GenerateStats,
    ) -> Result<Option<SubmissionFile>> {
        let _span = info_span!("daily").entered();
        let window = DateWindow::trailing(dates.transaction_date, DAILY_LOOKBACK_DAYS);
        let classified: Vec<ClassifiedRecord> = records
            .iter()
            .filter_map(|record| {
                let kind = classify_daily(record, &window)?;
                debug!(%kind, status = %record.status_code(), "daily record");
                Some(ClassifiedRecord {
                    record: record.clone(),
                    kind,
                })
            })
            .collect();

        stats.registrations = count_kind(&classified, RecordKind::Registration);
        stats.closures = count_kind(&classified, RecordKind::Closure);
        if classified.is_empty() {
            warn!(
                window_start = %format_date(window.start),
                window_end = %format_date(window.end),
                "no registrations or closures; daily file not produced"
            );
            return Ok(None);
        }

        let builder = LineBuilder::new(self.version, self.config);
        let transaction_date = format_date(dates.transaction_date);
        let lines: Vec<String> = classified
            .iter()
            .map(|item| {
                builder.daily_line(
                    item.record.normalized().record(),
                    item.kind,
                    &transaction_date,
                )
            })
            .collect();
        let name = file_name(&self.config.supplier_ref, FileKind::Daily, &transaction_date);
        Ok(Some(assemble(self.version, FileKind::Daily, name, &lines)?))
    }

    /// Header, one line per included account, trailer.
    fn monthly_file(
        &self,
        records: &[ResolvedRecord],
        dates: RunDates,
        stats: &mut GenerateStats,
    ) -> Result<SubmissionFile> {
        let _span = info_span!("monthly").entered();
        let window = DateWindow::month(dates.month_end);
        let grouped = group_by_account(records.iter());
        stats.monthly_accounts = grouped.len();

        let included: Vec<ClassifiedRecord> = grouped
            .into_iter()
            .filter(|record| classify_monthly(record, &window))
            .map(|record| ClassifiedRecord {
                record: record.clone(),
                kind: RecordKind::Data,
            })
            .collect();
        stats.monthly_records = included.len();
        debug!(
            accounts = stats.monthly_accounts,
            included = stats.monthly_records,
            "monthly grouping complete"
        );

        let builder = LineBuilder::new(self.version, self.config);
        let month_end = format_date(dates.month_end);
        let mut lines = Vec::with_capacity(included.len() + 2);
        lines.push(builder.header(&month_end, &format_date(dates.transaction_date)));
        lines.extend(
            included
                .iter()
                .map(|item| builder.data_line(item.record.normalized().record(), item.kind)),
        );
        lines.push(builder.trailer(included.len() + 2));

        let name = file_name(&self.config.supplier_ref, FileKind::Monthly, &month_end);
        Ok(assemble(self.version, FileKind::Monthly, name, &lines)?)
    }
}

fn count_kind(records: &[ClassifiedRecord], kind: RecordKind) -> usize {
    records.iter().filter(|item| item.kind == kind).count()
}

/// Generate with the current layout version.
pub fn generate(
    records: &[AccountRecord],
    dates: RunDates,
    selection: FileSelection,
    config: &SubmitterConfig,
) -> Result<GenerateOutput> {
    Generator::new(config, LayoutVersion::V700).generate(records, dates, selection)
}
