//! Per-file inclusion rules.

use chrono::{Days, NaiveDate};

use sacrra_model::{RecordKind, StatusCode};

use crate::date::month_start;
use crate::resolve::ResolvedRecord;

/// Registrations and closures are reported for this many days back.
pub const DAILY_LOOKBACK_DAYS: u64 = 2;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `[end - days, end]`.
    #[must_use]
    pub fn trailing(end: NaiveDate, days: u64) -> Self {
        let start = end.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// First through last day of the month ending on `month_end`.
    #[must_use]
    pub fn month(month_end: NaiveDate) -> Self {
        Self {
            start: month_start(month_end),
            end: month_end,
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Unset dates are never inside a window.
    #[must_use]
    pub fn contains_opt(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|date| self.contains(date))
    }
}

/// Daily inclusion: a registration, a closure, or nothing.
///
/// Registration is checked first and wins when both apply.
#[must_use]
pub fn classify_daily(record: &ResolvedRecord, window: &DateWindow) -> Option<RecordKind> {
    let normalized = record.normalized();
    if window.contains_opt(normalized.date_account_opened()) {
        return Some(RecordKind::Registration);
    }
    if normalized.current_balance() <= 0 && window.contains_opt(record.status_date()) {
        return Some(RecordKind::Closure);
    }
    None
}

/// Monthly inclusion: closed this month, opened this month, or still owing.
#[must_use]
pub fn classify_monthly(record: &ResolvedRecord, window: &DateWindow) -> bool {
    let normalized = record.normalized();
    (record.status_code() == StatusCode::Closed && window.contains_opt(record.status_date()))
        || window.contains_opt(normalized.date_account_opened())
        || normalized.current_balance() > 0
}

/// A resolved record tagged for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub record: ResolvedRecord,
    pub kind: RecordKind,
}
