//! Status resolution and arrears enrichment.

use chrono::NaiveDate;

use sacrra_model::StatusCode;

use crate::date::{format_date, format_optional};
use crate::normalize::NormalizedRecord;

/// Settlement statuses require payment within this many days of opening.
const COOLING_OFF_DAYS: i64 = 5;
const EARLY_SETTLEMENT_DAYS: i64 = 30;
/// Months in arrears from which collection statuses are inferred.
const CHRONIC_ARREARS_MONTHS: u32 = 6;

/// Outcome of resolving one record's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResolution {
    pub code: StatusCode,
    /// `None` only when no status is asserted.
    pub date: Option<NaiveDate>,
    /// Months in arrears must be reported as zero.
    pub arrears_reset: bool,
}

impl StatusResolution {
    fn none() -> Self {
        Self {
            code: StatusCode::None,
            date: None,
            arrears_reset: false,
        }
    }

    fn asserted(code: StatusCode, date: NaiveDate) -> Self {
        Self {
            code,
            date: Some(date),
            arrears_reset: code.is_settlement(),
        }
    }
}

/// Derive the status code and status date for a record.
///
/// Rules are checked in precedence order and the first match wins. `as_of`
/// stands in for the current date wherever a rule needs a fallback.
#[must_use]
pub fn resolve_status(record: &NormalizedRecord, as_of: NaiveDate) -> StatusResolution {
    let status_date = record.status_date();
    let last_payment = record.last_payment_date();
    let with_fallback =
        |dates: &[Option<NaiveDate>]| dates.iter().flatten().next().copied().unwrap_or(as_of);

    if let Some(code) = explicit_code(record) {
        return StatusResolution::asserted(code, with_fallback(&[status_date, last_payment]));
    }

    if let Some(code) = flagged_code(record) {
        let date = match code {
            StatusCode::Deceased | StatusCode::HandedOver | StatusCode::WrittenOff => {
                with_fallback(&[status_date, last_payment])
            }
            _ => with_fallback(&[status_date]),
        };
        return StatusResolution::asserted(code, date);
    }

    let balance = record.current_balance();
    if balance <= 0 {
        return StatusResolution::asserted(
            StatusCode::Closed,
            with_fallback(&[status_date, last_payment]),
        );
    }

    let installment = record.installment_amount();
    if installment > 0 && balance <= installment {
        if let (Some(opened), Some(paid)) = (record.date_account_opened(), last_payment) {
            let days = (paid - opened).num_days();
            if (0..=COOLING_OFF_DAYS).contains(&days) {
                return StatusResolution::asserted(StatusCode::CoolingOff, paid);
            }
            if days > COOLING_OFF_DAYS && days < EARLY_SETTLEMENT_DAYS {
                return StatusResolution::asserted(StatusCode::EarlySettlement, paid);
            }
        }
    }

    if record.months_in_arrears() >= CHRONIC_ARREARS_MONTHS {
        let raw = record.record();
        let date = with_fallback(&[status_date, last_payment]);
        if raw.handed_over_flag {
            return StatusResolution::asserted(StatusCode::HandedOver, date);
        }
        if raw.written_off_flag
            || raw.defaulted_flag
            || raw.recovery_action.eq_ignore_ascii_case("written_off")
        {
            return StatusResolution::asserted(StatusCode::WrittenOff, date);
        }
    }

    StatusResolution::none()
}

/// Override first, then the status code field. Only asserted codes count.
fn explicit_code(record: &NormalizedRecord) -> Option<StatusCode> {
    let raw = record.record();
    [&raw.status_override, &raw.status_code]
        .into_iter()
        .find(|value| !value.trim().is_empty())
        .and_then(|value| StatusCode::parse(value).ok())
        .filter(|code| !code.is_none())
}

fn flagged_code(record: &NormalizedRecord) -> Option<StatusCode> {
    let raw = record.record();
    let flag = raw.status_flag.trim().to_ascii_uppercase();
    let checks = [
        (raw.deceased_flag, StatusCode::Deceased),
        (raw.handed_over_flag, StatusCode::HandedOver),
        (raw.written_off_flag, StatusCode::WrittenOff),
        (raw.disputed_flag, StatusCode::Disputed),
        (raw.terms_extended_flag, StatusCode::TermsExtended),
    ];
    checks
        .into_iter()
        .find(|(set, code)| *set || flag == code.as_str())
        .map(|(_, code)| code)
}

/// A normalized record with its status applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub(crate) normalized: NormalizedRecord,
    pub(crate) resolution: StatusResolution,
    /// Status date as supplied on the input, before resolution replaced it.
    pub(crate) supplied_status_date: String,
}

impl ResolvedRecord {
    /// Apply a resolution to the record's text fields.
    ///
    /// Settled accounts report no arrears, overdue amount or installment, and
    /// an account without arrears reports no overdue amount.
    #[must_use]
    pub fn new(mut normalized: NormalizedRecord, resolution: StatusResolution) -> Self {
        let record = &mut normalized.record;
        let supplied_status_date = std::mem::replace(
            &mut record.status_date,
            format_optional(resolution.date),
        );
        record.status_code = resolution.code.as_str().to_string();

        if resolution.arrears_reset {
            normalized.months_in_arrears = 0;
            normalized.installment_amount = 0;
            record.months_in_arrears = "0".to_string();
            record.installment_amount = "0".to_string();
            record.amount_overdue = "0".to_string();
        }
        if normalized.months_in_arrears == 0 {
            record.amount_overdue = "0".to_string();
        }

        Self {
            normalized,
            resolution,
            supplied_status_date,
        }
    }

    #[must_use]
    pub fn normalized(&self) -> &NormalizedRecord {
        &self.normalized
    }

    #[must_use]
    pub fn resolution(&self) -> StatusResolution {
        self.resolution
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.resolution.code
    }

    #[must_use]
    pub fn status_date(&self) -> Option<NaiveDate> {
        self.resolution.date
    }

    /// Resolved status date in `YYYYMMDD` form, as encoded.
    #[must_use]
    pub fn status_date_text(&self) -> &str {
        &self.normalized.record.status_date
    }

    /// Input status date in `YYYYMMDD` form; duplicates are ranked on it.
    #[must_use]
    pub fn supplied_status_date_text(&self) -> &str {
        &self.supplied_status_date
    }

    #[must_use]
    pub fn account_number(&self) -> &str {
        self.normalized.account_number()
    }
}

/// Resolve a normalized record and apply the result.
#[must_use]
pub fn resolve(normalized: NormalizedRecord, as_of: NaiveDate) -> ResolvedRecord {
    let resolution = resolve_status(&normalized, as_of);
    tracing::trace!(
        status = %resolution.code,
        date = %resolution.date.map(format_date).unwrap_or_default(),
        "resolved status"
    );
    ResolvedRecord::new(normalized, resolution)
}
