//! First pipeline stage: sanitize and normalize one raw record.
//!
//! The output keeps the record's text attributes in encodable form (dates as
//! `YYYYMMDD`, amounts as unsigned whole units) and carries the parsed values
//! the later stages decide on.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use sacrra_model::AccountRecord;

use crate::date::{format_optional, parse_date};

/// Why a record cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Neither SA ID nor non-SA ID carries a real value.
    MissingIdentity,
    /// No account number to key the record on.
    MissingAccountNumber,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentity => f.write_str("missing identity number"),
            Self::MissingAccountNumber => f.write_str("missing account number"),
        }
    }
}

/// A sanitized record with parsed dates and amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub(crate) record: AccountRecord,
    pub(crate) current_balance: i64,
    pub(crate) installment_amount: i64,
    pub(crate) months_in_arrears: u32,
    pub(crate) date_account_opened: Option<NaiveDate>,
    pub(crate) last_payment_date: Option<NaiveDate>,
    pub(crate) status_date: Option<NaiveDate>,
}

impl NormalizedRecord {
    #[must_use]
    pub fn record(&self) -> &AccountRecord {
        &self.record
    }

    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.record.account_number
    }

    #[must_use]
    pub fn current_balance(&self) -> i64 {
        self.current_balance
    }

    #[must_use]
    pub fn installment_amount(&self) -> i64 {
        self.installment_amount
    }

    #[must_use]
    pub fn months_in_arrears(&self) -> u32 {
        self.months_in_arrears
    }

    #[must_use]
    pub fn date_account_opened(&self) -> Option<NaiveDate> {
        self.date_account_opened
    }

    #[must_use]
    pub fn last_payment_date(&self) -> Option<NaiveDate> {
        self.last_payment_date
    }

    /// Status date as supplied on the record, before resolution.
    #[must_use]
    pub fn status_date(&self) -> Option<NaiveDate> {
        self.status_date
    }
}

/// Sanitize and normalize a raw record.
///
/// Returns the reason when the record has no usable identity or account number.
pub fn normalize(raw: &AccountRecord) -> Result<NormalizedRecord, SkipReason> {
    let mut record = raw.clone();
    record.for_each_text_mut(sanitize_text);

    if record.identity_key().is_none() {
        return Err(SkipReason::MissingIdentity);
    }
    if record.account_number.is_empty() {
        return Err(SkipReason::MissingAccountNumber);
    }

    let date_account_opened = parse_date(&record.date_account_opened);
    let last_payment_date = parse_date(&record.last_payment_date);
    let status_date = parse_date(&record.status_date);
    record.date_account_opened = format_optional(date_account_opened);
    record.last_payment_date = format_optional(last_payment_date);
    record.status_date = format_optional(status_date);
    record.date_of_birth = format_optional(parse_date(&record.date_of_birth));
    record.deferred_payment_date = format_optional(parse_date(&record.deferred_payment_date));

    let current_balance = parse_amount(&record.current_balance);
    let installment_amount = parse_amount(&record.installment_amount);
    record.current_balance = current_balance.unsigned_abs().to_string();
    record.installment_amount = installment_amount.unsigned_abs().to_string();
    record.opening_balance = parse_amount(&record.opening_balance)
        .unsigned_abs()
        .to_string();
    record.amount_overdue = parse_amount(&record.amount_overdue)
        .unsigned_abs()
        .to_string();
    if !record.income.is_empty() {
        record.income = parse_amount(&record.income).unsigned_abs().to_string();
    }

    let months_in_arrears = u32::try_from(parse_amount(&record.months_in_arrears).max(0))
        .unwrap_or(u32::MAX);
    record.months_in_arrears = months_in_arrears.to_string();

    Ok(NormalizedRecord {
        record,
        current_balance,
        installment_amount,
        months_in_arrears,
        date_account_opened,
        last_payment_date,
        status_date,
    })
}

/// Flatten line breaks, drop the `|` delimiter and trim.
pub fn sanitize_text(value: &mut String) {
    if !value.contains(['\r', '\n', '|']) && value.trim().len() == value.len() {
        return;
    }
    let cleaned: String = value
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "");
    *value = cleaned.trim().to_string();
}

/// Parse an amount in whole units.
///
/// Accepts a leading sign, thousands separators (`,`, spaces, `_`) and a
/// decimal part, which is dropped. Unparseable input is zero.
#[must_use]
pub fn parse_amount(raw: &str) -> i64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '_'))
        .collect();
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let whole = digits.split('.').next().unwrap_or_default();
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    let value = whole.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -value } else { value }
}
