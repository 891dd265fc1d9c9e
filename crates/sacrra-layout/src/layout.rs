//! Versioned Layout 700v2 field tables.
//!
//! The tables below are the contract with the bureau. Positions are derived
//! from the widths, so a table is only valid if its widths sum to the declared
//! line width (checked in tests).
//!
//! | Line    | Monthly | Daily |
//! |---------|---------|-------|
//! | Header  | 700     | -     |
//! | Data    | 700     | 718   |
//! | Trailer | 700     | -     |

use sacrra_model::{FileKind, UNSET_DATE};

use crate::encode::Justification;

/// Width of every line in a monthly file.
pub const MONTHLY_LINE_WIDTH: usize = 700;

/// Width of every line in a daily file (data line plus supplier ref and
/// transaction date).
pub const DAILY_LINE_WIDTH: usize = 718;

/// Where a field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Line tag: `H`, `T`, or the record kind of a data line.
    Tag,
    /// Canonical text attribute of the account record.
    Record(&'static str),
    /// Fixed value for this submitter.
    Constant(&'static str),
    SupplierRef,
    BrandName,
    MonthEnd,
    CreationDate,
    TransactionDate,
    RecordCount,
    /// Blank filler.
    Filler,
}

/// One fixed-width slot in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub source: Source,
    pub width: usize,
    pub justification: Justification,
    pub pad: char,
    /// Substituted when the source value is empty.
    pub default: &'static str,
}

impl FieldSpec {
    const fn text(name: &'static str, source: Source, width: usize) -> Self {
        Self {
            name,
            source,
            width,
            justification: Justification::Left,
            pad: ' ',
            default: "",
        }
    }

    const fn record(name: &'static str, width: usize) -> Self {
        Self::text(name, Source::Record(name), width)
    }

    const fn numeric(name: &'static str, width: usize, default: &'static str) -> Self {
        Self {
            name,
            source: Source::Record(name),
            width,
            justification: Justification::Right,
            pad: '0',
            default,
        }
    }

    const fn date(name: &'static str) -> Self {
        Self {
            name,
            source: Source::Record(name),
            width: 8,
            justification: Justification::Left,
            pad: '0',
            default: UNSET_DATE,
        }
    }

    const fn coded(name: &'static str, width: usize, default: &'static str) -> Self {
        Self {
            default,
            ..Self::record(name, width)
        }
    }

    const fn filler(name: &'static str, width: usize) -> Self {
        Self::text(name, Source::Filler, width)
    }
}

const HEADER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("header_identifier", Source::Tag, 1),
    FieldSpec {
        justification: Justification::Right,
        ..FieldSpec::text("supplier_ref", Source::SupplierRef, 10)
    },
    FieldSpec {
        pad: '0',
        ..FieldSpec::text("month_end_date", Source::MonthEnd, 8)
    },
    FieldSpec::text("layout_version", Source::Constant("06"), 2),
    FieldSpec {
        pad: '0',
        ..FieldSpec::text("creation_date", Source::CreationDate, 8)
    },
    FieldSpec::text("brand_name", Source::BrandName, 60),
    FieldSpec::filler("filler", 611),
];

const TRAILER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("trailer_identifier", Source::Tag, 1),
    FieldSpec {
        justification: Justification::Right,
        pad: '0',
        ..FieldSpec::text("number_of_records", Source::RecordCount, 9)
    },
    FieldSpec::filler("filler", 690),
];

const DATA_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("data_indicator", Source::Tag, 1),
    FieldSpec::numeric("sa_id", 13, ""),
    FieldSpec::record("non_sa_id", 16),
    FieldSpec::record("gender", 1),
    FieldSpec::date("date_of_birth"),
    FieldSpec::record("branch_code", 8),
    FieldSpec::record("account_number", 25),
    FieldSpec::record("sub_account_number", 4),
    FieldSpec::record("surname", 25),
    FieldSpec::record("title", 5),
    FieldSpec::record("first_name", 14),
    FieldSpec::record("middle_name", 14),
    FieldSpec::record("third_name", 14),
    FieldSpec::record("res_address1", 25),
    FieldSpec::record("res_address2", 25),
    FieldSpec::record("res_address3", 25),
    FieldSpec::record("res_address4", 25),
    FieldSpec::record("res_postal_code", 6),
    FieldSpec::record("tenant_type", 1),
    FieldSpec::record("post_address1", 25),
    FieldSpec::record("post_address2", 25),
    FieldSpec::record("post_address3", 25),
    FieldSpec::record("post_address4", 25),
    FieldSpec::record("post_postal_code", 6),
    FieldSpec::record("ownership", 2),
    FieldSpec::record("loan_reason", 2),
    FieldSpec::record("payment_type", 2),
    FieldSpec::text("type_of_account", Source::Constant("M"), 2),
    FieldSpec::date("date_account_opened"),
    FieldSpec::date("deferred_payment_date"),
    FieldSpec::date("last_payment_date"),
    FieldSpec::numeric("opening_balance", 9, "0"),
    FieldSpec::numeric("current_balance", 9, "0"),
    FieldSpec::record("current_balance_indicator", 1),
    FieldSpec::numeric("amount_overdue", 9, "0"),
    FieldSpec::numeric("installment_amount", 9, "0"),
    FieldSpec::numeric("months_in_arrears", 2, "00"),
    FieldSpec::record("status_code", 2),
    FieldSpec::coded("repayment_frequency", 2, "00"),
    FieldSpec::coded("terms", 4, "0000"),
    FieldSpec::date("status_date"),
    FieldSpec::record("old_branch_code", 8),
    FieldSpec::record("old_account_number", 25),
    FieldSpec::record("old_sub_account_number", 4),
    FieldSpec::record("old_supplier_ref", 10),
    FieldSpec::record("tel_home", 16),
    FieldSpec::record("tel_cell", 16),
    FieldSpec::record("tel_work", 16),
    FieldSpec::record("employer", 60),
    FieldSpec::numeric("income", 9, "0"),
    FieldSpec::record("income_frequency", 1),
    FieldSpec::record("occupation", 20),
    FieldSpec::record("third_party_name", 60),
    FieldSpec::coded("account_sold", 2, "00"),
    FieldSpec::coded("no_of_participants", 3, "000"),
    FieldSpec::filler("filler", 2),
];

const DAILY_TRAILING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        justification: Justification::Right,
        ..FieldSpec::text("supplier_ref", Source::SupplierRef, 10)
    },
    FieldSpec {
        justification: Justification::Right,
        pad: '0',
        ..FieldSpec::text("transaction_date", Source::TransactionDate, 8)
    },
];

/// Layout versions understood by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutVersion {
    /// Layout 700v2: 700-byte monthly lines, 718-byte daily lines.
    #[default]
    V700,
}

impl LayoutVersion {
    #[must_use]
    pub const fn header_fields(self) -> &'static [FieldSpec] {
        match self {
            Self::V700 => HEADER_FIELDS,
        }
    }

    #[must_use]
    pub const fn trailer_fields(self) -> &'static [FieldSpec] {
        match self {
            Self::V700 => TRAILER_FIELDS,
        }
    }

    /// Data-line fields shared by daily and monthly files.
    #[must_use]
    pub const fn data_fields(self) -> &'static [FieldSpec] {
        match self {
            Self::V700 => DATA_FIELDS,
        }
    }

    /// Fields appended to data lines in daily files only.
    #[must_use]
    pub const fn daily_trailing_fields(self) -> &'static [FieldSpec] {
        match self {
            Self::V700 => DAILY_TRAILING_FIELDS,
        }
    }

    /// Declared width of every line in a file of `kind`.
    #[must_use]
    pub const fn line_width(self, kind: FileKind) -> usize {
        match (self, kind) {
            (Self::V700, FileKind::Monthly) => MONTHLY_LINE_WIDTH,
            (Self::V700, FileKind::Daily) => DAILY_LINE_WIDTH,
        }
    }

    /// Data-line fields for `kind`, with their 1-based start positions.
    #[must_use]
    pub fn positioned_fields(self, kind: FileKind) -> Vec<(usize, FieldSpec)> {
        let trailing: &[FieldSpec] = match kind {
            FileKind::Daily => self.daily_trailing_fields(),
            FileKind::Monthly => &[],
        };
        let mut start = 1;
        self.data_fields()
            .iter()
            .chain(trailing)
            .map(|spec| {
                let positioned = (start, *spec);
                start += spec.width;
                positioned
            })
            .collect()
    }
}

/// Sum of field widths.
#[must_use]
pub fn total_width(fields: &[FieldSpec]) -> usize {
    fields.iter().map(|spec| spec.width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_sum_to_declared_widths() {
        let v = LayoutVersion::V700;
        assert_eq!(total_width(v.header_fields()), MONTHLY_LINE_WIDTH);
        assert_eq!(total_width(v.trailer_fields()), MONTHLY_LINE_WIDTH);
        assert_eq!(total_width(v.data_fields()), MONTHLY_LINE_WIDTH);
        assert_eq!(
            total_width(v.data_fields()) + total_width(v.daily_trailing_fields()),
            DAILY_LINE_WIDTH
        );
    }

    #[test]
    fn record_sources_name_canonical_fields() {
        let record = sacrra_model::AccountRecord::default();
        for spec in LayoutVersion::V700.data_fields() {
            if let Source::Record(name) = spec.source {
                assert!(record.text(name).is_some(), "unknown field {name}");
            }
        }
    }

    #[test]
    fn type_of_account_sits_at_368() {
        let fields = LayoutVersion::V700.positioned_fields(FileKind::Monthly);
        let (start, spec) = fields
            .iter()
            .find(|(_, spec)| spec.name == "type_of_account")
            .copied()
            .expect("type_of_account");
        assert_eq!(start, 368);
        assert_eq!(spec.width, 2);
        assert_eq!(spec.source, Source::Constant("M"));
    }

    #[test]
    fn daily_fields_start_after_701() {
        let fields = LayoutVersion::V700.positioned_fields(FileKind::Daily);
        let names: Vec<_> = fields
            .iter()
            .rev()
            .take(2)
            .map(|(start, spec)| (spec.name, *start))
            .collect();
        assert_eq!(names, vec![("transaction_date", 711), ("supplier_ref", 701)]);
    }
}
