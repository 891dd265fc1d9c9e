//! Header, data and trailer line construction.

use sacrra_model::{AccountRecord, RecordKind, SubmitterConfig};

use crate::encode::{encode, encode_value};
use crate::layout::{FieldSpec, LayoutVersion, Source};

/// Values available to a line beyond the record itself.
#[derive(Debug, Default)]
struct LineValues<'a> {
    tag: &'a str,
    record: Option<&'a AccountRecord>,
    supplier_ref: &'a str,
    brand_name: &'a str,
    month_end: &'a str,
    creation_date: &'a str,
    transaction_date: &'a str,
    record_count: Option<usize>,
}

impl LineValues<'_> {
    fn lookup(&self, source: Source) -> &str {
        match source {
            Source::Tag => self.tag,
            Source::Record(name) => self
                .record
                .and_then(|record| record.text(name))
                .unwrap_or_default(),
            Source::Constant(value) => value,
            Source::SupplierRef => self.supplier_ref,
            Source::BrandName => self.brand_name,
            Source::MonthEnd => self.month_end,
            Source::CreationDate => self.creation_date,
            Source::TransactionDate => self.transaction_date,
            Source::RecordCount | Source::Filler => "",
        }
    }

    fn render_into(&self, line: &mut String, fields: &[FieldSpec]) {
        for spec in fields {
            if spec.source == Source::RecordCount {
                line.push_str(&encode_value(
                    self.record_count,
                    spec.width,
                    spec.pad,
                    spec.justification,
                ));
                continue;
            }
            let raw = self.lookup(spec.source).trim();
            let value = if raw.is_empty() { spec.default } else { raw };
            line.push_str(&encode(value, spec.width, spec.pad, spec.justification));
        }
    }
}

/// Builds the lines of one submission for one submitter.
///
/// The builder holds no per-run state; a fresh one may be created per file.
#[derive(Debug, Clone)]
pub struct LineBuilder<'a> {
    version: LayoutVersion,
    config: &'a SubmitterConfig,
}

impl<'a> LineBuilder<'a> {
    #[must_use]
    pub fn new(version: LayoutVersion, config: &'a SubmitterConfig) -> Self {
        Self { version, config }
    }

    #[must_use]
    pub fn version(&self) -> LayoutVersion {
        self.version
    }

    /// Monthly header line.
    ///
    /// Both dates are expected as `YYYYMMDD`.
    #[must_use]
    pub fn header(&self, month_end: &str, creation_date: &str) -> String {
        let values = LineValues {
            tag: "H",
            supplier_ref: &self.config.supplier_ref,
            brand_name: &self.config.brand_name,
            month_end,
            creation_date,
            ..LineValues::default()
        };
        self.render(&values, &[self.version.header_fields()])
    }

    /// Monthly trailer line. `count` includes the header and trailer.
    #[must_use]
    pub fn trailer(&self, count: usize) -> String {
        let values = LineValues {
            tag: "T",
            record_count: Some(count),
            ..LineValues::default()
        };
        self.render(&values, &[self.version.trailer_fields()])
    }

    /// Monthly data line.
    #[must_use]
    pub fn data_line(&self, record: &AccountRecord, kind: RecordKind) -> String {
        let values = LineValues {
            tag: kind.tag(),
            record: Some(record),
            ..LineValues::default()
        };
        self.render(&values, &[self.version.data_fields()])
    }

    /// Daily data line: the monthly fields followed by the supplier reference
    /// and transaction date.
    #[must_use]
    pub fn daily_line(
        &self,
        record: &AccountRecord,
        kind: RecordKind,
        transaction_date: &str,
    ) -> String {
        let values = LineValues {
            tag: kind.tag(),
            record: Some(record),
            supplier_ref: &self.config.supplier_ref,
            transaction_date,
            ..LineValues::default()
        };
        self.render(
            &values,
            &[
                self.version.data_fields(),
                self.version.daily_trailing_fields(),
            ],
        )
    }

    fn render(&self, values: &LineValues<'_>, tables: &[&[FieldSpec]]) -> String {
        let capacity = tables
            .iter()
            .map(|fields| crate::layout::total_width(fields))
            .sum();
        let mut line = String::with_capacity(capacity);
        for fields in tables {
            values.render_into(&mut line, fields);
        }
        line
    }
}
