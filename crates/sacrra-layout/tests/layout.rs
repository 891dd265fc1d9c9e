//! Integration tests for line building and file assembly.

use proptest::prelude::*;

use sacrra_layout::{
    DAILY_LINE_WIDTH, FileValidator, Justification, LayoutError, LayoutVersion, LineBuilder,
    MONTHLY_LINE_WIDTH, assemble, encode, file_name,
};
use sacrra_model::{AccountRecord, FileKind, RecordKind, SubmitterConfig};

fn config() -> SubmitterConfig {
    SubmitterConfig::new("SUP0001", "Acme Lending")
}

fn justification() -> impl Strategy<Value = Justification> {
    prop_oneof![Just(Justification::Left), Just(Justification::Right)]
}

proptest! {
    #[test]
    fn encode_always_fills_the_slot(
        value in ".{0,80}",
        width in 0usize..120,
        pad in prop_oneof![Just(' '), Just('0')],
        justification in justification(),
    ) {
        let encoded = encode(&value, width, pad, justification);
        prop_assert_eq!(encoded.chars().count(), width);
    }

    #[test]
    fn ascii_records_always_build_full_width_lines(
        surname in "[ -~]{0,40}",
        balance in "[0-9]{0,12}",
        employer in "[ -~]{0,90}",
    ) {
        let config = config();
        let builder = LineBuilder::new(LayoutVersion::V700, &config);
        let record = AccountRecord {
            sa_id: "8001015009087".to_string(),
            surname,
            current_balance: balance,
            employer,
            ..AccountRecord::default()
        };
        prop_assert_eq!(builder.data_line(&record, RecordKind::Data).len(), MONTHLY_LINE_WIDTH);
        prop_assert_eq!(
            builder.daily_line(&record, RecordKind::Closure, "20250615").len(),
            DAILY_LINE_WIDTH
        );
    }
}

#[test]
fn header_prefix_snapshot() {
    let config = config();
    let header = LineBuilder::new(LayoutVersion::V700, &config).header("20250630", "20250615");
    insta::assert_snapshot!(header.trim_end(), @"H   SUP0001202506300620250615Acme Lending");
}

#[test]
fn monthly_file_counts_header_and_trailer() {
    let config = config();
    let builder = LineBuilder::new(LayoutVersion::V700, &config);
    let records: Vec<AccountRecord> = ["A100", "A200", "A300"]
        .iter()
        .map(|account| AccountRecord {
            sa_id: "8001015009087".to_string(),
            account_number: (*account).to_string(),
            ..AccountRecord::default()
        })
        .collect();
    let mut lines = vec![builder.header("20250630", "20250615")];
    lines.extend(
        records
            .iter()
            .map(|record| builder.data_line(record, RecordKind::Data)),
    );
    lines.push(builder.trailer(records.len() + 2));

    let name = file_name(&config.supplier_ref, FileKind::Monthly, "20250630");
    let file = assemble(LayoutVersion::V700, FileKind::Monthly, name, &lines).expect("assemble");
    assert_eq!(file.line_count, 5);
    assert_eq!(file.data_line_count, 3);

    let revalidated = FileValidator::new(LayoutVersion::V700)
        .validate(&file.name, FileKind::Monthly, &file.bytes)
        .expect("revalidate");
    assert_eq!(revalidated.line_width, MONTHLY_LINE_WIDTH);
}

#[test]
fn non_ascii_record_aborts_the_file() {
    let config = config();
    let builder = LineBuilder::new(LayoutVersion::V700, &config);
    let record = AccountRecord {
        sa_id: "8001015009087".to_string(),
        surname: "Müller".to_string(),
        ..AccountRecord::default()
    };
    let lines = vec![builder.daily_line(&record, RecordKind::Registration, "20250615")];
    let error = assemble(LayoutVersion::V700, FileKind::Daily, "d.txt", &lines).unwrap_err();
    assert!(matches!(error, LayoutError::NonAscii { line: 1, .. }));
}

#[test]
fn monthly_lines_in_a_daily_file_are_rejected() {
    let config = config();
    let builder = LineBuilder::new(LayoutVersion::V700, &config);
    let lines = vec![builder.data_line(&AccountRecord::default(), RecordKind::Data)];
    let error = assemble(LayoutVersion::V700, FileKind::Daily, "d.txt", &lines).unwrap_err();
    assert!(matches!(
        error,
        LayoutError::LineLength {
            expected: DAILY_LINE_WIDTH,
            actual: MONTHLY_LINE_WIDTH,
            ..
        }
    ));
}
