//! Writing and re-validating submission files on disk.

use std::fs;

use chrono::NaiveDate;

use sacrra_cli::output::{check_file, describe, sha256_hex, write_verified};
use sacrra_layout::LayoutVersion;
use sacrra_model::{AccountRecord, FileKind, FileSelection, SubmitterConfig};
use sacrra_transform::{GenerateOutput, RunDates, generate};

fn output() -> GenerateOutput {
    let config = SubmitterConfig::new("SUP0001", "Acme Lending");
    let record = AccountRecord {
        sa_id: "8001015009087".to_string(),
        account_number: "A100".to_string(),
        date_account_opened: "20250614".to_string(),
        current_balance: "1500".to_string(),
        ..AccountRecord::default()
    };
    let transaction_date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    generate(
        &[record],
        RunDates::for_transaction_date(transaction_date),
        FileSelection::Both,
        &config,
    )
    .unwrap()
}

#[test]
fn written_files_match_generated_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let output = output();
    for file in &output.files {
        let report = write_verified(dir.path(), file, LayoutVersion::V700).unwrap();
        let path = report.path.clone().unwrap();
        assert_eq!(fs::read(&path).unwrap(), file.bytes);
        assert_eq!(report.sha256, sha256_hex(&file.bytes));
        assert_eq!(report, {
            let mut dry = describe(file);
            dry.path = Some(path);
            dry
        });
    }

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    insta::assert_debug_snapshot!(names, @r#"
    [
        "SUP0001_ALL_L702_D_20250615_1_1.txt",
        "SUP0001_ALL_L702_M_20250630_1_1.txt",
    ]
    "#);
}

#[test]
fn check_file_infers_kind_from_name() {
    let dir = tempfile::tempdir().unwrap();
    let output = output();
    let monthly = output.file(FileKind::Monthly).unwrap();
    let report = write_verified(dir.path(), monthly, LayoutVersion::V700).unwrap();

    let checked = check_file(&report.path.unwrap(), None, LayoutVersion::V700).unwrap();
    assert_eq!(checked.kind, FileKind::Monthly);
    assert_eq!(checked.line_count, 3);
    assert_eq!(checked.data_line_count, 1);
    assert_eq!(checked.line_width, 700);
}

#[test]
fn check_file_rejects_wrong_kind_and_unknown_names() {
    let dir = tempfile::tempdir().unwrap();
    let output = output();
    let daily = output.file(FileKind::Daily).unwrap();
    let report = write_verified(dir.path(), daily, LayoutVersion::V700).unwrap();
    let path = report.path.unwrap();

    assert!(check_file(&path, Some(FileKind::Monthly), LayoutVersion::V700).is_err());

    let renamed = dir.path().join("submission.txt");
    fs::copy(&path, &renamed).unwrap();
    let error = check_file(&renamed, None, LayoutVersion::V700).unwrap_err();
    assert!(error.to_string().contains("--kind"));
    assert!(check_file(&renamed, Some(FileKind::Daily), LayoutVersion::V700).is_ok());
}

#[test]
fn truncated_file_on_disk_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let output = output();
    let monthly = output.file(FileKind::Monthly).unwrap();
    let path = dir.path().join(&monthly.name);
    fs::write(&path, &monthly.bytes[..monthly.bytes.len() - 1]).unwrap();
    assert!(check_file(&path, None, LayoutVersion::V700).is_err());
}

#[test]
fn failed_verification_leaves_no_staged_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = output().file(FileKind::Monthly).unwrap().clone();
    file.bytes.truncate(file.bytes.len() - 1);

    assert!(write_verified(dir.path(), &file, LayoutVersion::V700).is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
