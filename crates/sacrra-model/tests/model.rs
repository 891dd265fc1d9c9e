use sacrra_model::{AccountRecord, FileSelection, StatusCode, SubmitterConfig};

#[test]
fn record_deserializes_with_defaults() {
    let json = r#"{"sa_id":"8001015009087","account_number":"A100","deceased_flag":true}"#;
    let record: AccountRecord = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.sa_id, "8001015009087");
    assert_eq!(record.account_number, "A100");
    assert!(record.deceased_flag);
    assert!(record.current_balance.is_empty());
    assert!(!record.handed_over_flag);
}

#[test]
fn record_roundtrips_through_json() {
    let record = AccountRecord {
        sa_id: "8001015009087".to_string(),
        surname: "DLAMINI".to_string(),
        current_balance: "1500".to_string(),
        disputed_flag: true,
        ..AccountRecord::default()
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: AccountRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn enums_serialize_by_name() {
    let json = serde_json::to_string(&StatusCode::CoolingOff).expect("serialize");
    assert_eq!(json, "\"CoolingOff\"");
    let selection: FileSelection = serde_json::from_str("\"Both\"").expect("deserialize");
    assert_eq!(selection, FileSelection::Both);
}

#[test]
fn config_roundtrip() {
    let config = SubmitterConfig::new("XY00123456", "Acme Credit");
    let json = serde_json::to_string(&config).expect("serialize");
    let round: SubmitterConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, config);
}
