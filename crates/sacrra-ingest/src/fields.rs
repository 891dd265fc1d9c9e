//! Field-name canonicalization across export naming schemes.
//!
//! Exports have used `snake_case`, `Title_Snake` and free-text names such as
//! `Created Date`. All of them fold to the same canonical key: lowercase,
//! with runs of non-alphanumeric characters collapsed to one underscore.

use std::collections::BTreeSet;

use sacrra_model::AccountRecord;

/// Export names whose canonical form differs from the record attribute.
const ALIASES: &[(&str, &str)] = &[
    ("created_date", "date_account_opened"),
    ("date_opened", "date_account_opened"),
    ("id_number", "sa_id"),
    ("passport_number", "non_sa_id"),
    ("account_no", "account_number"),
    ("status", "status_code"),
    ("installment", "installment_amount"),
    ("instalment_amount", "installment_amount"),
    ("number_of_participants", "no_of_participants"),
];

/// Names that win over any other name for the same attribute, whatever order
/// the export lists its fields in.
const PREFERRED: &[&str] = &["created_date"];

/// Fold a raw export column name to its canonical form.
pub fn canonical_name(raw: &str) -> String {
    let key = fold_name(raw);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |(_, canonical)| (*canonical).to_string())
}

fn is_preferred(raw: &str) -> bool {
    PREFERRED.contains(&fold_name(raw).as_str())
}

fn fold_name(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().trim_matches('\u{feff}').chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    key
}

/// Applies named values to records and remembers names it could not place.
#[derive(Debug, Default)]
pub struct FieldMapper {
    unknown: BTreeSet<String>,
}

impl FieldMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one exported value on `record`.
    pub fn apply(&mut self, record: &mut AccountRecord, raw_name: &str, value: &str) {
        let name = canonical_name(raw_name);
        if !record.set_field(&name, value) && !self.unknown.contains(raw_name) {
            tracing::debug!(field = %raw_name, "ignoring unknown field");
            self.unknown.insert(raw_name.to_string());
        }
    }

    /// Build one record from named values.
    ///
    /// Preferred names are applied last, so they overwrite any other source
    /// of the same attribute.
    pub fn map_record<'n, V: AsRef<str>>(
        &mut self,
        fields: impl IntoIterator<Item = (&'n str, V)>,
    ) -> AccountRecord {
        let mut fields: Vec<(&str, V)> = fields.into_iter().collect();
        fields.sort_by_key(|(name, _)| is_preferred(name));
        let mut record = AccountRecord::default();
        for (name, value) in &fields {
            self.apply(&mut record, name, value.as_ref());
        }
        record
    }

    /// Export names that matched no record attribute.
    pub fn into_unknown(self) -> BTreeSet<String> {
        self.unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_schemes_fold_together() {
        assert_eq!(canonical_name("current_balance"), "current_balance");
        assert_eq!(canonical_name("Current_Balance"), "current_balance");
        assert_eq!(canonical_name(" Current Balance "), "current_balance");
        assert_eq!(canonical_name("Res-Address1"), "res_address1");
        assert_eq!(canonical_name("\u{feff}SA_ID"), "sa_id");
    }

    #[test]
    fn aliases_resolve_to_record_attributes() {
        assert_eq!(canonical_name("Created Date"), "date_account_opened");
        assert_eq!(canonical_name("ID Number"), "sa_id");
    }

    #[test]
    fn created_date_wins_in_either_order() {
        let mut mapper = FieldMapper::new();
        let record = mapper.map_record([
            ("Created Date", "20250614"),
            ("date_account_opened", "20240101"),
        ]);
        assert_eq!(record.date_account_opened, "20250614");

        let record = mapper.map_record([
            ("date_account_opened", "20240101"),
            ("Created Date", "20250614"),
        ]);
        assert_eq!(record.date_account_opened, "20250614");
    }

    #[test]
    fn unknown_names_are_collected_once() {
        let mut mapper = FieldMapper::new();
        let mut record = AccountRecord::default();
        mapper.apply(&mut record, "Modified Date", "2025-01-01");
        mapper.apply(&mut record, "Modified Date", "2025-01-02");
        mapper.apply(&mut record, "Surname", "Dlamini");
        mapper.apply(&mut record, "Deceased_Flag", "yes");
        assert_eq!(record.surname, "Dlamini");
        assert!(record.deceased_flag);
        assert_eq!(
            mapper.into_unknown().into_iter().collect::<Vec<_>>(),
            ["Modified Date"]
        );
    }
}
