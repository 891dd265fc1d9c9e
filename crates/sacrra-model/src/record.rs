//! Canonical account record.
//!
//! Every export format the data source has used over time maps onto this one
//! struct (see `sacrra-ingest`). Text attributes are stored exactly as
//! received; an empty string means the attribute was absent. Normalization of
//! dates and amounts happens later in the transform stage.

use serde::{Deserialize, Serialize};

/// One credit account as supplied by the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRecord {
    // Identity
    /// South African national ID number (13 digits).
    pub sa_id: String,
    /// Passport or other non-SA identifier.
    pub non_sa_id: String,
    pub gender: String,
    pub date_of_birth: String,

    // Account identity
    pub branch_code: String,
    pub account_number: String,
    pub sub_account_number: String,

    // Names
    pub surname: String,
    pub title: String,
    pub first_name: String,
    pub middle_name: String,
    pub third_name: String,

    // Residential address
    pub res_address1: String,
    pub res_address2: String,
    pub res_address3: String,
    pub res_address4: String,
    pub res_postal_code: String,
    pub tenant_type: String,

    // Postal address
    pub post_address1: String,
    pub post_address2: String,
    pub post_address3: String,
    pub post_address4: String,
    pub post_postal_code: String,

    // Account terms
    pub ownership: String,
    pub loan_reason: String,
    pub payment_type: String,
    pub date_account_opened: String,
    pub deferred_payment_date: String,
    pub last_payment_date: String,

    // Balances
    pub opening_balance: String,
    pub current_balance: String,
    pub current_balance_indicator: String,
    pub amount_overdue: String,
    pub installment_amount: String,
    pub months_in_arrears: String,

    // Status
    pub status_code: String,
    /// Operator-entered status that takes precedence over `status_code`.
    pub status_override: String,
    /// One-letter categorical flag (Z, L, W, D or E).
    pub status_flag: String,
    pub status_date: String,
    pub repayment_frequency: String,
    pub terms: String,

    // Previous account identity (account transfers)
    pub old_branch_code: String,
    pub old_account_number: String,
    pub old_sub_account_number: String,
    pub old_supplier_ref: String,

    // Telephony
    pub tel_home: String,
    pub tel_cell: String,
    pub tel_work: String,

    // Employment
    pub employer: String,
    pub income: String,
    pub income_frequency: String,
    pub occupation: String,

    // Third-party sale
    pub third_party_name: String,
    pub account_sold: String,
    pub no_of_participants: String,

    /// Free-text recovery note; `written_off` marks a write-off.
    pub recovery_action: String,

    // Categorical flags
    pub deceased_flag: bool,
    pub handed_over_flag: bool,
    pub written_off_flag: bool,
    pub disputed_flag: bool,
    pub terms_extended_flag: bool,
    pub defaulted_flag: bool,
}

macro_rules! text_fields {
    ($($field:ident),* $(,)?) => {
        /// Canonical names of every text attribute, in declaration order.
        pub const TEXT_FIELDS: &[&str] = &[$(stringify!($field)),*];

        impl AccountRecord {
            /// Read a text attribute by canonical name.
            pub fn text(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }

            /// Mutable access to a text attribute by canonical name.
            pub fn text_mut(&mut self, name: &str) -> Option<&mut String> {
                match name {
                    $(stringify!($field) => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            /// Apply `f` to every text attribute.
            pub fn for_each_text_mut(&mut self, mut f: impl FnMut(&mut String)) {
                $(f(&mut self.$field);)*
            }
        }
    };
}

text_fields!(
    sa_id,
    non_sa_id,
    gender,
    date_of_birth,
    branch_code,
    account_number,
    sub_account_number,
    surname,
    title,
    first_name,
    middle_name,
    third_name,
    res_address1,
    res_address2,
    res_address3,
    res_address4,
    res_postal_code,
    tenant_type,
    post_address1,
    post_address2,
    post_address3,
    post_address4,
    post_postal_code,
    ownership,
    loan_reason,
    payment_type,
    date_account_opened,
    deferred_payment_date,
    last_payment_date,
    opening_balance,
    current_balance,
    current_balance_indicator,
    amount_overdue,
    installment_amount,
    months_in_arrears,
    status_code,
    status_override,
    status_flag,
    status_date,
    repayment_frequency,
    terms,
    old_branch_code,
    old_account_number,
    old_sub_account_number,
    old_supplier_ref,
    tel_home,
    tel_cell,
    tel_work,
    employer,
    income,
    income_frequency,
    occupation,
    third_party_name,
    account_sold,
    no_of_participants,
    recovery_action,
);

/// Canonical names of the boolean flag attributes.
pub const FLAG_FIELDS: &[&str] = &[
    "deceased_flag",
    "handed_over_flag",
    "written_off_flag",
    "disputed_flag",
    "terms_extended_flag",
    "defaulted_flag",
];

impl AccountRecord {
    /// Set an attribute from its textual form.
    ///
    /// Returns `false` when `name` is not a canonical attribute name.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        if let Some(slot) = self.text_mut(name) {
            *slot = value.to_string();
            return true;
        }
        let flag = parse_flag(value);
        match name {
            "deceased_flag" => self.deceased_flag = flag,
            "handed_over_flag" => self.handed_over_flag = flag,
            "written_off_flag" => self.written_off_flag = flag,
            "disputed_flag" => self.disputed_flag = flag,
            "terms_extended_flag" => self.terms_extended_flag = flag,
            "defaulted_flag" => self.defaulted_flag = flag,
            _ => return false,
        }
        true
    }

    /// The identifier that makes this record encodable.
    ///
    /// The SA ID wins when present; otherwise the non-SA ID. Empty values and
    /// all-zero placeholders do not count.
    pub fn identity_key(&self) -> Option<&str> {
        [self.sa_id.as_str(), self.non_sa_id.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|id| !is_placeholder_id(id))
    }
}

/// True for empty identifiers and all-zero placeholders such as `0000000000000`.
pub fn is_placeholder_id(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.chars().all(|c| c == '0')
}

/// Interpret a loosely typed flag value.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "t"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_lookup_covers_every_listed_name() {
        let mut record = AccountRecord::default();
        for name in TEXT_FIELDS {
            assert!(record.set_field(name, "X"), "{name} not settable");
            assert_eq!(record.text(name), Some("X"));
        }
    }

    #[test]
    fn flags_parse_loosely() {
        let mut record = AccountRecord::default();
        assert!(record.set_field("deceased_flag", "Yes"));
        assert!(record.deceased_flag);
        assert!(record.set_field("deceased_flag", "false"));
        assert!(!record.deceased_flag);
        assert!(!record.set_field("unknown_column", "1"));
    }

    #[test]
    fn identity_key_skips_placeholders() {
        let mut record = AccountRecord {
            sa_id: "0000000000000".to_string(),
            ..AccountRecord::default()
        };
        assert_eq!(record.identity_key(), None);
        record.non_sa_id = "P1234567".to_string();
        assert_eq!(record.identity_key(), Some("P1234567"));
        record.sa_id = " 8001015009087 ".to_string();
        assert_eq!(record.identity_key(), Some("8001015009087"));
    }
}
