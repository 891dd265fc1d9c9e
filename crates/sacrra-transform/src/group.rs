//! Collapse duplicate accounts to their most current record.

use std::collections::HashMap;

use crate::resolve::ResolvedRecord;

/// A record that can be grouped by account.
pub trait Grouped {
    fn account_key(&self) -> &str;

    /// Status date as fixed-width `YYYYMMDD`, compared as text.
    fn status_date_key(&self) -> &str;
}

impl<T: Grouped + ?Sized> Grouped for &T {
    fn account_key(&self) -> &str {
        (**self).account_key()
    }

    fn status_date_key(&self) -> &str {
        (**self).status_date_key()
    }
}

impl Grouped for ResolvedRecord {
    fn account_key(&self) -> &str {
        self.account_number()
    }

    fn status_date_key(&self) -> &str {
        self.supplied_status_date_text()
    }
}

/// Keep one record per account: the one with the greatest status date.
///
/// A later record replaces the keeper only when its date is strictly greater,
/// so ties and unset dates keep the earlier record. Accounts appear in the
/// order they were first seen.
pub fn group_by_account<T: Grouped>(records: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut kept: Vec<T> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let existing = index.get(record.account_key()).copied();
        match existing {
            Some(slot) => {
                if record.status_date_key() > kept[slot].status_date_key() {
                    kept[slot] = record;
                }
            }
            None => {
                index.insert(record.account_key().to_string(), kept.len());
                kept.push(record);
            }
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, &'static str, u8);

    impl Grouped for Row {
        fn account_key(&self) -> &str {
            self.0
        }

        fn status_date_key(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn greatest_status_date_wins() {
        let rows = vec![
            Row("A100", "20250101", 1),
            Row("A200", "00000000", 2),
            Row("A100", "20250301", 3),
            Row("A100", "20250201", 4),
        ];
        assert_eq!(
            group_by_account(rows),
            vec![Row("A100", "20250301", 3), Row("A200", "00000000", 2)]
        );
    }

    #[test]
    fn ties_and_unset_dates_keep_the_first() {
        let rows = vec![
            Row("A100", "20250101", 1),
            Row("A100", "20250101", 2),
            Row("A100", "00000000", 3),
        ];
        assert_eq!(group_by_account(rows), vec![Row("A100", "20250101", 1)]);
    }
}
