//! Bureau file naming: `{supplier_ref}_ALL_L702_{D|M}_{date}_1_1.txt`.

use sacrra_model::FileKind;

const LAYOUT_TAG: &str = "L702";

/// Name for a file of `kind` dated `date` (`YYYYMMDD`).
///
/// Daily files carry the transaction date, monthly files the month-end date.
#[must_use]
pub fn file_name(supplier_ref: &str, kind: FileKind, date: &str) -> String {
    format!(
        "{}_ALL_{LAYOUT_TAG}_{}_{date}_1_1.txt",
        supplier_ref.trim(),
        kind.code()
    )
}

/// Recover the file kind from a conventional file name.
#[must_use]
pub fn kind_from_file_name(name: &str) -> Option<FileKind> {
    let daily = format!("_{LAYOUT_TAG}_D_");
    let monthly = format!("_{LAYOUT_TAG}_M_");
    if name.contains(&daily) {
        Some(FileKind::Daily)
    } else if name.contains(&monthly) {
        Some(FileKind::Monthly)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_convention() {
        assert_eq!(
            file_name("SUP0001", FileKind::Daily, "20250615"),
            "SUP0001_ALL_L702_D_20250615_1_1.txt"
        );
        assert_eq!(
            file_name("SUP0001", FileKind::Monthly, "20250630"),
            "SUP0001_ALL_L702_M_20250630_1_1.txt"
        );
    }

    #[test]
    fn kind_roundtrips_through_name() {
        for kind in [FileKind::Daily, FileKind::Monthly] {
            let name = file_name("SUP0001", kind, "20250630");
            assert_eq!(kind_from_file_name(&name), Some(kind));
        }
        assert_eq!(kind_from_file_name("notes.txt"), None);
    }
}
