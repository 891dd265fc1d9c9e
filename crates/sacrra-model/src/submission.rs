//! File kinds, run selection and submitter configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Kind of submission file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FileKind {
    /// Registrations and closures for one transaction date.
    Daily,
    /// Full book of accounts for one calendar month.
    Monthly,
}

impl FileKind {
    /// Letter used in the file name (`_D_` / `_M_`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Daily => "D",
            Self::Monthly => "M",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" | "d" => Ok(Self::Daily),
            "monthly" | "m" => Ok(Self::Monthly),
            other => Err(ModelError::UnknownFileKind(other.to_string())),
        }
    }
}

/// Which files a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FileSelection {
    #[default]
    Daily,
    Monthly,
    Both,
}

impl FileSelection {
    #[must_use]
    pub const fn kinds(self) -> &'static [FileKind] {
        match self {
            Self::Daily => &[FileKind::Daily],
            Self::Monthly => &[FileKind::Monthly],
            Self::Both => &[FileKind::Daily, FileKind::Monthly],
        }
    }

    #[must_use]
    pub fn includes(self, kind: FileKind) -> bool {
        self.kinds().contains(&kind)
    }
}

/// Submitter identity stamped into headers and daily trailing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterConfig {
    /// Bureau-assigned supplier reference (at most 10 characters).
    pub supplier_ref: String,
    /// Trading name written into the monthly header.
    pub brand_name: String,
}

impl SubmitterConfig {
    /// Maximum supplier reference width in the layout.
    pub const SUPPLIER_REF_WIDTH: usize = 10;

    pub fn new(supplier_ref: impl Into<String>, brand_name: impl Into<String>) -> Self {
        Self {
            supplier_ref: supplier_ref.into(),
            brand_name: brand_name.into(),
        }
    }

    /// Check the values fit the layout before any line is built.
    pub fn validate(&self) -> Result<()> {
        let supplier_ref = self.supplier_ref.trim();
        if supplier_ref.is_empty() {
            return Err(ModelError::InvalidConfig {
                field: "supplier_ref",
                reason: "must not be empty".to_string(),
            });
        }
        if supplier_ref.len() > Self::SUPPLIER_REF_WIDTH {
            return Err(ModelError::InvalidConfig {
                field: "supplier_ref",
                reason: format!(
                    "'{supplier_ref}' exceeds {} characters",
                    Self::SUPPLIER_REF_WIDTH
                ),
            });
        }
        for (field, value) in [
            ("supplier_ref", &self.supplier_ref),
            ("brand_name", &self.brand_name),
        ] {
            if !value.is_ascii() {
                return Err(ModelError::InvalidConfig {
                    field,
                    reason: "must be ASCII".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_kinds() {
        assert_eq!(FileSelection::Both.kinds().len(), 2);
        assert!(FileSelection::Monthly.includes(FileKind::Monthly));
        assert!(!FileSelection::Daily.includes(FileKind::Monthly));
    }

    #[test]
    fn config_validation() {
        assert!(SubmitterConfig::new("ABC1234567", "Brand").validate().is_ok());
        assert!(SubmitterConfig::new("", "Brand").validate().is_err());
        assert!(SubmitterConfig::new("ABC12345678", "Brand").validate().is_err());
        assert!(SubmitterConfig::new("ABC", "Brånd").validate().is_err());
    }

    #[test]
    fn file_kind_from_str() {
        assert_eq!("Daily".parse::<FileKind>().unwrap(), FileKind::Daily);
        assert_eq!("M".parse::<FileKind>().unwrap(), FileKind::Monthly);
        assert!("weekly".parse::<FileKind>().is_err());
    }
}
