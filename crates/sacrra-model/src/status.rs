//! Status codes and record-kind tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One-letter account status written into the status-code field.
///
/// [`StatusCode::None`] encodes as blanks and means no status is asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusCode {
    #[default]
    None,
    /// C: account closed, balance fully settled.
    Closed,
    /// D: account under dispute.
    Disputed,
    /// E: repayment terms extended.
    TermsExtended,
    /// L: handed over for collection.
    HandedOver,
    /// T: settled early, within 30 days of opening.
    EarlySettlement,
    /// V: settled during the cooling-off period (5 days).
    CoolingOff,
    /// W: written off.
    WrittenOff,
    /// Z: account holder deceased.
    Deceased,
}

impl StatusCode {
    /// Every asserted code, in alphabetical order.
    pub const ASSERTED: [StatusCode; 8] = [
        Self::Closed,
        Self::Disputed,
        Self::TermsExtended,
        Self::HandedOver,
        Self::EarlySettlement,
        Self::CoolingOff,
        Self::WrittenOff,
        Self::Deceased,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Closed => "C",
            Self::Disputed => "D",
            Self::TermsExtended => "E",
            Self::HandedOver => "L",
            Self::EarlySettlement => "T",
            Self::CoolingOff => "V",
            Self::WrittenOff => "W",
            Self::Deceased => "Z",
        }
    }

    /// Parse a code as written on an incoming record.
    ///
    /// Input is trimmed and upper-cased; blank input is [`StatusCode::None`].
    pub fn parse(value: &str) -> Result<Self> {
        let code = value.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Ok(Self::None);
        }
        Self::ASSERTED
            .into_iter()
            .find(|status| status.as_str() == code)
            .ok_or(ModelError::UnknownStatusCode(code))
    }

    /// Settlement statuses clear arrears and require a status date.
    #[must_use]
    pub const fn is_settlement(self) -> bool {
        matches!(
            self,
            Self::Closed | Self::EarlySettlement | Self::CoolingOff
        )
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record-kind tag written to byte 1 of every data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// R: newly opened account (daily files).
    Registration,
    /// C: account reached zero balance (daily files).
    Closure,
    /// D: ordinary monthly data line.
    Data,
}

impl RecordKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Registration => "R",
            Self::Closure => "C",
            Self::Data => "D",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_closed_set() {
        assert_eq!(StatusCode::parse(" c ").unwrap(), StatusCode::Closed);
        assert_eq!(StatusCode::parse("").unwrap(), StatusCode::None);
        for status in StatusCode::ASSERTED {
            assert_eq!(StatusCode::parse(status.as_str()).unwrap(), status);
        }
        assert!(StatusCode::parse("X").is_err());
        assert!(StatusCode::parse("CC").is_err());
    }

    #[test]
    fn settlement_codes() {
        let settled: Vec<_> = StatusCode::ASSERTED
            .into_iter()
            .filter(|s| s.is_settlement())
            .map(StatusCode::as_str)
            .collect();
        assert_eq!(settled, vec!["C", "T", "V"]);
    }
}
