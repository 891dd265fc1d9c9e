//! Data model for Layout 700v2 credit-bureau submissions.

pub mod error;
pub mod record;
pub mod status;
pub mod submission;

pub use error::{ModelError, Result};
pub use record::{AccountRecord, FLAG_FIELDS, TEXT_FIELDS, is_placeholder_id, parse_flag};
pub use status::{RecordKind, StatusCode};
pub use submission::{FileKind, FileSelection, SubmitterConfig};

/// Sentinel written for any unset or unparseable date.
pub const UNSET_DATE: &str = "00000000";
