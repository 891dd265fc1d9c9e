//! Layout 700v2 fixed-width encoding.
//!
//! This crate turns account records into the byte-exact lines of a bureau
//! submission file and validates the assembled result.
//!
//! # Features
//!
//! - Total fixed-width field encoder ([`encode`])
//! - Versioned field tables for header, data and trailer lines
//! - CRLF file assembly with width, ASCII and trailer-count validation
//! - Bureau file naming convention
//!
//! # Example
//!
//! ```
//! use sacrra_layout::{LayoutVersion, LineBuilder, assemble};
//! use sacrra_model::{AccountRecord, FileKind, RecordKind, SubmitterConfig};
//!
//! let config = SubmitterConfig::new("SUP0001", "Acme Lending");
//! let builder = LineBuilder::new(LayoutVersion::V700, &config);
//! let record = AccountRecord {
//!     sa_id: "8001015009087".to_string(),
//!     account_number: "A100".to_string(),
//!     ..AccountRecord::default()
//! };
//! let lines = vec![
//!     builder.header("20250630", "20250615"),
//!     builder.data_line(&record, RecordKind::Data),
//!     builder.trailer(3),
//! ];
//! let file = assemble(LayoutVersion::V700, FileKind::Monthly, "m.txt", &lines).unwrap();
//! assert_eq!(file.line_count, 3);
//! ```

mod assemble;
mod encode;
mod error;
pub mod layout;
mod line;
pub mod naming;
pub mod validate;

pub use assemble::{SubmissionFile, assemble};
pub use encode::{Justification, encode, encode_value};
pub use error::{LayoutError, Result};
pub use layout::{DAILY_LINE_WIDTH, FieldSpec, LayoutVersion, MONTHLY_LINE_WIDTH, Source};
pub use line::LineBuilder;
pub use naming::{file_name, kind_from_file_name};
pub use validate::{FileValidator, LINE_TERMINATOR, ValidatedFile};
