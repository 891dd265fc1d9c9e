//! Record ingestion for the submission generator.
//!
//! Exported account data arrives as JSON (bare array or the data source's
//! response envelope) or CSV. Column names from every known naming scheme
//! are folded onto the canonical [`AccountRecord`](sacrra_model::AccountRecord).

mod csv_records;
pub mod error;
pub mod fields;
mod json;
mod loader;

pub use csv_records::parse_csv;
pub use error::{IngestError, Result};
pub use fields::{FieldMapper, canonical_name};
pub use json::parse_json;
pub use loader::{InputFormat, Ingested, load_records};
