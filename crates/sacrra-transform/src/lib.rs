//! Record pipeline for Layout 700v2 submissions.
//!
//! Raw [`AccountRecord`](sacrra_model::AccountRecord)s are normalized,
//! resolved to a status, classified per output file and rendered through
//! `sacrra-layout`. [`Generator::generate`] runs the whole pipeline.

pub mod classify;
pub mod date;
mod error;
pub mod group;
pub mod normalize;
pub mod pipeline;
pub mod resolve;

pub use classify::{
    ClassifiedRecord, DAILY_LOOKBACK_DAYS, DateWindow, classify_daily, classify_monthly,
};
pub use date::{normalize_date, parse_date};
pub use error::{Result, TransformError};
pub use group::{Grouped, group_by_account};
pub use normalize::{NormalizedRecord, SkipReason, normalize};
pub use pipeline::{
    GenerateOutput, GenerateStats, Generator, RunDates, SkippedRecord, generate,
};
pub use resolve::{ResolvedRecord, StatusResolution, resolve, resolve_status};
