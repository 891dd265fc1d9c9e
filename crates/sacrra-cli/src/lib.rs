//! CLI library components for the submission generator.

pub mod logging;
pub mod output;
