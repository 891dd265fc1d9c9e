use thiserror::Error;

use sacrra_layout::LayoutError;
use sacrra_model::ModelError;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("configuration: {0}")]
    Config(#[from] ModelError),
    #[error("layout violation: {0}")]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
