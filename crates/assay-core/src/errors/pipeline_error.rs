//! Run-level errors and the tolerated-failure accumulator.

use super::error_code::{self, AssayErrorCode};
use super::{CatalogError, ConfigError, EvaluationError, FetchError};

/// Errors that can occur during an assessment run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset {guid} failed: {message}")]
    AssetFailed { guid: String, message: String },

    #[error("Assessment cancelled after {processed} assets")]
    Cancelled { processed: usize },
}

impl AssayErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.error_code(),
            Self::Evaluation(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::AssetFailed { .. } => error_code::ASSET_FAILED,
            Self::Cancelled { .. } => error_code::CANCELLED,
        }
    }
}

/// Assessed data plus the per-asset failures tolerated along the way.
///
/// Under the `fail` policy the first failure aborts the run instead, so
/// `errors` is only populated by `skip` and `warn`.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    pub data: T,
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// GUIDs of the assets recorded as failed, in failure order.
    pub fn failed_guids(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().filter_map(|err| match err {
            PipelineError::AssetFailed { guid, .. } => Some(guid.as_str()),
            _ => None,
        })
    }
}
