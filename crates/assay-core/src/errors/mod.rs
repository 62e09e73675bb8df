//! Error handling for assay.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod fetch_error;
pub mod pipeline_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::AssayErrorCode;
pub use evaluation_error::EvaluationError;
pub use fetch_error::FetchError;
pub use pipeline_error::{PipelineError, PipelineResult};
