//! Catalog (registry) errors.

use super::error_code::{self, AssayErrorCode};

/// Errors raised while validating or resolving the static registries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate field id: {0}")]
    DuplicateField(String),

    #[error("Field {field} has no signal contributions")]
    FieldWithoutContributions { field: String },

    #[error("Unknown use case: {0}")]
    UnknownUseCase(String),

    #[error("Use case {use_case} is invalid: {message}")]
    InvalidProfile { use_case: String, message: String },

    #[error("Invalid classification pattern for {field}: {message}")]
    InvalidPattern { field: String, message: String },
}

impl AssayErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
