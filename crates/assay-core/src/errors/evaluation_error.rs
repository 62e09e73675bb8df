//! Per-asset evaluation errors.

use super::error_code::{self, AssayErrorCode};

/// Errors that can occur while evaluating a single asset.
///
/// Field-level variants never escape the field evaluator: they are
/// rendered into `FieldResult::error` and the field degrades to UNKNOWN.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Invalid asset {guid}: {reason}")]
    InvalidAsset { guid: String, reason: String },

    #[error("Attribute {attribute} has unexpected type: expected {expected}")]
    UnexpectedAttributeType { attribute: String, expected: &'static str },

    #[error("Classification pattern for {field} failed to compile: {message}")]
    InvalidPattern { field: String, message: String },
}

impl AssayErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAsset { .. } => error_code::INVALID_ASSET,
            _ => error_code::EVALUATION_ERROR,
        }
    }
}
