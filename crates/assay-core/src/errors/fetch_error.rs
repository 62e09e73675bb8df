//! Asset fetching errors, raised by `AssetFetcher` implementations.

use super::error_code::{self, AssayErrorCode};

/// Errors surfaced by the asset-fetching collaborator.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    #[error("Malformed asset payload: {0}")]
    Malformed(String),
}

impl AssayErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RateLimited { .. } => error_code::FETCH_RATE_LIMITED,
            _ => error_code::FETCH_ERROR,
        }
    }
}
