//! AssayErrorCode trait for structured error reporting.

/// Every assay error enum exposes a stable machine-readable code so that
/// callers (CLIs, HTTP layers, UIs) can branch without parsing messages.
pub trait AssayErrorCode {
    /// Returns the error code string (e.g., "FETCH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const FETCH_ERROR: &str = "FETCH_ERROR";
pub const FETCH_RATE_LIMITED: &str = "FETCH_RATE_LIMITED";
pub const EVALUATION_ERROR: &str = "EVALUATION_ERROR";
pub const INVALID_ASSET: &str = "INVALID_ASSET";
pub const ASSET_FAILED: &str = "ASSET_FAILED";
pub const CANCELLED: &str = "CANCELLED";
