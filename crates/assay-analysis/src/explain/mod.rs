//! Human-readable rationale for scores, gaps and signal coverage.

pub mod generator;
pub mod templates;

pub use generator::{
    explain_action, explain_gap, explain_methodology, explain_signal, explain_use_case,
    Explanation,
};
pub use templates::{missing_message, remediation_hint, unknown_message};
