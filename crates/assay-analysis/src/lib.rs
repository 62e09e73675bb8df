//! Metadata health assessment pipeline.
//!
//! Field evaluation → signal composition → use-case readiness → gap
//! detection → rollup aggregation → methodology scoring → remediation
//! planning. Every per-asset stage is a pure function of the catalog, the
//! tenant configuration and one asset record.

pub mod catalog;
pub mod evaluation;
pub mod explain;
pub mod gaps;
pub mod methodology;
pub mod pipeline;
pub mod plan;
pub mod quality;
pub mod reporters;
pub mod rollup;
pub mod signals;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use catalog::Catalog;
pub use pipeline::{assess_asset, AssessmentEngine, AssessmentRequest, AssessmentResult};
