//! Assessment runs: per-asset evaluation, batching, rollups and summary.

pub mod assess;
pub mod engine;
pub mod summary;
pub mod types;

pub use assess::{assess_asset, AssessmentContext};
pub use engine::AssessmentEngine;
pub use summary::{methodology_input, summarize};
pub use types::*;
