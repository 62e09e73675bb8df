//! Asset-level gap detection and gap summaries.

pub mod detector;
pub mod summary;
pub mod types;

pub use detector::{detect_gaps, gap_id};
pub use summary::{compute_gap_summary, top_gaps, GapSummary};
pub use types::*;
