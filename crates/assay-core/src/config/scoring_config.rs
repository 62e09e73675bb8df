//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_METHODOLOGY, DEFAULT_TOP_GAPS};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Default methodology name. Default: "weighted_dimensions".
    pub methodology: Option<String>,
    /// Number of top gaps in the run summary. Default: 10.
    pub top_gaps: Option<usize>,
}

impl ScoringConfig {
    pub fn effective_methodology(&self) -> &str {
        self.methodology.as_deref().unwrap_or(DEFAULT_METHODOLOGY)
    }

    pub fn effective_top_gaps(&self) -> usize {
        self.top_gaps.unwrap_or(DEFAULT_TOP_GAPS)
    }
}
