//! Rollup configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROLLUP_DIMENSION;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RollupConfig {
    /// Default rollup dimensions when a request names none.
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Build the connection → database → schema tree. Default: true.
    pub hierarchical: Option<bool>,
}

impl RollupConfig {
    pub fn effective_dimensions(&self) -> Vec<String> {
        if self.dimensions.is_empty() {
            vec![DEFAULT_ROLLUP_DIMENSION.to_string()]
        } else {
            self.dimensions.clone()
        }
    }

    pub fn effective_hierarchical(&self) -> bool {
        self.hierarchical.unwrap_or(true)
    }
}
