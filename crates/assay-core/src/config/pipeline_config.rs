//! Pipeline (batching and error policy) configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BATCH_SIZE;

/// What to do when a single asset fails during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the run and propagate the error.
    Fail,
    /// Count the asset as processed, omit its results, log at debug.
    Skip,
    /// Same as `Skip` but logged at warn and recorded in run metadata.
    Warn,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Warn => "warn",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            "warn" => Ok(Self::Warn),
            other => Err(format!("unknown error policy: {other}")),
        }
    }
}

/// Configuration for the batch runner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Assets per batch. Default: 100.
    pub batch_size: Option<usize>,
    /// Error policy: "fail" | "skip" | "warn". Default: "warn".
    pub on_error: Option<String>,
    /// Evaluate assets of a batch in parallel. Default: true.
    pub parallel: Option<bool>,
}

impl PipelineConfig {
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.filter(|b| *b > 0).unwrap_or(DEFAULT_BATCH_SIZE)
    }

    /// Returns the effective error policy, defaulting to `Warn`.
    pub fn effective_error_policy(&self) -> ErrorPolicy {
        self.on_error
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ErrorPolicy::Warn)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
