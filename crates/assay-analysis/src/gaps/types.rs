//! Gap types.

use std::fmt;

use serde::{Deserialize, Serialize};

use assay_core::types::{Signal, SignalSeverity, Workstream};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GapType {
    /// Signal known to be absent.
    Missing,
    /// Signal could not be evaluated.
    Unknown,
    /// Sources disagree. Reserved; the detector does not emit it.
    Conflict,
}

impl GapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "MISSING",
            Self::Unknown => "UNKNOWN",
            Self::Conflict => "CONFLICT",
        }
    }

    pub fn all() -> &'static [GapType] {
        &[Self::Missing, Self::Unknown, Self::Conflict]
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deficiency of one required signal on one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    /// `gap-{type}-{signal}-{subject}`, lowercased.
    pub id: String,
    pub gap_type: GapType,
    pub signal: Signal,
    pub subject_id: String,
    pub severity: SignalSeverity,
    pub workstream: Workstream,
    pub explanation: String,
    #[serde(default)]
    pub evidence_refs: Vec<String>,
}

/// How often a signal shows up among a set of gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapFrequency {
    pub signal: Signal,
    pub count: usize,
}
