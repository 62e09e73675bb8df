//! The 10 canonical signals, their severities, aggregation rules and
//! remediation workstreams.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical metadata health signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Ownership,
    Semantics,
    Lineage,
    Sensitivity,
    Access,
    Quality,
    Freshness,
    Usage,
    AiReady,
    Trust,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ownership => "OWNERSHIP",
            Self::Semantics => "SEMANTICS",
            Self::Lineage => "LINEAGE",
            Self::Sensitivity => "SENSITIVITY",
            Self::Access => "ACCESS",
            Self::Quality => "QUALITY",
            Self::Freshness => "FRESHNESS",
            Self::Usage => "USAGE",
            Self::AiReady => "AI_READY",
            Self::Trust => "TRUST",
        }
    }

    pub fn all() -> &'static [Signal] {
        &[
            Self::Ownership,
            Self::Semantics,
            Self::Lineage,
            Self::Sensitivity,
            Self::Access,
            Self::Quality,
            Self::Freshness,
            Self::Usage,
            Self::AiReady,
            Self::Trust,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ownership => "Ownership",
            Self::Semantics => "Semantics",
            Self::Lineage => "Lineage",
            Self::Sensitivity => "Sensitivity",
            Self::Access => "Access",
            Self::Quality => "Quality",
            Self::Freshness => "Freshness",
            Self::Usage => "Usage",
            Self::AiReady => "AI Readiness",
            Self::Trust => "Trust",
        }
    }

    /// Static severity used by the asset-level gap engine when the signal is
    /// not critical for the capability being assessed.
    pub fn default_severity(&self) -> SignalSeverity {
        match self {
            Self::Ownership | Self::Semantics | Self::AiReady => SignalSeverity::High,
            Self::Lineage | Self::Sensitivity | Self::Access | Self::Trust => SignalSeverity::Med,
            Self::Quality | Self::Freshness | Self::Usage => SignalSeverity::Low,
        }
    }

    /// Remediation workstream. TRUST folds into OWNERSHIP and AI_READY into
    /// SENSITIVITY_ACCESS.
    pub fn workstream(&self) -> Workstream {
        match self {
            Self::Ownership | Self::Trust => Workstream::Ownership,
            Self::Semantics => Workstream::Semantics,
            Self::Lineage => Workstream::Lineage,
            Self::Sensitivity | Self::Access | Self::AiReady => Workstream::SensitivityAccess,
            Self::Quality | Self::Freshness | Self::Usage => Workstream::QualityFreshness,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::all()
            .iter()
            .find(|signal| signal.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown signal: {s}"))
    }
}

/// Static severity of a signal gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalSeverity {
    High,
    Med,
    Low,
}

impl SignalSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Med => "MED",
            Self::Low => "LOW",
        }
    }

    pub fn all() -> &'static [SignalSeverity] {
        &[Self::High, Self::Med, Self::Low]
    }
}

impl fmt::Display for SignalSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 5-way partition of signals used to organise remediation work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Workstream {
    Ownership,
    Semantics,
    Lineage,
    SensitivityAccess,
    QualityFreshness,
}

impl Workstream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ownership => "OWNERSHIP",
            Self::Semantics => "SEMANTICS",
            Self::Lineage => "LINEAGE",
            Self::SensitivityAccess => "SENSITIVITY_ACCESS",
            Self::QualityFreshness => "QUALITY_FRESHNESS",
        }
    }

    pub fn all() -> &'static [Workstream] {
        &[
            Self::Ownership,
            Self::Semantics,
            Self::Lineage,
            Self::SensitivityAccess,
            Self::QualityFreshness,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ownership => "Ownership & Stewardship",
            Self::Semantics => "Semantics & Documentation",
            Self::Lineage => "Lineage",
            Self::SensitivityAccess => "Sensitivity & Access",
            Self::QualityFreshness => "Quality & Freshness",
        }
    }

    /// Signals belonging to this workstream, in canonical signal order.
    pub fn signals(&self) -> Vec<Signal> {
        Signal::all()
            .iter()
            .copied()
            .filter(|s| s.workstream() == *self)
            .collect()
    }
}

impl fmt::Display for Workstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a signal combines its contributing field results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AggregationRule {
    /// Present if at least one contributing field is present.
    Any,
    /// Present only if every contributing field is present.
    All,
    /// Present if the weighted share of present fields reaches `threshold`.
    WeightedThreshold { threshold: f64 },
}

impl AggregationRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
            Self::WeightedThreshold { .. } => "weighted_threshold",
        }
    }
}
