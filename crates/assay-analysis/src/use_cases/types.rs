//! Use-case result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use assay_core::types::Signal;

/// Readiness of one asset for one use case. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessLevel {
    NotReady,
    Partial,
    Ready,
    Excellent,
}

impl ReadinessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotReady => "NOT_READY",
            Self::Partial => "PARTIAL",
            Self::Ready => "READY",
            Self::Excellent => "EXCELLENT",
        }
    }

    /// READY or better.
    pub fn is_ready(&self) -> bool {
        *self >= Self::Ready
    }
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a use-case gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GapSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl GapSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for GapSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remediation effort keyed to signal identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RemediationEffort {
    High,
    Medium,
    Low,
}

impl RemediationEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub fn all() -> &'static [RemediationEffort] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

/// One profile signal evaluated against an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAssessment {
    pub signal: Signal,
    pub weight: f64,
    pub required: bool,
    pub score: f64,
    pub met: bool,
}

/// An unmet signal for a use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseGap {
    pub signal: Signal,
    pub severity: GapSeverity,
    pub effort: RemediationEffort,
    pub required: bool,
    pub weight: f64,
    pub current_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseResult {
    pub use_case_id: String,
    pub readiness_score: f64,
    pub readiness_level: ReadinessLevel,
    pub required_signals_met: usize,
    pub required_signals_total: usize,
    pub signals: Vec<SignalAssessment>,
    pub gaps: Vec<UseCaseGap>,
}

impl UseCaseResult {
    /// Zero-valued result for an unknown profile.
    pub fn empty(use_case_id: &str) -> Self {
        Self {
            use_case_id: use_case_id.to_string(),
            readiness_score: 0.0,
            readiness_level: ReadinessLevel::NotReady,
            required_signals_met: 0,
            required_signals_total: 0,
            signals: Vec::new(),
            gaps: Vec::new(),
        }
    }
}
