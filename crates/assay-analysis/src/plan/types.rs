//! Plan types.

use std::fmt;

use serde::{Deserialize, Serialize};

use assay_core::types::{Signal, SignalSeverity, Workstream};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanPhase {
    Mvp,
    Expanded,
    Hardening,
}

impl PlanPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mvp => "MVP",
            Self::Expanded => "EXPANDED",
            Self::Hardening => "HARDENING",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mvp => "MVP",
            Self::Expanded => "Expanded",
            Self::Hardening => "Hardening",
        }
    }

    pub fn all() -> &'static [PlanPhase] {
        &[Self::Mvp, Self::Expanded, Self::Hardening]
    }

    /// Nominal phase of a gap severity.
    pub fn for_severity(severity: SignalSeverity) -> Self {
        match severity {
            SignalSeverity::High => Self::Mvp,
            SignalSeverity::Med => Self::Expanded,
            SignalSeverity::Low => Self::Hardening,
        }
    }
}

impl fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effort bucket by distinct affected assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffortBucket {
    S,
    M,
    L,
}

impl EffortBucket {
    pub fn from_asset_count(count: usize) -> Self {
        if count < 5 {
            Self::S
        } else if count <= 20 {
            Self::M
        } else {
            Self::L
        }
    }
}

/// All gaps for one (phase, workstream, signal) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationAction {
    pub id: String,
    pub phase: PlanPhase,
    pub workstream: Workstream,
    pub signal: Signal,
    pub title: String,
    pub gap_count: usize,
    pub asset_count: usize,
    pub effort: EffortBucket,
    pub gap_ids: Vec<String>,
    pub asset_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkstreamPlan {
    pub workstream: Workstream,
    pub actions: Vec<RemediationAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasePlan {
    pub phase: PlanPhase,
    pub workstreams: Vec<WorkstreamPlan>,
}

impl PhasePlan {
    pub fn actions(&self) -> impl Iterator<Item = &RemediationAction> {
        self.workstreams.iter().flat_map(|w| w.actions.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationPlan {
    /// MVP, Expanded, Hardening, always in that order.
    pub phases: Vec<PhasePlan>,
    /// HIGH-severity actions held back from MVP by the quick-win cap.
    pub deferred: Vec<RemediationAction>,
    pub total_gaps: usize,
}

impl RemediationPlan {
    pub fn phase(&self, phase: PlanPhase) -> Option<&PhasePlan> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn actions(&self) -> impl Iterator<Item = &RemediationAction> {
        self.phases.iter().flat_map(|p| p.actions())
    }

    pub fn total_actions(&self) -> usize {
        self.actions().count()
    }
}
