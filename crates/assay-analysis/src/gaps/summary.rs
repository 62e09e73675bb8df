//! Gap counts by type, severity, workstream, signal, phase and effort.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use assay_core::types::{Signal, SignalSeverity, Workstream};

use super::types::{Gap, GapFrequency, GapType};
use crate::plan::PlanPhase;
use crate::use_cases::{effort_for_signal, RemediationEffort};

/// Every map carries every enum key, zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSummary {
    pub total: usize,
    pub by_type: BTreeMap<GapType, usize>,
    pub by_severity: BTreeMap<SignalSeverity, usize>,
    pub by_workstream: BTreeMap<Workstream, usize>,
    pub by_signal: BTreeMap<Signal, usize>,
    pub by_phase: BTreeMap<PlanPhase, usize>,
    pub by_effort: BTreeMap<RemediationEffort, usize>,
}

impl Default for GapSummary {
    fn default() -> Self {
        fn zeroed<K: Ord + Copy>(keys: &[K]) -> BTreeMap<K, usize> {
            keys.iter().map(|k| (*k, 0)).collect()
        }
        Self {
            total: 0,
            by_type: zeroed(GapType::all()),
            by_severity: zeroed(SignalSeverity::all()),
            by_workstream: zeroed(Workstream::all()),
            by_signal: zeroed(Signal::all()),
            by_phase: zeroed(PlanPhase::all()),
            by_effort: zeroed(RemediationEffort::all()),
        }
    }
}

pub fn compute_gap_summary(gaps: &[Gap]) -> GapSummary {
    let mut summary = GapSummary::default();
    for gap in gaps {
        summary.total += 1;
        *summary.by_type.entry(gap.gap_type).or_insert(0) += 1;
        *summary.by_severity.entry(gap.severity).or_insert(0) += 1;
        *summary.by_workstream.entry(gap.workstream).or_insert(0) += 1;
        *summary.by_signal.entry(gap.signal).or_insert(0) += 1;
        *summary
            .by_phase
            .entry(PlanPhase::for_severity(gap.severity))
            .or_insert(0) += 1;
        *summary
            .by_effort
            .entry(effort_for_signal(gap.signal))
            .or_insert(0) += 1;
    }
    summary
}

/// Most frequent gap signals, highest count first; ties by canonical order.
pub fn top_gaps(gaps: &[Gap], limit: usize) -> Vec<GapFrequency> {
    let mut counts: BTreeMap<Signal, usize> = BTreeMap::new();
    for gap in gaps {
        *counts.entry(gap.signal).or_insert(0) += 1;
    }
    let mut ranked: Vec<GapFrequency> = counts
        .into_iter()
        .map(|(signal, count)| GapFrequency { signal, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.signal.cmp(&b.signal)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaps::detect_gaps;
    use crate::catalog::CapabilityRequirements;
    use crate::signals::SignalSet;

    #[test]
    fn test_empty_summary_is_fully_keyed() {
        let s = compute_gap_summary(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.by_type.len(), 3);
        assert_eq!(s.by_severity.len(), 3);
        assert_eq!(s.by_workstream.len(), 5);
        assert_eq!(s.by_signal.len(), 10);
        assert_eq!(s.by_phase.len(), 3);
        assert_eq!(s.by_effort.len(), 3);
        assert!(s.by_signal.values().all(|v| *v == 0));
    }

    #[test]
    fn test_summary_counts() {
        let req = CapabilityRequirements {
            required_signals: [Signal::Ownership, Signal::Lineage, Signal::Quality].into_iter().collect(),
            critical_signals: Default::default(),
        };
        let gaps = detect_gaps(&req, &SignalSet::default(), "g1");
        let s = compute_gap_summary(&gaps);
        assert_eq!(s.total, 3);
        assert_eq!(s.by_type[&GapType::Unknown], 3);
        assert_eq!(s.by_type[&GapType::Missing], 0);
        assert_eq!(s.by_severity[&SignalSeverity::High], 1);
        assert_eq!(s.by_phase[&PlanPhase::Mvp], 1);
        assert_eq!(s.by_phase[&PlanPhase::Hardening], 1);
        assert_eq!(s.by_effort[&RemediationEffort::High], 2);
        assert_eq!(s.by_workstream[&Workstream::QualityFreshness], 1);
    }

    #[test]
    fn test_top_gaps_ranking() {
        let req = CapabilityRequirements {
            required_signals: [Signal::Ownership, Signal::Trust].into_iter().collect(),
            critical_signals: Default::default(),
        };
        let mut gaps = detect_gaps(&req, &SignalSet::default(), "a");
        gaps.extend(detect_gaps(&req, &SignalSet::default(), "b"));
        gaps.pop();
        let top = top_gaps(&gaps, 1);
        assert_eq!(top, vec![GapFrequency { signal: Signal::Ownership, count: 2 }]);
    }
}
