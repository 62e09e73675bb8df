//! Phase bucketing with the MVP quick-win cap.

use rustc_hash::{FxHashMap, FxHashSet};

use assay_core::types::{Signal, SignalSeverity, Workstream};

use super::types::{
    EffortBucket, PhasePlan, PlanPhase, RemediationAction, RemediationPlan, WorkstreamPlan,
};
use crate::explain::remediation_hint;
use crate::gaps::Gap;

/// Non-core workstreams enter MVP only up to this many HIGH gaps.
pub const MVP_QUICK_WIN_CAP: usize = 20;

/// Build the MVP / Expanded / Hardening plan.
///
/// HIGH gaps of a capped workstream leave all three phases and are listed
/// under `deferred` instead.
pub fn build_plan(gaps: &[Gap]) -> RemediationPlan {
    let mut deferred = Vec::new();

    let mut mvp = Vec::new();
    for &workstream in Workstream::all() {
        let ws_gaps = select(gaps, SignalSeverity::High, workstream);
        if ws_gaps.is_empty() {
            continue;
        }
        let actions = group_actions(PlanPhase::Mvp, workstream, &ws_gaps);
        let always = matches!(workstream, Workstream::Ownership | Workstream::Semantics);
        if always || ws_gaps.len() <= MVP_QUICK_WIN_CAP {
            mvp.push(WorkstreamPlan {
                workstream,
                actions,
            });
        } else {
            tracing::debug!(
                workstream = %workstream,
                gaps = ws_gaps.len(),
                "workstream exceeds MVP quick-win cap; deferring"
            );
            deferred.extend(actions);
        }
    }

    let expanded = phase_workstreams(gaps, PlanPhase::Expanded, SignalSeverity::Med, Workstream::all());

    let hardening_order: Vec<Workstream> = std::iter::once(Workstream::QualityFreshness)
        .chain(
            Workstream::all()
                .iter()
                .copied()
                .filter(|w| *w != Workstream::QualityFreshness),
        )
        .collect();
    let hardening = phase_workstreams(gaps, PlanPhase::Hardening, SignalSeverity::Low, &hardening_order);

    RemediationPlan {
        phases: vec![
            PhasePlan {
                phase: PlanPhase::Mvp,
                workstreams: mvp,
            },
            PhasePlan {
                phase: PlanPhase::Expanded,
                workstreams: expanded,
            },
            PhasePlan {
                phase: PlanPhase::Hardening,
                workstreams: hardening,
            },
        ],
        deferred,
        total_gaps: gaps.len(),
    }
}

fn select(gaps: &[Gap], severity: SignalSeverity, workstream: Workstream) -> Vec<&Gap> {
    gaps.iter()
        .filter(|g| g.severity == severity && g.workstream == workstream)
        .collect()
}

fn phase_workstreams(
    gaps: &[Gap],
    phase: PlanPhase,
    severity: SignalSeverity,
    order: &[Workstream],
) -> Vec<WorkstreamPlan> {
    order
        .iter()
        .filter_map(|&workstream| {
            let ws_gaps = select(gaps, severity, workstream);
            (!ws_gaps.is_empty()).then(|| WorkstreamPlan {
                workstream,
                actions: group_actions(phase, workstream, &ws_gaps),
            })
        })
        .collect()
}

/// One action per signal, in first-seen signal order.
fn group_actions(phase: PlanPhase, workstream: Workstream, gaps: &[&Gap]) -> Vec<RemediationAction> {
    let mut groups: Vec<(Signal, Vec<&Gap>)> = Vec::new();
    let mut index: FxHashMap<Signal, usize> = FxHashMap::default();
    for &gap in gaps {
        let slot = *index.entry(gap.signal).or_insert_with(|| {
            groups.push((gap.signal, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(gap);
    }

    groups
        .into_iter()
        .map(|(signal, members)| {
            let mut seen = FxHashSet::default();
            let asset_ids: Vec<String> = members
                .iter()
                .filter(|g| seen.insert(g.subject_id.as_str()))
                .map(|g| g.subject_id.clone())
                .collect();
            RemediationAction {
                id: format!("action-{}-{}", phase.as_str(), signal.as_str()).to_lowercase(),
                phase,
                workstream,
                signal,
                title: remediation_hint(signal).to_string(),
                gap_count: members.len(),
                asset_count: asset_ids.len(),
                effort: EffortBucket::from_asset_count(asset_ids.len()),
                gap_ids: members.iter().map(|g| g.id.clone()).collect(),
                asset_ids,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaps::{gap_id, GapType};

    fn gap(signal: Signal, severity: SignalSeverity, asset: &str) -> Gap {
        Gap {
            id: gap_id(GapType::Missing, signal, asset),
            gap_type: GapType::Missing,
            signal,
            subject_id: asset.to_string(),
            severity,
            workstream: signal.workstream(),
            explanation: String::new(),
            evidence_refs: Vec::new(),
        }
    }

    #[test]
    fn test_effort_buckets() {
        assert_eq!(EffortBucket::from_asset_count(4), EffortBucket::S);
        assert_eq!(EffortBucket::from_asset_count(5), EffortBucket::M);
        assert_eq!(EffortBucket::from_asset_count(20), EffortBucket::M);
        assert_eq!(EffortBucket::from_asset_count(21), EffortBucket::L);
    }

    #[test]
    fn test_mvp_cap_drops_large_non_core_workstream() {
        let mut gaps: Vec<Gap> = (0..25)
            .map(|i| gap(Signal::Lineage, SignalSeverity::High, &format!("t{i}")))
            .collect();
        gaps.extend((0..3).map(|i| gap(Signal::Ownership, SignalSeverity::High, &format!("o{i}"))));

        let plan = build_plan(&gaps);
        let mvp = plan.phase(PlanPhase::Mvp).unwrap();
        assert!(mvp.actions().any(|a| a.signal == Signal::Ownership));
        assert!(!plan.actions().any(|a| a.signal == Signal::Lineage));
        assert_eq!(plan.deferred.len(), 1);
        assert_eq!(plan.deferred[0].signal, Signal::Lineage);
        assert_eq!(plan.deferred[0].effort, EffortBucket::L);
        assert_eq!(plan.total_gaps, 28);
    }

    #[test]
    fn test_core_workstreams_bypass_cap() {
        let gaps: Vec<Gap> = (0..30)
            .map(|i| gap(Signal::Semantics, SignalSeverity::High, &format!("a{i}")))
            .collect();
        let plan = build_plan(&gaps);
        assert_eq!(plan.phase(PlanPhase::Mvp).unwrap().actions().count(), 1);
        assert!(plan.deferred.is_empty());
    }

    #[test]
    fn test_hardening_puts_quality_freshness_first() {
        let gaps = vec![
            gap(Signal::Ownership, SignalSeverity::Low, "a"),
            gap(Signal::Usage, SignalSeverity::Low, "a"),
        ];
        let plan = build_plan(&gaps);
        let hardening = plan.phase(PlanPhase::Hardening).unwrap();
        assert_eq!(hardening.workstreams[0].workstream, Workstream::QualityFreshness);
        assert_eq!(hardening.workstreams[1].workstream, Workstream::Ownership);
    }

    #[test]
    fn test_actions_group_by_signal_in_first_seen_order() {
        let gaps = vec![
            gap(Signal::Access, SignalSeverity::Med, "a"),
            gap(Signal::Sensitivity, SignalSeverity::Med, "a"),
            gap(Signal::Access, SignalSeverity::Med, "b"),
            gap(Signal::Access, SignalSeverity::Med, "b"),
        ];
        let plan = build_plan(&gaps);
        let expanded = plan.phase(PlanPhase::Expanded).unwrap();
        let actions: Vec<&RemediationAction> = expanded.actions().collect();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].signal, Signal::Access);
        assert_eq!(actions[0].gap_count, 3);
        assert_eq!(actions[0].asset_count, 2);
        assert_eq!(actions[0].id, "action-expanded-access");
        assert_eq!(actions[1].signal, Signal::Sensitivity);
    }

    #[test]
    fn test_large_workstream_keeps_first_seen_asset_order() {
        let gaps: Vec<Gap> = (0..20_000)
            .map(|i| gap(Signal::Ownership, SignalSeverity::High, &format!("t{}", i % 10_000)))
            .collect();
        let plan = build_plan(&gaps);
        let action = plan.phase(PlanPhase::Mvp).unwrap().actions().next().unwrap();
        assert_eq!(action.gap_count, 20_000);
        assert_eq!(action.asset_count, 10_000);
        assert_eq!(action.asset_ids[0], "t0");
        assert_eq!(action.asset_ids[9_999], "t9999");
    }

    #[test]
    fn test_empty_gaps_yield_three_empty_phases() {
        let plan = build_plan(&[]);
        assert_eq!(plan.phases.len(), 3);
        assert_eq!(plan.total_actions(), 0);
    }
}
