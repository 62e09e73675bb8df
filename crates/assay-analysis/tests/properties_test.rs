//! Property tests for aggregation, gap ids, rollups and readiness.

use proptest::prelude::*;

use assay_analysis::catalog::{ReadinessThresholds, SignalDefinition};
use assay_analysis::gaps::{compute_gap_summary, gap_id, GapType};
use assay_analysis::rollup::{aggregate_group, RollupDimension};
use assay_analysis::signals::{compose_signal, SignalContributor};
use assay_analysis::use_cases::readiness_level;
use assay_core::types::{AggregationRule, Signal, TriState};

fn definition(aggregation: AggregationRule) -> SignalDefinition {
    SignalDefinition {
        signal: Signal::Semantics,
        aggregation,
        severity: Signal::Semantics.default_severity(),
        workstream: Signal::Semantics.workstream(),
        description: String::new(),
    }
}

fn tristate() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::True), Just(TriState::False), Just(TriState::Unknown)]
}

fn contributors(states: &[(TriState, f64)]) -> Vec<SignalContributor> {
    states
        .iter()
        .enumerate()
        .map(|(i, &(present, weight))| SignalContributor {
            field_id: format!("f{i}"),
            present,
            weight,
            required: false,
        })
        .collect()
}

proptest! {
    #[test]
    fn any_with_one_true_is_present(
        mut states in prop::collection::vec((tristate(), 0.1f64..1.0), 0..8),
        weight in 0.1f64..1.0,
        position in 0usize..8,
    ) {
        let at = position.min(states.len());
        states.insert(at, (TriState::True, weight));
        let result = compose_signal(&definition(AggregationRule::Any), contributors(&states));
        prop_assert_eq!(result.present, TriState::True);
        prop_assert!(result.score > 0.0);
    }

    #[test]
    fn all_with_one_false_is_absent(
        mut states in prop::collection::vec((tristate(), 0.1f64..1.0), 0..8),
        position in 0usize..8,
    ) {
        let at = position.min(states.len());
        states.insert(at, (TriState::False, 0.5));
        let result = compose_signal(&definition(AggregationRule::All), contributors(&states));
        prop_assert_eq!(result.present, TriState::False);
        prop_assert!(result.score < 1.0);
    }

    #[test]
    fn weighted_threshold_all_true_is_full(
        weights in prop::collection::vec(0.01f64..2.0, 1..8),
        threshold in 0.0f64..=1.0,
    ) {
        let states: Vec<(TriState, f64)> = weights.iter().map(|w| (TriState::True, *w)).collect();
        let result = compose_signal(
            &definition(AggregationRule::WeightedThreshold { threshold }),
            contributors(&states),
        );
        prop_assert!((result.score - 1.0).abs() < 1e-9);
        prop_assert_eq!(result.present, TriState::True);
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn confidence_is_known_share(states in prop::collection::vec((tristate(), 0.1f64..1.0), 1..10)) {
        let known = states.iter().filter(|(s, _)| s.is_known()).count();
        let result = compose_signal(&definition(AggregationRule::Any), contributors(&states));
        prop_assert!((result.confidence - known as f64 / states.len() as f64).abs() < 1e-12);
    }

    #[test]
    fn gap_id_is_pure(subject in "[A-Za-z0-9_-]{1,24}", signal_index in 0usize..10) {
        let signal = Signal::all()[signal_index];
        for gap_type in GapType::all() {
            let first = gap_id(*gap_type, signal, &subject);
            prop_assert_eq!(&first, &gap_id(*gap_type, signal, &subject));
            prop_assert_eq!(first.clone(), first.to_lowercase());
            prop_assert!(first.starts_with("gap-"));
        }
    }

    #[test]
    fn readiness_is_monotonic_in_score(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        total in 0usize..4,
        met_seed in 0usize..4,
    ) {
        let met = met_seed.min(total);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let thresholds = ReadinessThresholds::default();
        prop_assert!(
            readiness_level(low, met, total, &thresholds) <= readiness_level(high, met, total, &thresholds)
        );
    }
}

#[test]
fn empty_gap_summary_has_every_key() {
    let summary = compute_gap_summary(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.by_type.len(), 3);
    assert_eq!(summary.by_severity.len(), 3);
    assert_eq!(summary.by_workstream.len(), 5);
    assert_eq!(summary.by_signal.len(), 10);
    assert_eq!(summary.by_phase.len(), 3);
    assert_eq!(summary.by_effort.len(), 3);
    assert!(summary.by_signal.values().all(|v| *v == 0));
}

#[test]
fn empty_rollup_group_is_zero_not_nan() {
    for dimension in RollupDimension::all() {
        let node = aggregate_group(*dimension, "empty", &[]);
        for aggregation in node.signals.values() {
            assert_eq!(aggregation.presence_rate, 0.0);
            assert_eq!(aggregation.average_score, 0.0);
        }
        assert_eq!(node.completeness_score, 0.0);
    }
}
