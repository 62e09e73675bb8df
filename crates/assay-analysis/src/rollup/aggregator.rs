//! Flat rollups: one node per dimension value.

use std::collections::BTreeMap;

use assay_core::types::{Signal, TriState};

use super::types::{RollupDimension, RollupNode, SignalAggregationResult, UseCaseAggregation};
use crate::gaps::GapFrequency;
use crate::pipeline::AssetAssessment;
use crate::quality::{DimensionScores, LineageRollup};
use crate::use_cases::ReadinessLevel;

/// Use-case gap frequencies kept per aggregation.
pub const USE_CASE_TOP_GAPS: usize = 5;

/// Aggregate every canonical signal over a group. Rates divide by the
/// group size; an empty group yields zeroes.
pub fn aggregate_signals(assets: &[&AssetAssessment]) -> BTreeMap<Signal, SignalAggregationResult> {
    let size = assets.len();
    Signal::all()
        .iter()
        .map(|&signal| {
            let mut agg = SignalAggregationResult::default();
            let mut score_sum = 0.0;
            for assessment in assets {
                let presence = assessment.signals.presence(signal);
                match presence {
                    TriState::True => agg.present_count += 1,
                    TriState::False => agg.absent_count += 1,
                    TriState::Unknown => agg.unknown_count += 1,
                }
                let score = assessment.signals.score(signal);
                score_sum += score;
                agg.distribution.record(score);
            }
            if size > 0 {
                agg.presence_rate = agg.present_count as f64 / size as f64;
                agg.average_score = score_sum / size as f64;
            }
            (signal, agg)
        })
        .collect()
}

/// Aggregate use-case results over a group, keyed by use-case id.
pub fn aggregate_use_cases(assets: &[&AssetAssessment]) -> BTreeMap<String, UseCaseAggregation> {
    let size = assets.len();
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    let mut gap_counts: BTreeMap<String, BTreeMap<Signal, usize>> = BTreeMap::new();
    let mut aggregations: BTreeMap<String, UseCaseAggregation> = BTreeMap::new();

    for assessment in assets {
        for result in &assessment.use_cases {
            let agg = aggregations.entry(result.use_case_id.clone()).or_default();
            match result.readiness_level {
                ReadinessLevel::Excellent | ReadinessLevel::Ready => agg.ready += 1,
                ReadinessLevel::Partial => agg.partial += 1,
                ReadinessLevel::NotReady => agg.not_ready += 1,
            }
            *sums.entry(result.use_case_id.clone()).or_insert(0.0) += result.readiness_score;
            let counts = gap_counts.entry(result.use_case_id.clone()).or_default();
            for gap in &result.gaps {
                *counts.entry(gap.signal).or_insert(0) += 1;
            }
        }
    }

    for (id, agg) in aggregations.iter_mut() {
        if size > 0 {
            agg.average_readiness = sums.get(id).copied().unwrap_or(0.0) / size as f64;
        }
        let mut ranked: Vec<GapFrequency> = gap_counts
            .remove(id)
            .unwrap_or_default()
            .into_iter()
            .map(|(signal, count)| GapFrequency { signal, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.signal.cmp(&b.signal)));
        ranked.truncate(USE_CASE_TOP_GAPS);
        agg.top_gaps = ranked;
    }
    aggregations
}

/// Build the node for one group, without children.
pub fn aggregate_group(dimension: RollupDimension, value: &str, assets: &[&AssetAssessment]) -> RollupNode {
    let signals = aggregate_signals(assets);
    let completeness_score = if assets.is_empty() || signals.is_empty() {
        0.0
    } else {
        signals.values().map(|s| s.average_score).sum::<f64>() / signals.len() as f64
    };
    RollupNode {
        dimension,
        dimension_value: value.to_string(),
        asset_count: assets.len(),
        signals,
        use_cases: aggregate_use_cases(assets),
        completeness_score,
        quality: DimensionScores::mean(assets.iter().map(|a| &a.quality)),
        lineage: LineageRollup::from_metrics(assets.iter().map(|a| &a.lineage)),
        children: Vec::new(),
    }
}

/// Group by one dimension. Nodes sort by asset count descending, then by
/// value.
pub fn rollup_by_dimension(assets: &[AssetAssessment], dimension: RollupDimension) -> Vec<RollupNode> {
    let mut groups: BTreeMap<&str, Vec<&AssetAssessment>> = BTreeMap::new();
    for assessment in assets {
        groups
            .entry(assessment.asset.dimension_value(dimension))
            .or_default()
            .push(assessment);
    }
    let mut nodes: Vec<RollupNode> = groups
        .into_iter()
        .map(|(value, members)| aggregate_group(dimension, value, &members))
        .collect();
    sort_nodes(&mut nodes);
    tracing::debug!(dimension = %dimension, groups = nodes.len(), "rollup complete");
    nodes
}

pub(crate) fn sort_nodes(nodes: &mut [RollupNode]) {
    nodes.sort_by(|a, b| {
        b.asset_count
            .cmp(&a.asset_count)
            .then_with(|| a.dimension_value.cmp(&b.dimension_value))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assessment;

    #[test]
    fn test_empty_group_is_all_zero() {
        let node = aggregate_group(RollupDimension::Owner, "nobody", &[]);
        assert_eq!(node.asset_count, 0);
        assert_eq!(node.completeness_score, 0.0);
        assert_eq!(node.signals.len(), Signal::all().len());
        for agg in node.signals.values() {
            assert_eq!(agg.presence_rate, 0.0);
            assert_eq!(agg.average_score, 0.0);
            assert!(!agg.presence_rate.is_nan());
        }
        assert!(node.use_cases.is_empty());
        assert_eq!(node.quality, DimensionScores::default());
        assert_eq!(node.lineage, LineageRollup::default());
    }

    #[test]
    fn test_group_quality_and_lineage_average_over_members() {
        let mut a = assessment("a", "conn-1", &[]);
        a.quality = DimensionScores::weighted([100.0; 5], &Default::default());
        a.lineage = crate::quality::LineageMetrics {
            has_upstream: true,
            has_lineage: true,
            upstream_count: 3,
            ..Default::default()
        };
        let mut b = assessment("b", "conn-1", &[]);
        b.lineage.orphaned = true;

        let nodes = rollup_by_dimension(&[a, b], RollupDimension::Connection);
        assert_eq!(nodes[0].quality.completeness, 50.0);
        assert!((nodes[0].quality.overall - 50.0).abs() < 1e-9);
        assert_eq!(nodes[0].lineage.total_assets, 2);
        assert_eq!(nodes[0].lineage.pct_has_upstream, 50.0);
        assert_eq!(nodes[0].lineage.pct_orphaned, 50.0);
    }

    #[test]
    fn test_rates_divide_by_group_size() {
        let a = assessment("a", "conn-1", &[(Signal::Ownership, TriState::True, 1.0)]);
        let b = assessment("b", "conn-1", &[(Signal::Ownership, TriState::Unknown, 0.0)]);
        let nodes = rollup_by_dimension(&[a, b], RollupDimension::Connection);
        assert_eq!(nodes.len(), 1);
        let ownership = &nodes[0].signals[&Signal::Ownership];
        assert_eq!(ownership.present_count, 1);
        assert_eq!(ownership.unknown_count, 1);
        assert_eq!(ownership.presence_rate, 0.5);
        assert_eq!(ownership.average_score, 0.5);
        assert_eq!(ownership.distribution.high, 1);
        assert_eq!(ownership.distribution.low, 1);
    }

    #[test]
    fn test_nodes_sorted_by_count_then_value() {
        let assets = vec![
            assessment("a", "zeta", &[]),
            assessment("b", "alpha", &[]),
            assessment("c", "zeta", &[]),
            assessment("d", "beta", &[]),
        ];
        let nodes = rollup_by_dimension(&assets, RollupDimension::Connection);
        let order: Vec<&str> = nodes.iter().map(|n| n.dimension_value.as_str()).collect();
        assert_eq!(order, vec!["zeta", "alpha", "beta"]);
        assert_eq!(nodes[0].asset_count, 2);
    }
}
