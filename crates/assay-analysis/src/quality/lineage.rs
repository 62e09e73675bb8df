//! Upstream/downstream lineage flags per asset and their group rates.

use serde::{Deserialize, Serialize};

use assay_core::types::AssetRecord;

use super::dimensions::count_of;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageMetrics {
    pub has_upstream: bool,
    pub has_downstream: bool,
    pub has_lineage: bool,
    /// Both directions.
    pub full_lineage: bool,
    /// Neither direction.
    pub orphaned: bool,
    pub upstream_count: u64,
    pub downstream_count: u64,
}

/// Read `upstreamCount` and `downstreamCount`. A missing or non-numeric
/// count is zero.
pub fn lineage_metrics(asset: &AssetRecord) -> LineageMetrics {
    let upstream_count = count_of(asset, "upstreamCount").max(0.0) as u64;
    let downstream_count = count_of(asset, "downstreamCount").max(0.0) as u64;
    let has_upstream = upstream_count > 0;
    let has_downstream = downstream_count > 0;
    LineageMetrics {
        has_upstream,
        has_downstream,
        has_lineage: has_upstream || has_downstream,
        full_lineage: has_upstream && has_downstream,
        orphaned: !has_upstream && !has_downstream,
        upstream_count,
        downstream_count,
    }
}

/// Percentages (0-100) over a group of assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageRollup {
    pub total_assets: usize,
    pub pct_has_upstream: f64,
    pub pct_has_downstream: f64,
    pub pct_with_lineage: f64,
    pub pct_full_lineage: f64,
    pub pct_orphaned: f64,
}

impl LineageRollup {
    pub fn from_metrics<'a>(metrics: impl IntoIterator<Item = &'a LineageMetrics>) -> Self {
        let mut counts = [0usize; 5];
        let mut total = 0usize;
        for m in metrics {
            total += 1;
            for (count, flag) in counts.iter_mut().zip([
                m.has_upstream,
                m.has_downstream,
                m.has_lineage,
                m.full_lineage,
                m.orphaned,
            ]) {
                *count += usize::from(flag);
            }
        }
        let pct = |n: usize| {
            if total == 0 {
                0.0
            } else {
                n as f64 * 100.0 / total as f64
            }
        };
        let [upstream, downstream, with_lineage, full, orphaned] = counts;
        Self {
            total_assets: total,
            pct_has_upstream: pct(upstream),
            pct_has_downstream: pct(downstream),
            pct_with_lineage: pct(with_lineage),
            pct_full_lineage: pct(full),
            pct_orphaned: pct(orphaned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_counts(upstream: i64, downstream: i64) -> AssetRecord {
        AssetRecord::new("g", "Table", "q")
            .with_attribute("upstreamCount", upstream)
            .with_attribute("downstreamCount", downstream)
    }

    #[test]
    fn test_flags() {
        let full = lineage_metrics(&with_counts(2, 3));
        assert!(full.full_lineage && full.has_lineage && !full.orphaned);
        assert_eq!((full.upstream_count, full.downstream_count), (2, 3));

        let source = lineage_metrics(&with_counts(0, 1));
        assert!(!source.has_upstream && source.has_downstream && !source.full_lineage);

        let orphan = lineage_metrics(&AssetRecord::new("g", "Table", "q"));
        assert!(orphan.orphaned && !orphan.has_lineage);
    }

    #[test]
    fn test_array_and_malformed_counts() {
        let asset = AssetRecord::new("g", "Table", "q")
            .with_attribute("upstreamCount", json!(["a", "b"]))
            .with_attribute("downstreamCount", json!({"x": 1}));
        let metrics = lineage_metrics(&asset);
        assert_eq!(metrics.upstream_count, 2);
        assert!(!metrics.has_downstream);
    }

    #[test]
    fn test_rollup_percentages() {
        let metrics = [
            lineage_metrics(&with_counts(1, 1)),
            lineage_metrics(&with_counts(1, 0)),
            lineage_metrics(&with_counts(0, 0)),
            lineage_metrics(&with_counts(0, 0)),
        ];
        let rollup = LineageRollup::from_metrics(&metrics);
        assert_eq!(rollup.total_assets, 4);
        assert_eq!(rollup.pct_has_upstream, 50.0);
        assert_eq!(rollup.pct_has_downstream, 25.0);
        assert_eq!(rollup.pct_with_lineage, 50.0);
        assert_eq!(rollup.pct_full_lineage, 25.0);
        assert_eq!(rollup.pct_orphaned, 50.0);
    }

    #[test]
    fn test_empty_rollup_is_zero() {
        assert_eq!(LineageRollup::from_metrics(std::iter::empty()), LineageRollup::default());
    }
}
