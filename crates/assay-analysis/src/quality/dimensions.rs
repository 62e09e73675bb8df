//! Per-asset quality across five dimensions: completeness, accuracy,
//! timeliness, consistency and usability, each 0-100.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use assay_core::config::DimensionWeights;
use assay_core::types::AssetRecord;

use super::lineage::lineage_metrics;
use crate::evaluation::is_present;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub completeness: f64,
    pub accuracy: f64,
    pub timeliness: f64,
    pub consistency: f64,
    pub usability: f64,
    /// Weighted mean of the five dimensions.
    pub overall: f64,
}

impl DimensionScores {
    /// Dimensions in weight order; `overall` is the weighted mean.
    pub fn weighted(dimensions: [f64; 5], weights: &DimensionWeights) -> Self {
        let total = weights.total();
        let overall = if total > 0.0 {
            dimensions
                .iter()
                .zip(weights.as_array())
                .map(|(d, w)| d * w)
                .sum::<f64>()
                / total
        } else {
            0.0
        };
        let [completeness, accuracy, timeliness, consistency, usability] = dimensions;
        Self {
            completeness,
            accuracy,
            timeliness,
            consistency,
            usability,
            overall,
        }
    }

    /// Field-wise mean. Zero for no input.
    pub fn mean<'a>(scores: impl IntoIterator<Item = &'a DimensionScores>) -> Self {
        let mut sum = DimensionScores::default();
        let mut count = 0usize;
        for s in scores {
            sum.completeness += s.completeness;
            sum.accuracy += s.accuracy;
            sum.timeliness += s.timeliness;
            sum.consistency += s.consistency;
            sum.usability += s.usability;
            sum.overall += s.overall;
            count += 1;
        }
        if count == 0 {
            return sum;
        }
        let n = count as f64;
        Self {
            completeness: sum.completeness / n,
            accuracy: sum.accuracy / n,
            timeliness: sum.timeliness / n,
            consistency: sum.consistency / n,
            usability: sum.usability / n,
            overall: sum.overall / n,
        }
    }
}

/// Score one asset. `timeliness` is the banded timeliness score; an asset
/// without an update timestamp scores 0 on that dimension.
pub fn score_dimensions(
    asset: &AssetRecord,
    timeliness: Option<f64>,
    weights: &DimensionWeights,
) -> DimensionScores {
    let has_description = has_any(asset, &["userDescription", "description"]);
    let has_owner = has_any(asset, &["ownerUsers", "ownerGroups"]);
    let has_certificate = has_any(asset, &["certificateStatus"]);
    let has_tags = !asset.classifications().is_empty() || has_any(asset, &["assetTags"]);
    let has_terms = count_of(asset, "meaningsCount") > 0.0 || has_any(asset, &["meanings"]);
    let has_lineage = matches!(asset.attribute("__hasLineage"), Some(Value::Bool(true)))
        || lineage_metrics(asset).has_lineage;

    let completeness = share(&[
        has_description,
        has_owner,
        has_certificate,
        has_tags,
        has_terms,
        has_any(asset, &["readme"]),
        has_any(asset, &["domainGUIDs", "dataDomain"]),
        has_lineage,
    ]);

    let accuracy = share(&[
        valid_name(asset.name()),
        has_owner,
        has_certificate,
        has_tags,
        !matches!(asset.attribute("isAIGenerated"), Some(Value::Bool(true))),
    ]);

    let path_depth = asset
        .qualified_name
        .split('/')
        .filter(|s| !s.is_empty())
        .count();
    let consistency = share(&[
        has_terms,
        has_tags,
        path_depth >= 2,
        asset.hierarchy_path().connection.is_some(),
    ]);

    let usability = share(&[
        count_of(asset, "popularityScore") > 0.0,
        count_of(asset, "sourceReadCount") > 0.0,
        !matches!(asset.attribute("isDiscoverable"), Some(Value::Bool(false))),
    ]);

    DimensionScores::weighted(
        [
            completeness,
            accuracy,
            timeliness.unwrap_or(0.0),
            consistency,
            usability,
        ],
        weights,
    )
}

fn has_any(asset: &AssetRecord, attributes: &[&str]) -> bool {
    attributes
        .iter()
        .any(|a| asset.attribute(a).is_some_and(is_present))
}

/// Numeric attribute; arrays count their items. Anything else is 0.
pub(crate) fn count_of(asset: &AssetRecord, attribute: &str) -> f64 {
    match asset.attribute(attribute) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Array(items)) => items.len() as f64,
        _ => 0.0,
    }
}

fn share(checks: &[bool]) -> f64 {
    if checks.is_empty() {
        return 0.0;
    }
    checks.iter().filter(|c| **c).count() as f64 * 100.0 / checks.len() as f64
}

/// Word characters, dashes and dots only.
fn valid_name(name: &str) -> bool {
    static NAME: OnceLock<Option<Regex>> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^[\w\-.]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}
