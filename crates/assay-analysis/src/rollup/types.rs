//! Rollup data model.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use assay_core::types::{AssetRecord, Signal};

use crate::gaps::GapFrequency;
use crate::quality::{DimensionScores, LineageRollup};

/// Grouping dimension for a rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupDimension {
    Connection,
    Database,
    Schema,
    Domain,
    Owner,
    Certification,
    AssetType,
    Classification,
}

impl RollupDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Database => "database",
            Self::Schema => "schema",
            Self::Domain => "domain",
            Self::Owner => "owner",
            Self::Certification => "certification",
            Self::AssetType => "asset_type",
            Self::Classification => "classification",
        }
    }

    pub fn all() -> &'static [RollupDimension] {
        &[
            Self::Connection,
            Self::Database,
            Self::Schema,
            Self::Domain,
            Self::Owner,
            Self::Certification,
            Self::AssetType,
            Self::Classification,
        ]
    }
}

impl fmt::Display for RollupDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollupDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| format!("unknown rollup dimension '{s}'"))
    }
}

pub const UNKNOWN_VALUE: &str = "Unknown";
pub const UNOWNED_VALUE: &str = "Unowned";
pub const UNASSIGNED_VALUE: &str = "Unassigned";
pub const UNCERTIFIED_VALUE: &str = "NONE";

/// The dimension values of one asset, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub guid: String,
    pub name: String,
    pub type_name: String,
    pub qualified_name: String,
    pub connection: String,
    pub database: String,
    pub schema: String,
    pub domain: String,
    pub owner: String,
    pub certification: String,
    pub classification: String,
}

impl AssetSummary {
    /// Multi-valued attributes contribute their first value.
    pub fn from_record(asset: &AssetRecord) -> Self {
        let path = asset.hierarchy_path();
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN_VALUE.to_string());
        Self {
            guid: asset.guid.clone(),
            name: asset.name().to_string(),
            type_name: asset.type_name.clone(),
            qualified_name: asset.qualified_name.clone(),
            connection: or_unknown(path.connection),
            database: or_unknown(path.database),
            schema: or_unknown(path.schema),
            domain: asset
                .first_string("domainGUIDs")
                .unwrap_or(UNASSIGNED_VALUE)
                .to_string(),
            owner: asset
                .first_string("ownerUsers")
                .or_else(|| asset.first_string("ownerGroups"))
                .unwrap_or(UNOWNED_VALUE)
                .to_string(),
            certification: asset
                .first_string("certificateStatus")
                .map(str::to_ascii_uppercase)
                .unwrap_or_else(|| UNCERTIFIED_VALUE.to_string()),
            classification: asset
                .classifications()
                .iter()
                .find(|c| !c.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        }
    }

    pub fn dimension_value(&self, dimension: RollupDimension) -> &str {
        match dimension {
            RollupDimension::Connection => &self.connection,
            RollupDimension::Database => &self.database,
            RollupDimension::Schema => &self.schema,
            RollupDimension::Domain => &self.domain,
            RollupDimension::Owner => &self.owner,
            RollupDimension::Certification => &self.certification,
            RollupDimension::AssetType => &self.type_name,
            RollupDimension::Classification => &self.classification,
        }
    }
}

/// Signal scores in four quarter-width buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    /// [0, 0.25)
    pub low: usize,
    /// [0.25, 0.5)
    pub fair: usize,
    /// [0.5, 0.75)
    pub good: usize,
    /// [0.75, 1]
    pub high: usize,
}

impl ScoreDistribution {
    pub fn record(&mut self, score: f64) {
        if score >= 0.75 {
            self.high += 1;
        } else if score >= 0.5 {
            self.good += 1;
        } else if score >= 0.25 {
            self.fair += 1;
        } else {
            self.low += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.fair + self.good + self.high
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalAggregationResult {
    pub present_count: usize,
    pub absent_count: usize,
    pub unknown_count: usize,
    /// present_count / group size.
    pub presence_rate: f64,
    /// Sum of scores / group size.
    pub average_score: f64,
    pub distribution: ScoreDistribution,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseAggregation {
    /// READY and EXCELLENT assets.
    pub ready: usize,
    pub partial: usize,
    pub not_ready: usize,
    pub average_readiness: f64,
    pub top_gaps: Vec<GapFrequency>,
}

/// One group of a rollup. Children are present only in hierarchical trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupNode {
    pub dimension: RollupDimension,
    pub dimension_value: String,
    pub asset_count: usize,
    pub signals: BTreeMap<Signal, SignalAggregationResult>,
    pub use_cases: BTreeMap<String, UseCaseAggregation>,
    /// Mean of the per-signal average scores.
    pub completeness_score: f64,
    /// Mean per-asset dimension scores.
    #[serde(default)]
    pub quality: DimensionScores,
    #[serde(default)]
    pub lineage: LineageRollup,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RollupNode>,
}

impl RollupNode {
    /// Nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RollupNode::node_count).sum::<usize>()
    }

    pub fn child(&self, value: &str) -> Option<&RollupNode> {
        self.children.iter().find(|c| c.dimension_value == value)
    }
}
