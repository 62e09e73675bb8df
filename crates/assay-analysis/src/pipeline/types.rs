//! Request, result and per-asset assessment types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use assay_core::config::ErrorPolicy;
use assay_core::types::{AssessmentScope, Signal, TenantConfiguration};

use crate::evaluation::FieldResult;
use crate::explain::Explanation;
use crate::gaps::{Gap, GapFrequency, GapSummary};
use crate::methodology::{Grade, Methodology, MethodologyScore};
use crate::plan::RemediationPlan;
use crate::quality::{DimensionScores, LineageMetrics, LineageRollup, QualityBand};
use crate::rollup::{AdoptionPhase, AssetSummary, RollupDimension, RollupNode};
use crate::signals::SignalSet;
use crate::use_cases::UseCaseResult;

/// Everything computed for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAssessment {
    pub asset: AssetSummary,
    pub field_results: Vec<FieldResult>,
    pub signals: SignalSet,
    pub use_cases: Vec<UseCaseResult>,
    pub gaps: Vec<Gap>,
    /// 0-100, `None` without an update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeliness: Option<f64>,
    /// Weighted five-dimension quality score.
    #[serde(default)]
    pub quality: DimensionScores,
    #[serde(default)]
    pub lineage: LineageMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    #[serde(default)]
    pub scope: AssessmentScope,
    #[serde(default)]
    pub tenant: TenantConfiguration,
    /// Use-case subset. `None` assesses every catalog use case.
    #[serde(default)]
    pub use_cases: Option<Vec<String>>,
    /// Rollup dimensions. Empty falls back to configuration.
    #[serde(default)]
    pub dimensions: Vec<RollupDimension>,
    #[serde(default)]
    pub methodology: Option<Methodology>,
    /// Include per-asset detail in the result.
    #[serde(default)]
    pub include_evidence: bool,
    #[serde(default)]
    pub include_recommendations: bool,
    /// Reference time for timeliness, epoch ms. Defaults to now.
    #[serde(default)]
    pub as_of_ms: Option<i64>,
    /// Dimension weight profile. Falls back to `dimensions.profile`.
    #[serde(default)]
    pub quality_profile: Option<String>,
}

impl AssessmentRequest {
    pub fn new(scope: AssessmentScope, tenant: TenantConfiguration) -> Self {
        Self {
            scope,
            tenant,
            ..Default::default()
        }
    }

    pub fn with_use_cases(mut self, ids: &[&str]) -> Self {
        self.use_cases = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_dimensions(mut self, dimensions: &[RollupDimension]) -> Self {
        self.dimensions = dimensions.to_vec();
        self
    }

    pub fn with_methodology(mut self, methodology: Methodology) -> Self {
        self.methodology = Some(methodology);
        self
    }

    pub fn with_evidence(mut self) -> Self {
        self.include_evidence = true;
        self
    }

    pub fn with_recommendations(mut self) -> Self {
        self.include_recommendations = true;
        self
    }

    pub fn as_of(mut self, epoch_ms: i64) -> Self {
        self.as_of_ms = Some(epoch_ms);
        self
    }

    pub fn with_quality_profile(mut self, profile: &str) -> Self {
        self.quality_profile = Some(profile.to_string());
        self
    }
}

/// An asset that failed under the `warn` policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFailure {
    pub guid: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub tenant_id: String,
    pub started_at_ms: i64,
    pub duration_ms: u64,
    pub methodology: Methodology,
    pub use_cases: Vec<String>,
    pub batch_size: usize,
    pub error_policy: ErrorPolicy,
    pub assets_fetched: usize,
    /// Succeeded plus failed. Never assume equal to `assets_succeeded`.
    pub assets_processed: usize,
    pub assets_succeeded: usize,
    pub assets_failed: usize,
    pub failures: Vec<AssetFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    /// 0-100, from the selected methodology.
    pub overall_score: f64,
    pub grade: Grade,
    pub quality_band: QualityBand,
    /// Presence rate per signal across succeeded assets.
    pub signal_coverage: BTreeMap<Signal, f64>,
    /// Mean signal score across succeeded assets.
    pub signal_scores: BTreeMap<Signal, f64>,
    /// Mean readiness per use case.
    pub use_case_readiness: BTreeMap<String, f64>,
    pub top_gaps: Vec<GapFrequency>,
    pub adoption_phase: AdoptionPhase,
    pub gap_summary: GapSummary,
    pub methodology: MethodologyScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_timeliness: Option<f64>,
    /// Mean per-asset dimension scores.
    pub asset_quality: DimensionScores,
    /// Band of the mean per-asset overall quality.
    pub asset_quality_band: QualityBand,
    pub lineage: LineageRollup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub plan: RemediationPlan,
    pub explanations: Vec<Explanation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub metadata: RunMetadata,
    pub summary: AssessmentSummary,
    pub rollups: BTreeMap<RollupDimension, Vec<RollupNode>>,
    /// Connection → database → schema tree; empty when disabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hierarchy: Vec<RollupNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetAssessment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

impl AssessmentResult {
    pub fn rollup(&self, dimension: RollupDimension) -> &[RollupNode] {
        self.rollups.get(&dimension).map_or(&[], Vec::as_slice)
    }
}
