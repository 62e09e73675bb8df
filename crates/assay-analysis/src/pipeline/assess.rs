//! Per-asset evaluation: fields → signals → use cases → gaps.

use assay_core::config::DimensionWeights;
use assay_core::errors::EvaluationError;
use assay_core::types::{AssetRecord, FieldDefinition};

use crate::catalog::{CapabilityRequirements, Catalog, UseCaseProfile};
use crate::evaluation::FieldEvaluator;
use crate::gaps::detect_gaps;
use crate::quality::{lineage_metrics, score_dimensions, timeliness_score};
use crate::rollup::AssetSummary;
use crate::signals::compose_signals;
use crate::use_cases::{assess_use_case, UseCaseResult};

use super::types::AssetAssessment;

/// Everything `assess_asset` needs that does not change between assets.
/// Built once per run and shared read-only across worker threads.
pub struct AssessmentContext<'a> {
    catalog: &'a Catalog,
    evaluator: FieldEvaluator,
    profiles: Vec<(String, Option<&'a UseCaseProfile>)>,
    requirements: CapabilityRequirements,
    as_of_ms: i64,
    timeliness_bands: [u32; 4],
    dimension_weights: DimensionWeights,
}

impl<'a> AssessmentContext<'a> {
    /// Unknown use-case ids are kept and produce zero-valued results.
    pub fn new(catalog: &'a Catalog, use_case_ids: &[String], as_of_ms: i64) -> Self {
        let profiles = use_case_ids
            .iter()
            .map(|id| {
                let profile = catalog.use_case(id);
                if profile.is_none() {
                    tracing::warn!(use_case = %id, "unknown use case; results will be empty");
                }
                (id.clone(), profile)
            })
            .collect();
        Self {
            catalog,
            evaluator: FieldEvaluator::new(catalog.fields()),
            profiles,
            requirements: catalog.requirements_for(use_case_ids),
            as_of_ms,
            timeliness_bands: assay_core::constants::DEFAULT_TIMELINESS_BANDS,
            dimension_weights: DimensionWeights::default(),
        }
    }

    pub fn with_timeliness_bands(mut self, bands: [u32; 4]) -> Self {
        self.timeliness_bands = bands;
        self
    }

    pub fn with_dimension_weights(mut self, weights: DimensionWeights) -> Self {
        self.dimension_weights = weights;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn requirements(&self) -> &CapabilityRequirements {
        &self.requirements
    }

    pub fn use_case_ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(id, _)| id.as_str())
    }
}

/// Assess one asset. Only a record without identity fails; field-level
/// problems degrade to UNKNOWN.
pub fn assess_asset(
    context: &AssessmentContext<'_>,
    asset: &AssetRecord,
) -> Result<AssetAssessment, EvaluationError> {
    if asset.guid.trim().is_empty() {
        return Err(EvaluationError::InvalidAsset {
            guid: asset.qualified_name.clone(),
            reason: "missing guid".to_string(),
        });
    }
    if asset.type_name.trim().is_empty() {
        return Err(EvaluationError::InvalidAsset {
            guid: asset.guid.clone(),
            reason: "missing type name".to_string(),
        });
    }

    let fields: Vec<&FieldDefinition> = context.catalog.fields_for_type(&asset.type_name).collect();
    let field_results = context.evaluator.evaluate_all(fields.iter().copied(), asset);
    let signals = compose_signals(context.catalog, &fields, &field_results);

    let use_cases: Vec<UseCaseResult> = context
        .profiles
        .iter()
        .map(|(id, profile)| match profile {
            Some(profile) => assess_use_case(profile, &signals),
            None => UseCaseResult::empty(id),
        })
        .collect();

    let gaps = detect_gaps(&context.requirements, &signals, &asset.guid);
    let timeliness = timeliness_score(asset, context.as_of_ms, context.timeliness_bands);

    Ok(AssetAssessment {
        asset: AssetSummary::from_record(asset),
        field_results,
        signals,
        use_cases,
        gaps,
        timeliness,
        quality: score_dimensions(asset, timeliness, &context.dimension_weights),
        lineage: lineage_metrics(asset),
    })
}
