//! Cross-asset summary: coverage, readiness, methodology score, gaps.

use std::collections::BTreeMap;

use assay_core::config::AssayConfig;
use assay_core::types::{FieldId, Signal, TriState};

use super::types::{AssessmentSummary, AssetAssessment};
use crate::catalog::Catalog;
use crate::gaps::{compute_gap_summary, top_gaps, Gap};
use crate::methodology::{self, Methodology, MethodologyInput};
use crate::quality::{DimensionScores, LineageRollup, QualityBand};
use crate::rollup::determine_adoption_phase;

/// Field coverage over the assets each field was evaluated on, and mean
/// signal scores over all assets. Empty input yields empty maps.
pub fn methodology_input(assets: &[AssetAssessment]) -> MethodologyInput {
    let mut field_counts: BTreeMap<FieldId, (usize, usize)> = BTreeMap::new();
    for assessment in assets {
        for result in &assessment.field_results {
            let (present, evaluated) = field_counts.entry(result.field_id.clone()).or_insert((0, 0));
            *evaluated += 1;
            if result.present == TriState::True {
                *present += 1;
            }
        }
    }
    let field_coverage = field_counts
        .into_iter()
        .map(|(id, (present, evaluated))| (id, ratio(present, evaluated)))
        .collect();

    let signal_scores = if assets.is_empty() {
        BTreeMap::new()
    } else {
        Signal::all()
            .iter()
            .map(|&signal| {
                let sum: f64 = assets.iter().map(|a| a.signals.score(signal)).sum();
                (signal, sum / assets.len() as f64)
            })
            .collect()
    };

    MethodologyInput {
        field_coverage,
        signal_scores,
        total_assets: assets.len(),
    }
}

pub fn summarize(
    catalog: &Catalog,
    config: &AssayConfig,
    assets: &[AssetAssessment],
    methodology: Methodology,
    use_case_id: Option<&str>,
) -> AssessmentSummary {
    let input = methodology_input(assets);
    let methodology_score = methodology::score(methodology, catalog, &input, use_case_id);

    let signal_coverage: BTreeMap<Signal, f64> = Signal::all()
        .iter()
        .map(|&signal| {
            let present = assets
                .iter()
                .filter(|a| a.signals.presence(signal).is_true())
                .count();
            (signal, ratio(present, assets.len()))
        })
        .collect();

    let mut readiness_sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for assessment in assets {
        for result in &assessment.use_cases {
            let (sum, count) = readiness_sums.entry(result.use_case_id.clone()).or_insert((0.0, 0));
            *sum += result.readiness_score;
            *count += 1;
        }
    }
    let use_case_readiness: BTreeMap<String, f64> = readiness_sums
        .into_iter()
        .map(|(id, (sum, count))| (id, if count > 0 { sum / count as f64 } else { 0.0 }))
        .collect();
    let average_readiness = if use_case_readiness.is_empty() {
        0.0
    } else {
        use_case_readiness.values().sum::<f64>() / use_case_readiness.len() as f64
    };

    let gaps: Vec<Gap> = assets.iter().flat_map(|a| a.gaps.iter().cloned()).collect();

    let timeliness: Vec<f64> = assets.iter().filter_map(|a| a.timeliness).collect();
    let average_timeliness =
        (!timeliness.is_empty()).then(|| timeliness.iter().sum::<f64>() / timeliness.len() as f64);

    let asset_quality = DimensionScores::mean(assets.iter().map(|a| &a.quality));
    let quality_bands = config.quality.effective_quality_bands();

    AssessmentSummary {
        overall_score: methodology_score.overall_score,
        grade: methodology_score.grade,
        quality_band: QualityBand::classify(methodology_score.overall_score, quality_bands),
        adoption_phase: determine_adoption_phase(&signal_coverage, average_readiness),
        signal_coverage,
        signal_scores: input.signal_scores.clone(),
        use_case_readiness,
        top_gaps: top_gaps(&gaps, config.scoring.effective_top_gaps()),
        gap_summary: compute_gap_summary(&gaps),
        methodology: methodology_score,
        average_timeliness,
        asset_quality,
        asset_quality_band: QualityBand::classify(asset_quality.overall, quality_bands),
        lineage: LineageRollup::from_metrics(assets.iter().map(|a| &a.lineage)),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
