//! Weighted Measures (field completeness) and Weighted Dimensions (signals).

use assay_core::types::Signal;

use super::types::{BreakdownItem, Grade, Methodology, MethodologyInput, MethodologyScore};
use crate::catalog::{Catalog, UseCaseProfile};

/// Σ(coverage × completeness weight) / Σ weight over completeness-weighted
/// fields, restricted to fields feeding the use case's signals.
pub fn weighted_measures(
    catalog: &Catalog,
    input: &MethodologyInput,
    profile: Option<&UseCaseProfile>,
) -> MethodologyScore {
    let entries = catalog
        .fields()
        .iter()
        .filter(|f| profile.map_or(true, |p| f.contributions.iter().any(|c| p.includes(c.signal))))
        .filter_map(|f| {
            let weight = f.completeness_weight.filter(|w| *w > 0.0)?;
            Some((f.id.clone(), f.label.clone(), input.coverage(&f.id), weight))
        })
        .collect();
    let mut result = weighted_average(Methodology::WeightedMeasures, entries);

    result.interpretation = match weakest(&result.breakdown) {
        Some(item) => format!(
            "Completeness {:.1}% across {} weighted fields; weakest is {} at {:.0}%.",
            result.overall_score,
            result.breakdown.len(),
            item.label,
            item.value * 100.0
        ),
        None => "No completeness-weighted fields apply.".to_string(),
    };
    result
}

/// Σ(signal score × weight) / Σ weight using the use case's signal weights,
/// or equal weights over every signal.
pub fn weighted_dimensions(
    input: &MethodologyInput,
    profile: Option<&UseCaseProfile>,
) -> MethodologyScore {
    let weights: Vec<(Signal, f64)> = match profile {
        Some(p) => p.signals.iter().map(|s| (s.signal, s.weight)).collect(),
        None => Signal::all().iter().map(|s| (*s, 1.0)).collect(),
    };
    let entries = weights
        .into_iter()
        .map(|(signal, weight)| {
            (
                signal.as_str().to_string(),
                signal.label().to_string(),
                input.signal_score(signal),
                weight,
            )
        })
        .collect();
    let mut result = weighted_average(Methodology::WeightedDimensions, entries);

    result.interpretation = match weakest(&result.breakdown) {
        Some(item) => format!(
            "Weighted signal score {:.1}%; {} is the weakest dimension at {:.0}%.",
            result.overall_score,
            item.label,
            item.value * 100.0
        ),
        None => "No dimensions to score.".to_string(),
    };
    result
}

fn weighted_average(
    methodology: Methodology,
    entries: Vec<(String, String, f64, f64)>,
) -> MethodologyScore {
    let total_weight: f64 = entries.iter().map(|e| e.3).sum();
    let breakdown: Vec<BreakdownItem> = entries
        .into_iter()
        .map(|(key, label, value, weight)| BreakdownItem {
            key,
            label,
            value,
            weight,
            contribution: if total_weight > 0.0 {
                value * weight / total_weight * 100.0
            } else {
                0.0
            },
            passed: None,
        })
        .collect();
    let overall_score: f64 = breakdown.iter().map(|b| b.contribution).sum();

    MethodologyScore {
        methodology,
        use_case_id: None,
        overall_score,
        grade: Grade::from_score(overall_score),
        breakdown,
        interpretation: String::new(),
        stage: None,
    }
}

fn weakest(items: &[BreakdownItem]) -> Option<&BreakdownItem> {
    items
        .iter()
        .filter(|i| i.weight > 0.0)
        .min_by(|a, b| a.value.total_cmp(&b.value))
}
