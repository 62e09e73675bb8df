//! Aggregation rules: `any`, `all`, `weighted_threshold(t)`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use assay_core::types::{AggregationRule, FieldDefinition, FieldId, Signal, TriState};

use super::set::SignalSet;
use crate::catalog::{Catalog, SignalDefinition};
use crate::evaluation::FieldResult;

/// One field's input to a signal, after negative contributions are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalContributor {
    pub field_id: FieldId,
    pub present: TriState,
    pub weight: f64,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub present: TriState,
    /// In `[0, 1]`.
    pub score: f64,
    /// Fraction of contributors with a known value.
    pub confidence: f64,
    pub contributing: Vec<SignalContributor>,
}

impl SignalResult {
    /// UNKNOWN with zero score and confidence.
    pub fn unknown(signal: Signal) -> Self {
        Self {
            signal,
            present: TriState::Unknown,
            score: 0.0,
            confidence: 0.0,
            contributing: Vec::new(),
        }
    }
}

/// Compose one signal from its contributors.
pub fn compose_signal(
    definition: &SignalDefinition,
    contributing: Vec<SignalContributor>,
) -> SignalResult {
    if contributing.is_empty() {
        return SignalResult::unknown(definition.signal);
    }

    let total = contributing.len() as f64;
    let true_count = contributing.iter().filter(|c| c.present.is_true()).count();
    let false_count = contributing.iter().filter(|c| c.present.is_false()).count();
    let known = contributing.iter().filter(|c| c.present.is_known()).count();
    let confidence = known as f64 / total;

    let (present, score) = match definition.aggregation {
        AggregationRule::Any => {
            if true_count > 0 {
                let best = contributing
                    .iter()
                    .filter(|c| c.present.is_true())
                    .map(|c| c.weight)
                    .fold(0.0_f64, f64::max);
                (TriState::True, best.clamp(0.0, 1.0))
            } else if known == 0 {
                (TriState::Unknown, 0.0)
            } else {
                (TriState::False, 0.0)
            }
        }
        AggregationRule::All => {
            let fraction = true_count as f64 / total;
            if false_count > 0 {
                (TriState::False, fraction)
            } else if known < contributing.len() {
                (TriState::Unknown, fraction)
            } else {
                (TriState::True, 1.0)
            }
        }
        AggregationRule::WeightedThreshold { threshold } => {
            let total_weight: f64 = contributing.iter().map(|c| c.weight).sum();
            let true_weight: f64 = contributing
                .iter()
                .filter(|c| c.present.is_true())
                .map(|c| c.weight)
                .sum();
            let score = if total_weight > 0.0 {
                (true_weight / total_weight).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let gated = contributing.iter().any(|c| c.required && c.present.is_false());
            (TriState::from(score >= threshold && !gated), score)
        }
    };

    SignalResult {
        signal: definition.signal,
        present,
        score,
        confidence,
        contributing,
    }
}

/// Compose all catalog signals for one asset.
///
/// `fields` are the fields that were evaluated (already filtered by asset
/// type); results are matched to them by field id.
pub fn compose_signals(
    catalog: &Catalog,
    fields: &[&FieldDefinition],
    results: &[FieldResult],
) -> SignalSet {
    let by_id: FxHashMap<&str, &FieldResult> =
        results.iter().map(|r| (r.field_id.as_str(), r)).collect();

    let signals = Signal::all()
        .iter()
        .map(|&signal| {
            let Some(definition) = catalog.signal(signal) else {
                tracing::warn!(%signal, "signal has no definition; reporting UNKNOWN");
                return SignalResult::unknown(signal);
            };
            let contributing = fields
                .iter()
                .filter_map(|field| {
                    let contribution = field.contribution_for(signal)?;
                    let result = by_id.get(field.id.as_str())?;
                    let present = if contribution.negative {
                        result.present.negate()
                    } else {
                        result.present
                    };
                    Some(SignalContributor {
                        field_id: field.id.clone(),
                        present,
                        weight: contribution.weight,
                        required: contribution.required,
                    })
                })
                .collect();
            compose_signal(definition, contributing)
        })
        .collect();

    SignalSet::new(signals)
}
