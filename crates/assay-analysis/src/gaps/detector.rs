//! Diffs required signals against an asset's composed signals.

use assay_core::types::{Signal, SignalSeverity};

use super::types::{Gap, GapType};
use crate::catalog::CapabilityRequirements;
use crate::explain::{missing_message, unknown_message};
use crate::signals::SignalSet;

/// Deterministic gap id.
pub fn gap_id(gap_type: GapType, signal: Signal, subject_id: &str) -> String {
    format!("gap-{}-{}-{}", gap_type.as_str(), signal.as_str(), subject_id).to_lowercase()
}

/// Gaps for every required signal that is absent or unknown on the asset.
pub fn detect_gaps(
    requirements: &CapabilityRequirements,
    signals: &SignalSet,
    subject_id: &str,
) -> Vec<Gap> {
    let mut gaps = Vec::new();
    for &signal in &requirements.required_signals {
        let presence = signals.presence(signal);
        if presence.is_false() {
            gaps.push(build_gap(GapType::Missing, signal, requirements, signals, subject_id));
        }
        if presence.is_unknown() {
            gaps.push(build_gap(GapType::Unknown, signal, requirements, signals, subject_id));
        }
    }
    gaps
}

fn build_gap(
    gap_type: GapType,
    signal: Signal,
    requirements: &CapabilityRequirements,
    signals: &SignalSet,
    subject_id: &str,
) -> Gap {
    let severity = if requirements.is_critical(signal) {
        SignalSeverity::High
    } else {
        signal.default_severity()
    };
    let explanation = match gap_type {
        GapType::Missing => missing_message(signal),
        GapType::Unknown | GapType::Conflict => unknown_message(signal),
    };

    let mut evidence_refs = vec![format!("asset:{subject_id}")];
    if let Some(result) = signals.get(signal) {
        evidence_refs.extend(
            result
                .contributing
                .iter()
                .map(|c| format!("field:{}={}", c.field_id, c.present)),
        );
    }

    Gap {
        id: gap_id(gap_type, signal, subject_id),
        gap_type,
        signal,
        subject_id: subject_id.to_string(),
        severity,
        workstream: signal.workstream(),
        explanation: explanation.to_string(),
        evidence_refs,
    }
}
