//! Weighted readiness scoring with a required-signal gate.

use assay_core::types::Signal;

use super::types::{
    GapSeverity, ReadinessLevel, RemediationEffort, SignalAssessment, UseCaseGap, UseCaseResult,
};
use crate::catalog::{Catalog, ReadinessThresholds, UseCaseProfile};
use crate::signals::SignalSet;

/// A profile signal is met at this score. Fixed for every use case.
pub const SIGNAL_MET_THRESHOLD: f64 = 0.5;

/// EXCELLENT lower bound, independent of profile thresholds.
const EXCELLENT_THRESHOLD: f64 = 0.9;

/// Score one asset's signals against a profile.
pub fn assess_use_case(profile: &UseCaseProfile, signals: &SignalSet) -> UseCaseResult {
    let assessments: Vec<SignalAssessment> = profile
        .signals
        .iter()
        .map(|entry| {
            let score = signals.score(entry.signal);
            SignalAssessment {
                signal: entry.signal,
                weight: entry.weight,
                required: entry.required,
                score,
                met: score >= SIGNAL_MET_THRESHOLD,
            }
        })
        .collect();

    let total_weight: f64 = assessments.iter().map(|a| a.weight).sum();
    let readiness_score = if total_weight > 0.0 {
        assessments.iter().map(|a| a.score * a.weight).sum::<f64>() / total_weight
    } else {
        0.0
    };

    let required_signals_total = assessments.iter().filter(|a| a.required).count();
    let required_signals_met = assessments.iter().filter(|a| a.required && a.met).count();

    let gaps = assessments
        .iter()
        .filter(|a| !a.met)
        .map(|a| UseCaseGap {
            signal: a.signal,
            severity: gap_severity_for(a.required, a.weight),
            effort: effort_for_signal(a.signal),
            required: a.required,
            weight: a.weight,
            current_score: a.score,
        })
        .collect();

    UseCaseResult {
        use_case_id: profile.id.clone(),
        readiness_score,
        readiness_level: readiness_level(
            readiness_score,
            required_signals_met,
            required_signals_total,
            &profile.thresholds,
        ),
        required_signals_met,
        required_signals_total,
        signals: assessments,
        gaps,
    }
}

/// Assess by profile id; unknown ids yield a zero result.
pub fn assess_use_case_by_id(catalog: &Catalog, use_case_id: &str, signals: &SignalSet) -> UseCaseResult {
    match catalog.use_case(use_case_id) {
        Some(profile) => assess_use_case(profile, signals),
        None => {
            tracing::warn!(use_case = %use_case_id, "unknown use case; returning empty result");
            UseCaseResult::empty(use_case_id)
        }
    }
}

/// Ordered cascade, first match wins.
pub fn readiness_level(
    score: f64,
    required_met: usize,
    required_total: usize,
    thresholds: &ReadinessThresholds,
) -> ReadinessLevel {
    let all_required = required_met >= required_total;
    if score >= EXCELLENT_THRESHOLD && all_required {
        ReadinessLevel::Excellent
    } else if score >= thresholds.ready && all_required {
        ReadinessLevel::Ready
    } else if score >= thresholds.partial || required_met > 0 {
        ReadinessLevel::Partial
    } else {
        ReadinessLevel::NotReady
    }
}

pub fn gap_severity_for(required: bool, weight: f64) -> GapSeverity {
    if required {
        GapSeverity::Critical
    } else if weight >= 0.3 {
        GapSeverity::High
    } else if weight >= 0.15 {
        GapSeverity::Medium
    } else {
        GapSeverity::Low
    }
}

pub fn effort_for_signal(signal: Signal) -> RemediationEffort {
    match signal {
        Signal::Lineage | Signal::Quality => RemediationEffort::High,
        Signal::Sensitivity | Signal::Access | Signal::Freshness => RemediationEffort::Medium,
        Signal::Ownership
        | Signal::Semantics
        | Signal::Usage
        | Signal::AiReady
        | Signal::Trust => RemediationEffort::Low,
    }
}
