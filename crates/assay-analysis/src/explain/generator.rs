//! Formats results into `Explanation` records.

use serde::{Deserialize, Serialize};

use assay_core::types::TriState;

use super::templates::{missing_message, remediation_hint, unknown_message};
use crate::gaps::{Gap, GapType};
use crate::methodology::MethodologyScore;
use crate::plan::RemediationAction;
use crate::signals::SignalResult;
use crate::use_cases::UseCaseResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub title: String,
    pub reasoning: String,
    #[serde(default)]
    pub evidence_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

pub fn explain_gap(gap: &Gap) -> Explanation {
    let kind = match gap.gap_type {
        GapType::Missing => "missing",
        GapType::Unknown => "unknown",
        GapType::Conflict => "conflicting",
    };
    Explanation {
        title: format!("{} is {kind} on {}", gap.signal.label(), gap.subject_id),
        reasoning: format!("{} Next step: {}.", gap.explanation, remediation_hint(gap.signal)),
        evidence_refs: gap.evidence_refs.clone(),
        severity: Some(gap.severity.as_str().to_string()),
    }
}

pub fn explain_signal(result: &SignalResult) -> Explanation {
    let known = result.contributing.iter().filter(|c| c.present.is_known()).count();
    let reasoning = match result.present {
        TriState::True => format!(
            "{} is present with score {:.2} from {} of {} contributing fields known.",
            result.signal.label(),
            result.score,
            known,
            result.contributing.len()
        ),
        TriState::False => format!("{} Score {:.2}.", missing_message(result.signal), result.score),
        TriState::Unknown => unknown_message(result.signal).to_string(),
    };
    Explanation {
        title: format!("{}: {}", result.signal.label(), result.present),
        reasoning,
        evidence_refs: result
            .contributing
            .iter()
            .map(|c| format!("field:{}={}", c.field_id, c.present))
            .collect(),
        severity: (!result.present.is_true())
            .then(|| result.signal.default_severity().as_str().to_string()),
    }
}

pub fn explain_use_case(result: &UseCaseResult) -> Explanation {
    let unmet: Vec<&str> = result.gaps.iter().map(|g| g.signal.label()).collect();
    let reasoning = if unmet.is_empty() {
        format!(
            "Readiness {:.0}% with {}/{} required signals met; no gaps.",
            result.readiness_score * 100.0,
            result.required_signals_met,
            result.required_signals_total
        )
    } else {
        format!(
            "Readiness {:.0}% with {}/{} required signals met; unmet: {}.",
            result.readiness_score * 100.0,
            result.required_signals_met,
            result.required_signals_total,
            unmet.join(", ")
        )
    };
    Explanation {
        title: format!("{} is {}", result.use_case_id, result.readiness_level),
        reasoning,
        evidence_refs: result
            .signals
            .iter()
            .map(|s| format!("signal:{}={:.2}", s.signal, s.score))
            .collect(),
        severity: result
            .gaps
            .iter()
            .map(|g| g.severity)
            .min()
            .map(|s| s.as_str().to_string()),
    }
}

pub fn explain_methodology(score: &MethodologyScore) -> Explanation {
    Explanation {
        title: format!(
            "{}: {:.1} ({})",
            score.methodology.label(),
            score.overall_score,
            score.grade
        ),
        reasoning: score.interpretation.clone(),
        evidence_refs: score
            .breakdown
            .iter()
            .map(|b| format!("{}={:.2}", b.key, b.value))
            .collect(),
        severity: None,
    }
}

pub fn explain_action(action: &RemediationAction) -> Explanation {
    Explanation {
        title: format!("[{}] {}", action.phase, action.title),
        reasoning: format!(
            "{} gaps across {} assets in the {} workstream; effort {:?}.",
            action.gap_count,
            action.asset_count,
            action.workstream.label(),
            action.effort
        ),
        evidence_refs: action.gap_ids.clone(),
        severity: None,
    }
}
