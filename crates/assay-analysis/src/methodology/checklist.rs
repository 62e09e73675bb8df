//! Checklist: pass/fail per signal at a fixed threshold.

use assay_core::types::Signal;

use super::types::{BreakdownItem, Grade, Methodology, MethodologyInput, MethodologyScore};
use super::CORE_SIGNALS;
use crate::catalog::UseCaseProfile;
use crate::use_cases::SIGNAL_MET_THRESHOLD;

const REQUIRED_WEIGHT: f64 = 1.0;
const OPTIONAL_WEIGHT: f64 = 0.5;

/// Required entries first, then optional. Overall = passed / total × 100.
pub fn checklist(input: &MethodologyInput, profile: Option<&UseCaseProfile>) -> MethodologyScore {
    let entries: Vec<(Signal, bool)> = match profile {
        Some(p) => {
            let required = p.signals.iter().filter(|s| s.required).map(|s| (s.signal, true));
            let optional = p.signals.iter().filter(|s| !s.required).map(|s| (s.signal, false));
            required.chain(optional).collect()
        }
        None => {
            let required = CORE_SIGNALS.iter().map(|s| (*s, true));
            let optional = Signal::all()
                .iter()
                .filter(|s| !CORE_SIGNALS.contains(s))
                .map(|s| (*s, false));
            required.chain(optional).collect()
        }
    };

    let breakdown: Vec<BreakdownItem> = entries
        .iter()
        .map(|&(signal, required)| {
            let value = input.signal_score(signal);
            let passed = value >= SIGNAL_MET_THRESHOLD;
            let weight = if required { REQUIRED_WEIGHT } else { OPTIONAL_WEIGHT };
            BreakdownItem {
                key: signal.as_str().to_string(),
                label: signal.label().to_string(),
                value,
                weight,
                contribution: if passed { weight } else { 0.0 },
                passed: Some(passed),
            }
        })
        .collect();

    let total = breakdown.len();
    let passed = breakdown.iter().filter(|b| b.passed == Some(true)).count();
    let required_failing = breakdown
        .iter()
        .filter(|b| b.weight == REQUIRED_WEIGHT && b.passed == Some(false))
        .count();
    let overall_score = if total > 0 {
        passed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let interpretation = if required_failing == 0 {
        format!("{passed}/{total} checks passed; all required checks pass.")
    } else {
        format!("{passed}/{total} checks passed; {required_failing} required checks failing.")
    };

    MethodologyScore {
        methodology: Methodology::Checklist,
        use_case_id: None,
        overall_score,
        grade: Grade::from_score(overall_score),
        breakdown,
        interpretation,
        stage: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_default_checklist_orders_core_first() {
        let input = MethodologyInput::from_signal_scores(
            &[(Signal::Ownership, 0.5), (Signal::Usage, 0.9)],
            1,
        );
        let r = checklist(&input, None);
        assert_eq!(r.breakdown.len(), 10);
        let keys: Vec<&str> = r.breakdown.iter().take(4).map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["OWNERSHIP", "SEMANTICS", "LINEAGE", "SENSITIVITY"]);
        assert_eq!(r.overall_score, 20.0);
        assert!(r.interpretation.contains("3 required checks failing"));
        let usage = r.breakdown.iter().find(|b| b.key == "USAGE").unwrap();
        assert_eq!(usage.contribution, 0.5);
    }

    #[test]
    fn test_profile_checklist() {
        let catalog = Catalog::standard();
        let sql = catalog.use_case("text_to_sql").unwrap();
        let input = MethodologyInput::from_signal_scores(
            &[
                (Signal::Semantics, 0.8),
                (Signal::Quality, 0.6),
                (Signal::Lineage, 0.7),
                (Signal::Usage, 0.1),
                (Signal::Ownership, 0.9),
            ],
            1,
        );
        let r = checklist(&input, Some(sql));
        assert_eq!(r.overall_score, 80.0);
        assert_eq!(r.grade, Grade::B);
        assert_eq!(r.breakdown[0].key, "SEMANTICS");
        assert_eq!(r.breakdown[1].key, "QUALITY");
    }
}
