//! Use-case readiness profiles and the capability requirements derived
//! from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use assay_core::types::Signal;

use crate::methodology::Methodology;

/// One weighted signal in a use-case profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UseCaseSignal {
    pub signal: Signal,
    pub weight: f64,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessThresholds {
    pub ready: f64,
    pub partial: f64,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            ready: 0.7,
            partial: 0.4,
        }
    }
}

/// A named capability profile (RAG, text-to-SQL, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub signals: Vec<UseCaseSignal>,
    #[serde(default)]
    pub thresholds: ReadinessThresholds,
    pub default_methodology: Methodology,
    /// Signals whose gaps are always HIGH severity for this capability.
    #[serde(default)]
    pub critical_signals: Vec<Signal>,
}

impl UseCaseProfile {
    pub fn total_weight(&self) -> f64 {
        self.signals.iter().map(|s| s.weight).sum()
    }

    pub fn required_signals(&self) -> impl Iterator<Item = Signal> + '_ {
        self.signals.iter().filter(|s| s.required).map(|s| s.signal)
    }

    pub fn weight_of(&self, signal: Signal) -> Option<f64> {
        self.signals.iter().find(|s| s.signal == signal).map(|s| s.weight)
    }

    pub fn includes(&self, signal: Signal) -> bool {
        self.signals.iter().any(|s| s.signal == signal)
    }

    pub fn requirements(&self) -> CapabilityRequirements {
        CapabilityRequirements::from_profile(self)
    }
}

/// Required and critical signals for one or more capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRequirements {
    pub required_signals: BTreeSet<Signal>,
    pub critical_signals: BTreeSet<Signal>,
}

impl CapabilityRequirements {
    pub fn from_profile(profile: &UseCaseProfile) -> Self {
        Self {
            required_signals: profile.required_signals().collect(),
            critical_signals: profile.critical_signals.iter().copied().collect(),
        }
    }

    /// Union of two requirement sets.
    pub fn merge(&mut self, other: &CapabilityRequirements) {
        self.required_signals.extend(other.required_signals.iter().copied());
        self.critical_signals.extend(other.critical_signals.iter().copied());
    }

    pub fn is_critical(&self, signal: Signal) -> bool {
        self.critical_signals.contains(&signal)
    }

    pub fn is_empty(&self) -> bool {
        self.required_signals.is_empty()
    }
}

fn profile(
    id: &str,
    name: &str,
    description: &str,
    methodology: Methodology,
    signals: &[(Signal, f64, bool)],
    critical: &[Signal],
) -> UseCaseProfile {
    UseCaseProfile {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        signals: signals
            .iter()
            .map(|&(signal, weight, required)| UseCaseSignal {
                signal,
                weight,
                required,
            })
            .collect(),
        thresholds: ReadinessThresholds::default(),
        default_methodology: methodology,
        critical_signals: critical.to_vec(),
    }
}

/// The eight standard use-case profiles.
pub fn standard_use_cases() -> Vec<UseCaseProfile> {
    use Signal::*;

    vec![
        profile(
            "self_service_discovery",
            "Self-Service Discovery",
            "Analysts can find, understand and trust data without asking around.",
            Methodology::WeightedMeasures,
            &[
                (Semantics, 0.30, true),
                (Ownership, 0.25, true),
                (Trust, 0.15, false),
                (Usage, 0.15, false),
                (Freshness, 0.15, false),
            ],
            &[Semantics],
        ),
        profile(
            "rag",
            "Retrieval-Augmented Generation",
            "Assets can be safely retrieved as grounding context for LLMs.",
            Methodology::WeightedDimensions,
            &[
                (Semantics, 0.35, true),
                (Sensitivity, 0.20, true),
                (Trust, 0.15, false),
                (Freshness, 0.15, false),
                (AiReady, 0.15, false),
            ],
            &[Semantics, Sensitivity],
        ),
        profile(
            "text_to_sql",
            "Text-to-SQL",
            "Natural-language questions can be translated into correct queries.",
            Methodology::Checklist,
            &[
                (Semantics, 0.35, true),
                (Quality, 0.20, true),
                (Lineage, 0.15, false),
                (Usage, 0.15, false),
                (Ownership, 0.15, false),
            ],
            &[Semantics, Quality],
        ),
        profile(
            "ai_agents",
            "AI Agents",
            "Autonomous agents may read and act on the asset under governance.",
            Methodology::Maturity,
            &[
                (AiReady, 0.30, true),
                (Sensitivity, 0.20, true),
                (Access, 0.20, true),
                (Semantics, 0.15, false),
                (Trust, 0.15, false),
            ],
            &[AiReady, Access],
        ),
        profile(
            "impact_analysis",
            "Impact Analysis",
            "Changes can be traced to affected consumers and owners.",
            Methodology::WeightedDimensions,
            &[
                (Lineage, 0.50, true),
                (Ownership, 0.30, true),
                (Usage, 0.20, false),
            ],
            &[Lineage],
        ),
        profile(
            "dsr_compliance",
            "DSR Compliance",
            "Data subject requests can be located, scoped and fulfilled.",
            Methodology::Checklist,
            &[
                (Sensitivity, 0.35, true),
                (Access, 0.25, true),
                (Ownership, 0.20, true),
                (Lineage, 0.20, false),
            ],
            &[Sensitivity, Ownership],
        ),
        profile(
            "data_products",
            "Data Products",
            "The asset can be published as a governed, supported data product.",
            Methodology::Maturity,
            &[
                (Ownership, 0.20, true),
                (Semantics, 0.20, true),
                (Trust, 0.20, true),
                (Quality, 0.20, false),
                (Freshness, 0.20, false),
            ],
            &[Ownership, Trust],
        ),
        profile(
            "cost_optimization",
            "Cost Optimization",
            "Unused or redundant assets can be identified and retired.",
            Methodology::QTriplet,
            &[
                (Usage, 0.40, true),
                (Freshness, 0.20, false),
                (Lineage, 0.20, false),
                (Ownership, 0.20, false),
            ],
            &[Usage],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_weights_sum_to_one() {
        for p in standard_use_cases() {
            assert!((p.total_weight() - 1.0).abs() < 1e-9, "{}", p.id);
        }
    }

    #[test]
    fn test_requirements_from_profile() {
        let rag = standard_use_cases()
            .into_iter()
            .find(|p| p.id == "rag")
            .unwrap();
        let req = rag.requirements();
        assert_eq!(
            req.required_signals.iter().copied().collect::<Vec<_>>(),
            vec![Signal::Semantics, Signal::Sensitivity]
        );
        assert!(req.is_critical(Signal::Sensitivity));
        assert!(!req.is_critical(Signal::Trust));
    }

    #[test]
    fn test_requirements_merge_is_union() {
        let profiles = standard_use_cases();
        let mut merged = CapabilityRequirements::default();
        for p in profiles.iter().filter(|p| p.id == "rag" || p.id == "impact_analysis") {
            merged.merge(&p.requirements());
        }
        assert_eq!(merged.required_signals.len(), 4);
        assert!(merged.is_critical(Signal::Lineage));
        assert!(merged.is_critical(Signal::Semantics));
    }
}
