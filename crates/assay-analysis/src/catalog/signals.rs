//! Signal definitions: aggregation rule, severity and workstream per signal.

use serde::{Deserialize, Serialize};

use assay_core::types::{AggregationRule, Signal, SignalSeverity, Workstream};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDefinition {
    pub signal: Signal,
    pub aggregation: AggregationRule,
    pub severity: SignalSeverity,
    pub workstream: Workstream,
    pub description: String,
}

impl SignalDefinition {
    fn new(signal: Signal, aggregation: AggregationRule, description: &str) -> Self {
        Self {
            signal,
            aggregation,
            severity: signal.default_severity(),
            workstream: signal.workstream(),
            description: description.to_string(),
        }
    }
}

/// The ten canonical signal definitions in canonical order.
pub fn standard_signals() -> Vec<SignalDefinition> {
    use AggregationRule::{All, Any, WeightedThreshold};

    vec![
        SignalDefinition::new(
            Signal::Ownership,
            Any,
            "An accountable owner or steward is recorded.",
        ),
        SignalDefinition::new(
            Signal::Semantics,
            WeightedThreshold { threshold: 0.4 },
            "The asset is described and linked to business vocabulary.",
        ),
        SignalDefinition::new(
            Signal::Lineage,
            Any,
            "Upstream or downstream lineage is captured.",
        ),
        SignalDefinition::new(
            Signal::Sensitivity,
            Any,
            "The asset carries a sensitivity classification.",
        ),
        SignalDefinition::new(
            Signal::Access,
            Any,
            "Access policies or an access process are defined.",
        ),
        SignalDefinition::new(
            Signal::Quality,
            Any,
            "Data quality checks or scores are attached.",
        ),
        SignalDefinition::new(
            Signal::Freshness,
            Any,
            "Update timestamps or freshness expectations are known.",
        ),
        SignalDefinition::new(
            Signal::Usage,
            WeightedThreshold { threshold: 0.3 },
            "Query and popularity telemetry is available.",
        ),
        SignalDefinition::new(
            Signal::AiReady,
            All,
            "Certified, described, approved for AI and free of restricted data.",
        ),
        SignalDefinition::new(
            Signal::Trust,
            Any,
            "The asset is certified or otherwise endorsed.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_definition_per_signal_in_order() {
        let defs = standard_signals();
        let order: Vec<Signal> = defs.iter().map(|d| d.signal).collect();
        assert_eq!(order, Signal::all().to_vec());
    }

    #[test]
    fn test_rules_match_signal_table() {
        let defs = standard_signals();
        let rule = |s: Signal| defs.iter().find(|d| d.signal == s).map(|d| d.aggregation);
        assert_eq!(rule(Signal::AiReady), Some(AggregationRule::All));
        assert_eq!(
            rule(Signal::Semantics),
            Some(AggregationRule::WeightedThreshold { threshold: 0.4 })
        );
        assert_eq!(
            rule(Signal::Usage),
            Some(AggregationRule::WeightedThreshold { threshold: 0.3 })
        );
        assert_eq!(rule(Signal::Trust), Some(AggregationRule::Any));
    }
}
