use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use assay_core::types::Signal;

use crate::methodology::CORE_SIGNALS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionPhase {
    Foundation,
    Expansion,
    Optimization,
    Excellence,
}

impl AdoptionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "FOUNDATION",
            Self::Expansion => "EXPANSION",
            Self::Optimization => "OPTIMIZATION",
            Self::Excellence => "EXCELLENCE",
        }
    }
}

impl fmt::Display for AdoptionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean coverage of the core signals; missing entries count as 0.
pub fn core_coverage(coverage: &BTreeMap<Signal, f64>) -> f64 {
    let sum: f64 = CORE_SIGNALS
        .iter()
        .map(|s| coverage.get(s).copied().unwrap_or(0.0))
        .sum();
    sum / CORE_SIGNALS.len() as f64
}

/// First matching band wins.
pub fn determine_adoption_phase(coverage: &BTreeMap<Signal, f64>, average_readiness: f64) -> AdoptionPhase {
    let core = core_coverage(coverage);
    if core >= 0.8 && average_readiness >= 0.7 {
        AdoptionPhase::Excellence
    } else if core >= 0.6 && average_readiness >= 0.5 {
        AdoptionPhase::Optimization
    } else if core >= 0.3 || average_readiness >= 0.3 {
        AdoptionPhase::Expansion
    } else {
        AdoptionPhase::Foundation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: f64) -> BTreeMap<Signal, f64> {
        CORE_SIGNALS.iter().map(|s| (*s, value)).collect()
    }

    #[test]
    fn test_cascade() {
        assert_eq!(determine_adoption_phase(&uniform(0.9), 0.8), AdoptionPhase::Excellence);
        assert_eq!(determine_adoption_phase(&uniform(0.9), 0.6), AdoptionPhase::Optimization);
        assert_eq!(determine_adoption_phase(&uniform(0.9), 0.1), AdoptionPhase::Expansion);
        assert_eq!(determine_adoption_phase(&uniform(0.1), 0.35), AdoptionPhase::Expansion);
        assert_eq!(determine_adoption_phase(&uniform(0.1), 0.1), AdoptionPhase::Foundation);
        assert_eq!(determine_adoption_phase(&BTreeMap::new(), 0.0), AdoptionPhase::Foundation);
    }

    #[test]
    fn test_only_core_signals_count() {
        let mut coverage = uniform(0.0);
        coverage.insert(Signal::Usage, 1.0);
        coverage.insert(Signal::Quality, 1.0);
        assert_eq!(core_coverage(&coverage), 0.0);
        coverage.insert(Signal::Ownership, 1.0);
        assert_eq!(core_coverage(&coverage), 0.25);
    }
}
