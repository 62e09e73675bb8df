//! Per-asset signal results in canonical order.

use serde::{Deserialize, Serialize};

use assay_core::types::{Signal, TriState};

use super::composer::SignalResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSet {
    signals: Vec<SignalResult>,
}

impl SignalSet {
    pub fn new(mut signals: Vec<SignalResult>) -> Self {
        signals.sort_by_key(|s| s.signal);
        signals.dedup_by_key(|s| s.signal);
        Self { signals }
    }

    /// Convenience constructor from `(signal, presence, score)` triples,
    /// with full confidence.
    pub fn from_scores(entries: &[(Signal, TriState, f64)]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|&(signal, present, score)| SignalResult {
                    signal,
                    present,
                    score,
                    confidence: if present.is_known() { 1.0 } else { 0.0 },
                    contributing: Vec::new(),
                })
                .collect(),
        )
    }

    pub fn get(&self, signal: Signal) -> Option<&SignalResult> {
        self.signals.iter().find(|s| s.signal == signal)
    }

    /// Score of a signal; 0 when absent from the set.
    pub fn score(&self, signal: Signal) -> f64 {
        self.get(signal).map_or(0.0, |s| s.score)
    }

    /// Presence of a signal; UNKNOWN when absent from the set.
    pub fn presence(&self, signal: Signal) -> TriState {
        self.get(signal).map_or(TriState::Unknown, |s| s.present)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalResult> {
        self.signals.iter()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
