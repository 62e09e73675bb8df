//! Maturity model: five contiguous stages gated on signal means.

use std::fmt;

use serde::{Deserialize, Serialize};

use assay_core::types::Signal;

use super::types::{BreakdownItem, Grade, Methodology, MethodologyInput, MethodologyScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaturityStage {
    Foundation,
    Documented,
    Governed,
    Optimized,
    AiReady,
}

impl MaturityStage {
    pub fn all() -> &'static [MaturityStage] {
        &[
            Self::Foundation,
            Self::Documented,
            Self::Governed,
            Self::Optimized,
            Self::AiReady,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "FOUNDATION",
            Self::Documented => "DOCUMENTED",
            Self::Governed => "GOVERNED",
            Self::Optimized => "OPTIMIZED",
            Self::AiReady => "AI_READY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Documented => "Documented",
            Self::Governed => "Governed",
            Self::Optimized => "Optimized",
            Self::AiReady => "AI-Ready",
        }
    }

    pub fn signals(&self) -> &'static [Signal] {
        match self {
            Self::Foundation => &[Signal::Ownership, Signal::Semantics],
            Self::Documented => &[Signal::Lineage, Signal::Trust],
            Self::Governed => &[Signal::Sensitivity, Signal::Access],
            Self::Optimized => &[Signal::Quality, Signal::Freshness, Signal::Usage],
            Self::AiReady => &[Signal::AiReady],
        }
    }

    pub fn gate(&self) -> f64 {
        match self {
            Self::AiReady => 0.7,
            _ => 0.5,
        }
    }
}

impl fmt::Display for MaturityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grade by stages reached. Independent of the numeric score.
pub fn grade_for_stages(stages: usize) -> Grade {
    match stages {
        0 | 1 => Grade::F,
        2 => Grade::D,
        3 => Grade::C,
        4 => Grade::B,
        _ => Grade::A,
    }
}

pub fn maturity(input: &MethodologyInput) -> MethodologyScore {
    let stages = MaturityStage::all();
    let means: Vec<f64> = stages
        .iter()
        .map(|stage| {
            let signals = stage.signals();
            signals.iter().map(|s| input.signal_score(*s)).sum::<f64>() / signals.len() as f64
        })
        .collect();

    let reached = stages
        .iter()
        .zip(&means)
        .take_while(|(stage, mean)| **mean >= stage.gate())
        .count();

    let progress = match stages.get(reached) {
        Some(next) => (means[reached] / next.gate()).clamp(0.0, 1.0),
        None => 0.0,
    };
    let overall_score = (reached as f64 + progress * 0.2) / stages.len() as f64 * 100.0;

    let breakdown = stages
        .iter()
        .zip(&means)
        .enumerate()
        .map(|(i, (stage, mean))| BreakdownItem {
            key: stage.as_str().to_string(),
            label: stage.label().to_string(),
            value: *mean,
            weight: stage.gate(),
            contribution: if i < reached { 100.0 / stages.len() as f64 } else { 0.0 },
            passed: Some(i < reached),
        })
        .collect();

    let stage = reached.checked_sub(1).map(|i| stages[i]);
    let interpretation = match (stage, stages.get(reached)) {
        (Some(current), Some(next)) => format!(
            "Reached {current} ({reached}/5); {:.0}% of the way to {next}.",
            progress * 100.0
        ),
        (Some(current), None) => format!("Reached {current}: every stage passed."),
        (None, _) => format!(
            "Foundation not yet reached; {:.0}% of the way there.",
            progress * 100.0
        ),
    };

    MethodologyScore {
        methodology: Methodology::Maturity,
        use_case_id: None,
        overall_score,
        grade: grade_for_stages(reached),
        breakdown,
        interpretation,
        stage,
    }
}
