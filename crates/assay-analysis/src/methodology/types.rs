//! Methodology input, output and grading.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use assay_core::types::{FieldId, Signal};

use super::maturity::MaturityStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Methodology {
    WeightedMeasures,
    WeightedDimensions,
    Checklist,
    #[serde(rename = "qtriplet")]
    QTriplet,
    Maturity,
}

impl Methodology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeightedMeasures => "weighted_measures",
            Self::WeightedDimensions => "weighted_dimensions",
            Self::Checklist => "checklist",
            Self::QTriplet => "qtriplet",
            Self::Maturity => "maturity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WeightedMeasures => "Weighted Measures",
            Self::WeightedDimensions => "Weighted Dimensions",
            Self::Checklist => "Checklist",
            Self::QTriplet => "Q-Triplet",
            Self::Maturity => "Maturity Model",
        }
    }

    pub fn all() -> &'static [Methodology] {
        &[
            Self::WeightedMeasures,
            Self::WeightedDimensions,
            Self::Checklist,
            Self::QTriplet,
            Self::Maturity,
        ]
    }
}

impl fmt::Display for Methodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Methodology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized || (normalized == "q_triplet" && *m == Self::QTriplet))
            .ok_or_else(|| format!("unknown methodology: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// 90/80/70/60 thresholds on a 0-100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated coverage data the methodologies score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyInput {
    /// Fraction of assets on which each field is present, `[0, 1]`.
    pub field_coverage: BTreeMap<FieldId, f64>,
    /// Mean signal score across assets, `[0, 1]`.
    pub signal_scores: BTreeMap<Signal, f64>,
    pub total_assets: usize,
}

impl MethodologyInput {
    pub fn from_signal_scores(scores: &[(Signal, f64)], total_assets: usize) -> Self {
        Self {
            field_coverage: BTreeMap::new(),
            signal_scores: scores.iter().copied().collect(),
            total_assets,
        }
    }

    pub fn with_field_coverage(mut self, coverage: &[(&str, f64)]) -> Self {
        self.field_coverage = coverage.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        self
    }

    pub fn signal_score(&self, signal: Signal) -> f64 {
        self.signal_scores.get(&signal).copied().unwrap_or(0.0).clamp(0.0, 1.0)
    }

    pub fn coverage(&self, field_id: &str) -> f64 {
        self.field_coverage.get(field_id).copied().unwrap_or(0.0).clamp(0.0, 1.0)
    }
}

/// One line of a methodology breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub key: String,
    pub label: String,
    /// Underlying measure in `[0, 1]`.
    pub value: f64,
    pub weight: f64,
    /// Points contributed to the overall score.
    pub contribution: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyScore {
    pub methodology: Methodology,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case_id: Option<String>,
    /// `[0, 100]`.
    pub overall_score: f64,
    pub grade: Grade,
    pub breakdown: Vec<BreakdownItem>,
    pub interpretation: String,
    /// Highest maturity stage reached (maturity methodology only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<MaturityStage>,
}

impl MethodologyScore {
    pub fn empty(methodology: Methodology, use_case_id: Option<&str>) -> Self {
        Self {
            methodology,
            use_case_id: use_case_id.map(str::to_string),
            overall_score: 0.0,
            grade: Grade::F,
            breakdown: Vec::new(),
            interpretation: match use_case_id {
                Some(id) => format!("Unknown use case '{id}'; nothing to score."),
                None => "Nothing to score.".to_string(),
            },
            stage: None,
        }
    }
}
