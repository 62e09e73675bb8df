//! Weights of the five per-asset quality dimensions, with named profiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIMENSION_WEIGHTS;

/// Resolved dimension weights. Not required to sum to 1; the overall score
/// divides by the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub completeness: f64,
    pub accuracy: f64,
    pub timeliness: f64,
    pub consistency: f64,
    pub usability: f64,
}

impl DimensionWeights {
    /// Weights in dimension order: completeness, accuracy, timeliness,
    /// consistency, usability.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.completeness,
            self.accuracy,
            self.timeliness,
            self.consistency,
            self.usability,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        let [completeness, accuracy, timeliness, consistency, usability] =
            DEFAULT_DIMENSION_WEIGHTS;
        Self {
            completeness,
            accuracy,
            timeliness,
            consistency,
            usability,
        }
    }
}

/// Partially specified weights; unset values fall through to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeightOverrides {
    pub completeness: Option<f64>,
    pub accuracy: Option<f64>,
    pub timeliness: Option<f64>,
    pub consistency: Option<f64>,
    pub usability: Option<f64>,
}

impl DimensionWeightOverrides {
    pub fn apply(&self, base: DimensionWeights) -> DimensionWeights {
        DimensionWeights {
            completeness: self.completeness.unwrap_or(base.completeness),
            accuracy: self.accuracy.unwrap_or(base.accuracy),
            timeliness: self.timeliness.unwrap_or(base.timeliness),
            consistency: self.consistency.unwrap_or(base.consistency),
            usability: self.usability.unwrap_or(base.usability),
        }
    }

    /// Values set in `other` win.
    pub fn merge(&mut self, other: &DimensionWeightOverrides) {
        for (dst, src) in [
            (&mut self.completeness, other.completeness),
            (&mut self.accuracy, other.accuracy),
            (&mut self.timeliness, other.timeliness),
            (&mut self.consistency, other.consistency),
            (&mut self.usability, other.usability),
        ] {
            if src.is_some() {
                *dst = src;
            }
        }
    }
}

/// `[dimensions]` section.
///
/// ```toml
/// [dimensions]
/// profile = "ai_readiness"
///
/// [dimensions.weights]
/// completeness = 0.35
///
/// [dimensions.profiles.ai_readiness]
/// accuracy = 0.40
/// usability = 0.05
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionConfig {
    /// Base weights. Default: 0.30/0.25/0.20/0.15/0.10.
    pub weights: DimensionWeightOverrides,
    /// Profile used when a request names none.
    pub profile: Option<String>,
    /// Named weight sets. A profile's unset values use the compiled
    /// defaults, not the base weights.
    pub profiles: BTreeMap<String, DimensionWeightOverrides>,
}

impl DimensionConfig {
    /// Weights for `profile`, else the configured profile, else the base
    /// weights. An unknown profile name resolves to the base weights.
    pub fn effective_weights(&self, profile: Option<&str>) -> DimensionWeights {
        let base = self.weights.apply(DimensionWeights::default());
        match profile.or(self.profile.as_deref()) {
            Some(name) => match self.profiles.get(name) {
                Some(overrides) => overrides.apply(DimensionWeights::default()),
                None => {
                    tracing::warn!(profile = %name, "unknown dimension profile; using base weights");
                    base
                }
            },
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sum_to_one() {
        let weights = DimensionConfig::default().effective_weights(None);
        assert_eq!(weights, DimensionWeights::default());
        assert!((weights.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_replaces_base_weights() {
        let mut config = DimensionConfig::default();
        config.weights.completeness = Some(0.9);
        config.profiles.insert(
            "ai".into(),
            DimensionWeightOverrides {
                accuracy: Some(0.5),
                ..Default::default()
            },
        );

        assert_eq!(config.effective_weights(None).completeness, 0.9);
        let ai = config.effective_weights(Some("ai"));
        assert_eq!(ai.accuracy, 0.5);
        assert_eq!(ai.completeness, 0.30);
        assert_eq!(config.effective_weights(Some("missing")).completeness, 0.9);
    }

    #[test]
    fn test_configured_profile_is_the_fallback() {
        let mut config = DimensionConfig::default();
        config.profile = Some("ai".into());
        config.profiles.insert(
            "ai".into(),
            DimensionWeightOverrides {
                usability: Some(0.0),
                ..Default::default()
            },
        );
        assert_eq!(config.effective_weights(None).usability, 0.0);
    }
}
