use std::fmt;

use serde::{Deserialize, Serialize};

/// Band of an overall 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl QualityBand {
    /// Classify against lower bounds `[excellent, good, fair, poor]`.
    pub fn classify(score: f64, bands: [f64; 4]) -> Self {
        let [excellent, good, fair, poor] = bands;
        if score >= excellent {
            Self::Excellent
        } else if score >= good {
            Self::Good
        } else if score >= fair {
            Self::Fair
        } else if score >= poor {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::constants::DEFAULT_QUALITY_BANDS;

    #[test]
    fn test_default_bands() {
        let cases = [
            (100.0, QualityBand::Excellent),
            (80.0, QualityBand::Excellent),
            (79.9, QualityBand::Good),
            (60.0, QualityBand::Good),
            (45.0, QualityBand::Fair),
            (20.0, QualityBand::Poor),
            (19.99, QualityBand::Critical),
            (0.0, QualityBand::Critical),
        ];
        for (score, band) in cases {
            assert_eq!(QualityBand::classify(score, DEFAULT_QUALITY_BANDS), band, "score {score}");
        }
    }

    #[test]
    fn test_custom_bands() {
        let bands = [95.0, 85.0, 50.0, 10.0];
        assert_eq!(QualityBand::classify(90.0, bands), QualityBand::Good);
        assert_eq!(QualityBand::classify(12.0, bands), QualityBand::Poor);
    }

    #[test]
    fn test_nan_is_critical() {
        assert_eq!(QualityBand::classify(f64::NAN, DEFAULT_QUALITY_BANDS), QualityBand::Critical);
    }
}
