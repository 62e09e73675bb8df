//! Top-level assay configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    DimensionConfig, ErrorPolicy, PipelineConfig, QualityConfig, RollupConfig, ScoringConfig,
};
use crate::constants::{DIMENSION_NAMES, METHODOLOGY_NAMES};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ASSAY_*`)
/// 3. Project config (`assay.toml` in project root)
/// 4. User config (`~/.assay/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssayConfig {
    pub pipeline: PipelineConfig,
    pub scoring: ScoringConfig,
    pub rollup: RollupConfig,
    pub quality: QualityConfig,
    pub dimensions: DimensionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub batch_size: Option<usize>,
    pub on_error: Option<String>,
    pub methodology: Option<String>,
    pub top_gaps: Option<usize>,
    pub dimensions: Vec<String>,
}

impl AssayConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config: parse errors are fatal, unreadable files are not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("assay.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(
            batch_size = config.pipeline.effective_batch_size(),
            methodology = config.scoring.effective_methodology(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AssayConfig) -> Result<(), ConfigError> {
        if config.pipeline.batch_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref policy) = config.pipeline.on_error {
            policy
                .parse::<ErrorPolicy>()
                .map_err(|message| ConfigError::InvalidValue {
                    field: "pipeline.on_error".to_string(),
                    message,
                })?;
        }
        if let Some(ref methodology) = config.scoring.methodology {
            if !METHODOLOGY_NAMES.contains(&methodology.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "scoring.methodology".to_string(),
                    message: format!(
                        "unknown methodology '{methodology}', expected one of {}",
                        METHODOLOGY_NAMES.join(", ")
                    ),
                });
            }
        }
        for dimension in &config.rollup.dimensions {
            if !DIMENSION_NAMES.contains(&dimension.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "rollup.dimensions".to_string(),
                    message: format!("unknown dimension '{dimension}'"),
                });
            }
        }

        let bands = config.quality.effective_timeliness_bands();
        if bands.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "quality.timeliness".to_string(),
                message: "day bands must be strictly increasing".to_string(),
            });
        }
        let thresholds = config.quality.effective_quality_bands();
        if thresholds.iter().any(|t| !(0.0..=100.0).contains(t)) {
            return Err(ConfigError::ValidationFailed {
                field: "quality.bands".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        if thresholds.windows(2).any(|w| w[0] <= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "quality.bands".to_string(),
                message: "band thresholds must be strictly decreasing".to_string(),
            });
        }

        let dimensions = &config.dimensions;
        let weight_sets = std::iter::once(("dimensions.weights".to_string(), &dimensions.weights))
            .chain(
                dimensions
                    .profiles
                    .iter()
                    .map(|(name, w)| (format!("dimensions.profiles.{name}"), w)),
            );
        for (field, overrides) in weight_sets {
            let weights = overrides.apply(Default::default());
            if weights.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "weights must be non-negative".to_string(),
                });
            }
            if weights.total() <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "weights must sum to a positive value".to_string(),
                });
            }
        }
        if let Some(ref profile) = dimensions.profile {
            if !dimensions.profiles.contains_key(profile) {
                return Err(ConfigError::InvalidValue {
                    field: "dimensions.profile".to_string(),
                    message: format!("no profile named '{profile}'"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.assay/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".assay").join("config.toml"))
    }

    fn merge_toml_file(config: &mut AssayConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AssayConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only values set in `other` win.
    pub fn merge(base: &mut AssayConfig, other: &AssayConfig) {
        // Pipeline
        if other.pipeline.batch_size.is_some() {
            base.pipeline.batch_size = other.pipeline.batch_size;
        }
        if other.pipeline.on_error.is_some() {
            base.pipeline.on_error = other.pipeline.on_error.clone();
        }
        if other.pipeline.parallel.is_some() {
            base.pipeline.parallel = other.pipeline.parallel;
        }

        // Scoring
        if other.scoring.methodology.is_some() {
            base.scoring.methodology = other.scoring.methodology.clone();
        }
        if other.scoring.top_gaps.is_some() {
            base.scoring.top_gaps = other.scoring.top_gaps;
        }

        // Rollup
        if !other.rollup.dimensions.is_empty() {
            base.rollup.dimensions = other.rollup.dimensions.clone();
        }
        if other.rollup.hierarchical.is_some() {
            base.rollup.hierarchical = other.rollup.hierarchical;
        }

        // Quality
        let q = &other.quality;
        let b = &mut base.quality;
        for (dst, src) in [
            (&mut b.fresh_days, q.fresh_days),
            (&mut b.recent_days, q.recent_days),
            (&mut b.aging_days, q.aging_days),
            (&mut b.stale_days, q.stale_days),
        ] {
            if src.is_some() {
                *dst = src;
            }
        }
        for (dst, src) in [
            (&mut b.excellent, q.excellent),
            (&mut b.good, q.good),
            (&mut b.fair, q.fair),
            (&mut b.poor, q.poor),
        ] {
            if src.is_some() {
                *dst = src;
            }
        }

        // Dimensions
        base.dimensions.weights.merge(&other.dimensions.weights);
        if other.dimensions.profile.is_some() {
            base.dimensions.profile = other.dimensions.profile.clone();
        }
        for (name, overrides) in &other.dimensions.profiles {
            base.dimensions
                .profiles
                .entry(name.clone())
                .or_default()
                .merge(overrides);
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ASSAY_PIPELINE_BATCH_SIZE`, `ASSAY_SCORING_METHODOLOGY`, etc.
    pub fn apply_env_overrides(config: &mut AssayConfig) {
        if let Ok(val) = std::env::var("ASSAY_PIPELINE_BATCH_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.pipeline.batch_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASSAY_PIPELINE_ON_ERROR") {
            config.pipeline.on_error = Some(val);
        }
        if let Ok(val) = std::env::var("ASSAY_PIPELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASSAY_SCORING_METHODOLOGY") {
            config.scoring.methodology = Some(val);
        }
        if let Ok(val) = std::env::var("ASSAY_DIMENSIONS_PROFILE") {
            config.dimensions.profile = Some(val);
        }
        if let Ok(val) = std::env::var("ASSAY_SCORING_TOP_GAPS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scoring.top_gaps = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut AssayConfig, cli: &CliOverrides) {
        if let Some(v) = cli.batch_size {
            config.pipeline.batch_size = Some(v);
        }
        if let Some(ref v) = cli.on_error {
            config.pipeline.on_error = Some(v.clone());
        }
        if let Some(ref v) = cli.methodology {
            config.scoring.methodology = Some(v.clone());
        }
        if let Some(v) = cli.top_gaps {
            config.scoring.top_gaps = Some(v);
        }
        if !cli.dimensions.is_empty() {
            config.rollup.dimensions = cli.dimensions.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
