//! Configuration system for assay.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod assay_config;
pub mod dimension_config;
pub mod pipeline_config;
pub mod quality_config;
pub mod rollup_config;
pub mod scoring_config;

pub use assay_config::{AssayConfig, CliOverrides};
pub use dimension_config::{DimensionConfig, DimensionWeightOverrides, DimensionWeights};
pub use pipeline_config::{ErrorPolicy, PipelineConfig};
pub use quality_config::QualityConfig;
pub use rollup_config::RollupConfig;
pub use scoring_config::ScoringConfig;
