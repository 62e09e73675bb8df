//! Quality bands for 0-100 scores, per-asset timeliness, the weighted
//! five-dimension quality score and lineage coverage.

pub mod bands;
pub mod dimensions;
pub mod lineage;
pub mod timeliness;

pub use bands::QualityBand;
pub use dimensions::{score_dimensions, DimensionScores};
pub use lineage::{lineage_metrics, LineageMetrics, LineageRollup};
pub use timeliness::{days_since_update, timeliness_score};
