//! Shared constants for the assay engine.

/// assay version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of assets evaluated per batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default batch error policy.
pub const DEFAULT_ERROR_POLICY: &str = "warn";

/// Default scoring methodology.
pub const DEFAULT_METHODOLOGY: &str = "weighted_dimensions";

/// Default number of top gaps reported in a summary.
pub const DEFAULT_TOP_GAPS: usize = 10;

/// Default rollup dimension.
pub const DEFAULT_ROLLUP_DIMENSION: &str = "connection";

/// Recognised methodology names.
pub const METHODOLOGY_NAMES: &[&str] = &[
    "weighted_measures",
    "weighted_dimensions",
    "checklist",
    "qtriplet",
    "maturity",
];

/// Recognised rollup dimension names.
pub const DIMENSION_NAMES: &[&str] = &[
    "connection",
    "database",
    "schema",
    "domain",
    "owner",
    "certification",
    "asset_type",
    "classification",
];

/// Timeliness bands in days: fresh, recent, aging, stale.
pub const DEFAULT_TIMELINESS_BANDS: [u32; 4] = [7, 30, 90, 180];

/// Quality band lower bounds (0-100): excellent, good, fair, poor.
pub const DEFAULT_QUALITY_BANDS: [f64; 4] = [80.0, 60.0, 40.0, 20.0];

/// Quality dimension weights: completeness, accuracy, timeliness,
/// consistency, usability.
pub const DEFAULT_DIMENSION_WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];
