//! Five interchangeable scoring methodologies behind one entry point.

pub mod checklist;
pub mod maturity;
pub mod qtriplet;
pub mod types;
pub mod weighted;

use assay_core::types::Signal;

pub use maturity::MaturityStage;
pub use types::*;

use crate::catalog::Catalog;

/// Core signals used when no use case narrows the checklist.
pub const CORE_SIGNALS: [Signal; 4] = [
    Signal::Ownership,
    Signal::Semantics,
    Signal::Lineage,
    Signal::Sensitivity,
];

/// Score `input` with `methodology`, optionally narrowed to one use case.
///
/// An unknown use-case id yields a zero-valued score.
pub fn score(
    methodology: Methodology,
    catalog: &Catalog,
    input: &MethodologyInput,
    use_case_id: Option<&str>,
) -> MethodologyScore {
    let profile = match use_case_id {
        Some(id) => match catalog.use_case(id) {
            Some(profile) => Some(profile),
            None => {
                tracing::warn!(use_case = %id, %methodology, "unknown use case; zero score");
                return MethodologyScore::empty(methodology, Some(id));
            }
        },
        None => None,
    };

    let mut result = match methodology {
        Methodology::WeightedMeasures => weighted::weighted_measures(catalog, input, profile),
        Methodology::WeightedDimensions => weighted::weighted_dimensions(input, profile),
        Methodology::Checklist => checklist::checklist(input, profile),
        Methodology::QTriplet => qtriplet::qtriplet(catalog, input, profile),
        Methodology::Maturity => maturity::maturity(input),
    };
    result.overall_score = sanitize(result.overall_score);
    result.use_case_id = use_case_id.map(str::to_string);
    result
}

/// Clamp to `[0, 100]`; NaN becomes 0.
fn sanitize(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
