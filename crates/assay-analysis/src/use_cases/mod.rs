//! Use-case readiness assessment.

pub mod assessor;
pub mod types;

pub use assessor::{
    assess_use_case, assess_use_case_by_id, effort_for_signal, gap_severity_for, readiness_level,
    SIGNAL_MET_THRESHOLD,
};
pub use types::*;
