//! Cross-asset aggregation by dimension, the connection → database →
//! schema tree, and adoption phases.

pub mod adoption;
pub mod aggregator;
pub mod hierarchy;
pub mod types;

pub use adoption::{core_coverage, determine_adoption_phase, AdoptionPhase};
pub use aggregator::{aggregate_group, aggregate_signals, aggregate_use_cases, rollup_by_dimension};
pub use hierarchy::build_hierarchy;
pub use types::*;
