//! Field evaluation: one field descriptor against one asset record.

pub mod evaluator;
pub mod presence;

pub use evaluator::{FieldEvaluator, FieldResult};
pub use presence::is_present;
