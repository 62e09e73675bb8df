//! Three-phase remediation planning over detected gaps.

pub mod builder;
pub mod types;

pub use builder::{build_plan, MVP_QUICK_WIN_CAP};
pub use types::*;
