//! Signal composition: field results → per-signal tri-state, score and
//! confidence.

pub mod composer;
pub mod set;

pub use composer::{compose_signal, compose_signals, SignalContributor, SignalResult};
pub use set::SignalSet;
