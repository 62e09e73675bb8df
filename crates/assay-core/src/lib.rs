//! Core types, traits, errors, config, events and tracing for assay.
//!
//! `assay-analysis` builds the assessment pipeline on top of these
//! definitions. Nothing in this crate performs network or disk I/O apart
//! from configuration loading.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;
