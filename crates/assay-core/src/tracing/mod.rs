//! Observability for assay.
//! `tracing` crate with `EnvFilter`, per-module log levels via `ASSAY_LOG`.

pub mod setup;

pub use setup::init_tracing;
