//! Immutable registries: signal definitions, field catalog, use-case
//! profiles, and tenant field resolution.

pub mod fields;
pub mod registry;
pub mod resolution;
pub mod signals;
pub mod use_cases;

pub use registry::Catalog;
pub use resolution::{resolve_field, resolve_fields, ExclusionReason, FieldResolution};
pub use signals::SignalDefinition;
pub use use_cases::{CapabilityRequirements, ReadinessThresholds, UseCaseProfile, UseCaseSignal};
