//! Domain data model shared by every assay crate.
//!
//! Signals, tri-state presence, field descriptors, consumed asset records,
//! tenant overrides and assessment scopes.

pub mod asset;
pub mod collections;
pub mod field;
pub mod scope;
pub mod signal;
pub mod tenant;
pub mod tristate;

pub use asset::{AssetRecord, AttributeMap, HierarchyPath};
pub use collections::{FxHashMap, FxHashSet};
pub use field::{FieldCategory, FieldDefinition, FieldId, FieldSource, SignalContribution};
pub use scope::AssessmentScope;
pub use signal::{AggregationRule, Signal, SignalSeverity, Workstream};
pub use tenant::{FieldMapping, MappingStatus, TenantConfiguration};
pub use tristate::TriState;
