//! Tenant-specific field mapping overrides.

use serde::{Deserialize, Serialize};

use super::field::{FieldDefinition, FieldId, FieldSource};

/// Review status of a tenant field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    /// Proposed automatically and in effect.
    Auto,
    /// Confirmed by a tenant admin.
    Confirmed,
    /// Explicitly rejected; the field is not evaluated.
    Rejected,
    /// Awaiting review; the canonical source stays in effect.
    Pending,
}

/// Per-field source override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub field_id: FieldId,
    /// `None` means the tenant has no source for this field.
    #[serde(default)]
    pub source: Option<FieldSource>,
    pub status: MappingStatus,
}

impl FieldMapping {
    pub fn new(field_id: &str, source: Option<FieldSource>, status: MappingStatus) -> Self {
        Self {
            field_id: field_id.to_string(),
            source,
            status,
        }
    }
}

/// Tenant configuration consumed by the assessment pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantConfiguration {
    pub tenant_id: String,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(default)]
    pub excluded_fields: Vec<FieldId>,
    /// Tenant-defined fields, merged into the catalog verbatim.
    #[serde(default)]
    pub custom_fields: Vec<FieldDefinition>,
}

impl Default for TenantConfiguration {
    fn default() -> Self {
        Self::new("default")
    }
}

impl TenantConfiguration {
    pub fn new(tenant_id: &str) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            field_mappings: Vec::new(),
            excluded_fields: Vec::new(),
            custom_fields: Vec::new(),
        }
    }

    pub fn with_mapping(mut self, mapping: FieldMapping) -> Self {
        self.field_mappings.push(mapping);
        self
    }

    pub fn with_excluded(mut self, field_id: &str) -> Self {
        self.excluded_fields.push(field_id.to_string());
        self
    }

    pub fn with_custom_field(mut self, field: FieldDefinition) -> Self {
        self.custom_fields.push(field);
        self
    }

    /// The last mapping registered for a field wins.
    pub fn mapping_for(&self, field_id: &str) -> Option<&FieldMapping> {
        self.field_mappings.iter().rev().find(|m| m.field_id == field_id)
    }

    pub fn is_excluded(&self, field_id: &str) -> bool {
        self.excluded_fields.iter().any(|f| f == field_id)
    }
}
