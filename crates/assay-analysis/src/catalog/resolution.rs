//! Tenant field resolution: canonical source, tenant override, or excluded.
//!
//! Kept as pure functions so precedence can be tested without evaluating
//! any asset.

use serde::{Deserialize, Serialize};

use assay_core::types::{FieldDefinition, FieldSource, MappingStatus, TenantConfiguration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Listed in the tenant's excluded fields.
    ExplicitlyExcluded,
    /// The tenant rejected the mapping.
    MappingRejected,
    /// An active mapping with no source.
    NoSource,
}

/// Outcome of resolving one field against a tenant configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldResolution {
    Canonical,
    Override(FieldSource),
    Excluded(ExclusionReason),
}

impl FieldResolution {
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded(_))
    }
}

/// Resolve one field. Precedence, first match wins:
/// excluded list, rejected mapping, auto/confirmed mapping (override, or
/// excluded when it has no source), pending or no mapping (canonical).
///
/// An "absent" mapping that excludes a field is an active mapping whose
/// source is missing. A field with no mapping entry at all keeps its
/// canonical source.
pub fn resolve_field(field: &FieldDefinition, tenant: &TenantConfiguration) -> FieldResolution {
    if tenant.is_excluded(&field.id) {
        return FieldResolution::Excluded(ExclusionReason::ExplicitlyExcluded);
    }
    let Some(mapping) = tenant.mapping_for(&field.id) else {
        return FieldResolution::Canonical;
    };
    match mapping.status {
        MappingStatus::Rejected => FieldResolution::Excluded(ExclusionReason::MappingRejected),
        MappingStatus::Pending => FieldResolution::Canonical,
        MappingStatus::Auto | MappingStatus::Confirmed => match &mapping.source {
            Some(source) => FieldResolution::Override(source.clone()),
            None => FieldResolution::Excluded(ExclusionReason::NoSource),
        },
    }
}

/// Apply tenant resolution to a field list and merge tenant custom fields.
///
/// Custom fields are taken verbatim; a custom field replaces a canonical
/// field with the same id. The excluded list applies to custom fields too.
pub fn resolve_fields(
    fields: &[FieldDefinition],
    tenant: &TenantConfiguration,
) -> Vec<FieldDefinition> {
    let mut resolved: Vec<FieldDefinition> = fields
        .iter()
        .filter_map(|field| match resolve_field(field, tenant) {
            FieldResolution::Canonical => Some(field.clone()),
            FieldResolution::Override(source) => Some(FieldDefinition {
                source,
                ..field.clone()
            }),
            FieldResolution::Excluded(reason) => {
                tracing::debug!(field = %field.id, ?reason, tenant = %tenant.tenant_id, "field excluded");
                None
            }
        })
        .collect();

    for custom in &tenant.custom_fields {
        if tenant.is_excluded(&custom.id) {
            continue;
        }
        match resolved.iter_mut().find(|f| f.id == custom.id) {
            Some(existing) => *existing = custom.clone(),
            None => resolved.push(custom.clone()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::types::{FieldCategory, FieldMapping, Signal, SignalContribution};

    fn owner_field() -> FieldDefinition {
        FieldDefinition::new(
            "owner_users",
            "Owner users",
            FieldCategory::Ownership,
            FieldSource::native("ownerUsers"),
        )
        .contributes(SignalContribution::new(Signal::Ownership, 1.0))
    }

    #[test]
    fn test_no_mapping_is_canonical() {
        let tenant = TenantConfiguration::default();
        assert_eq!(resolve_field(&owner_field(), &tenant), FieldResolution::Canonical);
    }

    #[test]
    fn test_excluded_list_beats_confirmed_mapping() {
        let tenant = TenantConfiguration::new("t1")
            .with_mapping(FieldMapping::new(
                "owner_users",
                Some(FieldSource::native("steward")),
                MappingStatus::Confirmed,
            ))
            .with_excluded("owner_users");
        assert_eq!(
            resolve_field(&owner_field(), &tenant),
            FieldResolution::Excluded(ExclusionReason::ExplicitlyExcluded)
        );
    }

    #[test]
    fn test_mapping_statuses() {
        let with = |status, source: Option<FieldSource>| {
            let tenant = TenantConfiguration::new("t1")
                .with_mapping(FieldMapping::new("owner_users", source, status));
            resolve_field(&owner_field(), &tenant)
        };
        let alt = FieldSource::native("businessOwner");

        assert_eq!(
            with(MappingStatus::Auto, Some(alt.clone())),
            FieldResolution::Override(alt.clone())
        );
        assert_eq!(
            with(MappingStatus::Confirmed, Some(alt.clone())),
            FieldResolution::Override(alt.clone())
        );
        assert_eq!(with(MappingStatus::Pending, Some(alt.clone())), FieldResolution::Canonical);
        assert_eq!(
            with(MappingStatus::Rejected, Some(alt)),
            FieldResolution::Excluded(ExclusionReason::MappingRejected)
        );
        assert_eq!(
            with(MappingStatus::Confirmed, None),
            FieldResolution::Excluded(ExclusionReason::NoSource)
        );
        assert_eq!(
            with(MappingStatus::Auto, None),
            FieldResolution::Excluded(ExclusionReason::NoSource)
        );
    }

    #[test]
    fn test_resolve_fields_applies_override_and_custom_fields() {
        let custom = FieldDefinition::new(
            "cost_center",
            "Cost center",
            FieldCategory::Ownership,
            FieldSource::custom_metadata("Finance", "Cost Center"),
        )
        .contributes(SignalContribution::new(Signal::Ownership, 0.3));
        let tenant = TenantConfiguration::new("t1")
            .with_mapping(FieldMapping::new(
                "owner_users",
                Some(FieldSource::native("businessOwner")),
                MappingStatus::Auto,
            ))
            .with_custom_field(custom.clone());

        let resolved = resolve_fields(&[owner_field()], &tenant);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].source, FieldSource::native("businessOwner"));
        assert_eq!(resolved[1], custom);
    }

    #[test]
    fn test_custom_field_replaces_canonical_with_same_id() {
        let replacement = FieldDefinition::new(
            "owner_users",
            "Owner (HR system)",
            FieldCategory::Ownership,
            FieldSource::custom_metadata("HR", "Owner"),
        )
        .contributes(SignalContribution::new(Signal::Ownership, 1.0));
        let tenant = TenantConfiguration::new("t1").with_custom_field(replacement.clone());
        let resolved = resolve_fields(&[owner_field()], &tenant);
        assert_eq!(resolved, vec![replacement]);
    }
}
