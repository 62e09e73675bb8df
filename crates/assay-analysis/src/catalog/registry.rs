//! The `Catalog`: one immutable value holding every registry.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use assay_core::errors::CatalogError;
use assay_core::types::{FieldDefinition, FieldSource, Signal, TenantConfiguration};

use super::fields::standard_fields;
use super::resolution::resolve_fields;
use super::signals::{standard_signals, SignalDefinition};
use super::use_cases::{standard_use_cases, CapabilityRequirements, UseCaseProfile};

/// Signal definitions, field catalog and use-case profiles.
///
/// Built once and passed by reference into every pipeline call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    signals: Vec<SignalDefinition>,
    fields: Vec<FieldDefinition>,
    use_cases: Vec<UseCaseProfile>,
}

impl Catalog {
    pub fn new(
        signals: Vec<SignalDefinition>,
        fields: Vec<FieldDefinition>,
        use_cases: Vec<UseCaseProfile>,
    ) -> Self {
        Self {
            signals,
            fields,
            use_cases,
        }
    }

    /// The built-in registries.
    pub fn standard() -> Self {
        Self::new(standard_signals(), standard_fields(), standard_use_cases())
    }

    /// Check structural consistency of the registries.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(issue) = self.field_issues().into_iter().next() {
            return Err(issue);
        }

        let mut use_case_ids = FxHashSet::default();
        for profile in &self.use_cases {
            let invalid = |message: &str| CatalogError::InvalidProfile {
                use_case: profile.id.clone(),
                message: message.to_string(),
            };
            if !use_case_ids.insert(profile.id.as_str()) {
                return Err(invalid("duplicate use case id"));
            }
            if profile.signals.is_empty() || profile.total_weight() <= 0.0 {
                return Err(invalid("signal weights must sum to a positive value"));
            }
            if profile.signals.iter().any(|s| s.weight < 0.0) {
                return Err(invalid("signal weights must not be negative"));
            }
            let t = profile.thresholds;
            if !(0.0 < t.partial && t.partial < t.ready && t.ready <= 1.0) {
                return Err(invalid("thresholds must satisfy 0 < partial < ready <= 1"));
            }
            if let Some(signal) = profile
                .critical_signals
                .iter()
                .find(|s| !profile.includes(**s))
            {
                return Err(invalid(&format!("critical signal {signal} is not weighted")));
            }
        }
        Ok(())
    }

    /// Problems with individual field definitions, in catalog order.
    ///
    /// None of these stop evaluation: a field without contributions feeds
    /// no signal, and a bad classification pattern evaluates to UNKNOWN.
    pub fn field_issues(&self) -> Vec<CatalogError> {
        let mut issues = Vec::new();
        let mut seen = FxHashSet::default();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                issues.push(CatalogError::DuplicateField(field.id.clone()));
            }
            if field.contributions.is_empty() {
                issues.push(CatalogError::FieldWithoutContributions {
                    field: field.id.clone(),
                });
            }
            if let FieldSource::Classification {
                any_of: None,
                pattern: Some(pattern),
            } = &field.source
            {
                if let Err(e) = Regex::new(pattern) {
                    issues.push(CatalogError::InvalidPattern {
                        field: field.id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        issues
    }

    /// A copy of this catalog with tenant overrides, exclusions and custom
    /// fields applied.
    pub fn for_tenant(&self, tenant: &TenantConfiguration) -> Self {
        Self {
            signals: self.signals.clone(),
            fields: resolve_fields(&self.fields, tenant),
            use_cases: self.use_cases.clone(),
        }
    }

    pub fn signals(&self) -> &[SignalDefinition] {
        &self.signals
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn use_cases(&self) -> &[UseCaseProfile] {
        &self.use_cases
    }

    pub fn signal(&self, signal: Signal) -> Option<&SignalDefinition> {
        self.signals.iter().find(|d| d.signal == signal)
    }

    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn use_case(&self, id: &str) -> Option<&UseCaseProfile> {
        self.use_cases.iter().find(|u| u.id == id)
    }

    pub fn use_case_ids(&self) -> Vec<String> {
        self.use_cases.iter().map(|u| u.id.clone()).collect()
    }

    /// Fields applicable to an asset type.
    pub fn fields_for_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
        self.fields.iter().filter(move |f| f.applies_to(type_name))
    }

    /// Fields contributing to any signal of a profile.
    pub fn fields_for_use_case<'a>(
        &'a self,
        profile: &'a UseCaseProfile,
    ) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.contributions.iter().any(|c| profile.includes(c.signal)))
    }

    /// Merged requirements of the named use cases. Unknown ids are skipped
    /// with a warning.
    pub fn requirements_for(&self, use_case_ids: &[String]) -> CapabilityRequirements {
        let mut merged = CapabilityRequirements::default();
        for id in use_case_ids {
            match self.use_case(id) {
                Some(profile) => merged.merge(&profile.requirements()),
                None => tracing::warn!(use_case = %id, "unknown use case; no requirements"),
            }
        }
        merged
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
