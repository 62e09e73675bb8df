//! Assessable field descriptors.

use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// Stable field identifier (e.g. `owner_users`).
pub type FieldId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    Ownership,
    Documentation,
    Lineage,
    Classification,
    Access,
    Quality,
    Freshness,
    Usage,
    Trust,
    Ai,
}

/// Where a field's value comes from on a raw asset record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSource {
    /// A single flat attribute.
    Native { attribute: String },
    /// The first present attribute among several.
    NativeAny { attributes: Vec<String> },
    /// A key inside a custom-metadata set.
    CustomMetadata { set: String, attribute: String },
    /// A classification tag match: exact `any_of` list, else regex `pattern`.
    Classification {
        #[serde(default)]
        any_of: Option<Vec<String>>,
        #[serde(default)]
        pattern: Option<String>,
    },
    /// `{relation}Count` attribute above `threshold` (default 0).
    Relationship {
        relation: String,
        #[serde(default)]
        threshold: Option<f64>,
    },
    /// Requires an externally computed evaluator.
    Derived { evaluator: String },
}

impl FieldSource {
    pub fn native(attribute: &str) -> Self {
        Self::Native {
            attribute: attribute.to_string(),
        }
    }

    pub fn native_any(attributes: &[&str]) -> Self {
        Self::NativeAny {
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn custom_metadata(set: &str, attribute: &str) -> Self {
        Self::CustomMetadata {
            set: set.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub fn classification_any_of(tags: &[&str]) -> Self {
        Self::Classification {
            any_of: Some(tags.iter().map(|t| t.to_string()).collect()),
            pattern: None,
        }
    }

    pub fn classification_pattern(pattern: &str) -> Self {
        Self::Classification {
            any_of: None,
            pattern: Some(pattern.to_string()),
        }
    }

    pub fn relationship(relation: &str, threshold: Option<f64>) -> Self {
        Self::Relationship {
            relation: relation.to_string(),
            threshold,
        }
    }

    pub fn derived(evaluator: &str) -> Self {
        Self::Derived {
            evaluator: evaluator.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Native { .. } => "native",
            Self::NativeAny { .. } => "native_any",
            Self::CustomMetadata { .. } => "custom_metadata",
            Self::Classification { .. } => "classification",
            Self::Relationship { .. } => "relationship",
            Self::Derived { .. } => "derived",
        }
    }
}

/// How much a field feeds a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal: Signal,
    pub weight: f64,
    #[serde(default)]
    pub required: bool,
    /// Presence of the field counts against the signal.
    #[serde(default)]
    pub negative: bool,
}

impl SignalContribution {
    pub fn new(signal: Signal, weight: f64) -> Self {
        Self {
            signal,
            weight,
            required: false,
            negative: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }
}

/// A registry entry describing one assessable metadata attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub label: String,
    pub category: FieldCategory,
    pub source: FieldSource,
    /// Asset type names this field applies to. Empty means every type.
    #[serde(default)]
    pub asset_types: Vec<String>,
    pub contributions: Vec<SignalContribution>,
    /// Weight in completeness-style methodologies.
    #[serde(default)]
    pub completeness_weight: Option<f64>,
}

impl FieldDefinition {
    pub fn new(id: &str, label: &str, category: FieldCategory, source: FieldSource) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            category,
            source,
            asset_types: Vec::new(),
            contributions: Vec::new(),
            completeness_weight: None,
        }
    }

    pub fn for_types(mut self, types: &[&str]) -> Self {
        self.asset_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn contributes(mut self, contribution: SignalContribution) -> Self {
        self.contributions.push(contribution);
        self
    }

    pub fn completeness(mut self, weight: f64) -> Self {
        self.completeness_weight = Some(weight);
        self
    }

    pub fn applies_to(&self, type_name: &str) -> bool {
        self.asset_types.is_empty() || self.asset_types.iter().any(|t| t == type_name)
    }

    pub fn contribution_for(&self, signal: Signal) -> Option<&SignalContribution> {
        self.contributions.iter().find(|c| c.signal == signal)
    }

    pub fn contributes_to(&self, signal: Signal) -> bool {
        self.contribution_for(signal).is_some()
    }
}
