//! Resolves `FieldSource` descriptors against asset records.

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use assay_core::errors::EvaluationError;
use assay_core::types::{AssetRecord, FieldDefinition, FieldId, FieldSource, TriState};

use super::presence::is_present;

/// Presence of one field on one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResult {
    pub field_id: FieldId,
    pub present: TriState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldResult {
    fn known(field_id: &str, present: bool, value: Option<Value>) -> Self {
        Self {
            field_id: field_id.to_string(),
            present: present.into(),
            value,
            error: None,
        }
    }

    fn unknown(field_id: &str, error: Option<String>) -> Self {
        Self {
            field_id: field_id.to_string(),
            present: TriState::Unknown,
            value: None,
            error,
        }
    }
}

/// Field evaluator with classification patterns compiled up front.
///
/// Never fails: any evaluation error degrades the field to UNKNOWN with
/// the error rendered into `FieldResult::error`.
#[derive(Debug, Clone, Default)]
pub struct FieldEvaluator {
    patterns: FxHashMap<FieldId, Result<Regex, String>>,
}

impl FieldEvaluator {
    pub fn new(fields: &[FieldDefinition]) -> Self {
        let mut patterns = FxHashMap::default();
        for field in fields {
            if let FieldSource::Classification {
                any_of: None,
                pattern,
            } = &field.source
            {
                let pattern = pattern.as_deref().unwrap_or(".*");
                patterns.insert(
                    field.id.clone(),
                    Regex::new(pattern).map_err(|e| e.to_string()),
                );
            }
        }
        Self { patterns }
    }

    /// Evaluate a single field.
    pub fn evaluate(&self, field: &FieldDefinition, asset: &AssetRecord) -> FieldResult {
        match self.evaluate_source(field, asset) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(field = %field.id, asset = %asset.guid, error = %err, "field degraded to UNKNOWN");
                FieldResult::unknown(&field.id, Some(err.to_string()))
            }
        }
    }

    /// Evaluate every field applicable to the asset's type, in catalog order.
    pub fn evaluate_all<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a FieldDefinition>,
        asset: &AssetRecord,
    ) -> Vec<FieldResult> {
        fields
            .into_iter()
            .filter(|f| f.applies_to(&asset.type_name))
            .map(|f| self.evaluate(f, asset))
            .collect()
    }

    fn evaluate_source(
        &self,
        field: &FieldDefinition,
        asset: &AssetRecord,
    ) -> Result<FieldResult, EvaluationError> {
        let id = field.id.as_str();
        let result = match &field.source {
            FieldSource::Native { attribute } => {
                let value = asset.attribute(attribute).filter(|v| is_present(v));
                FieldResult::known(id, value.is_some(), value.cloned())
            }
            FieldSource::NativeAny { attributes } => {
                let value = attributes
                    .iter()
                    .find_map(|a| asset.attribute(a).filter(|v| is_present(v)));
                FieldResult::known(id, value.is_some(), value.cloned())
            }
            FieldSource::CustomMetadata { set, attribute } => {
                let value = asset
                    .custom_metadata_set(set)
                    .and_then(|bag| bag.get(attribute))
                    .filter(|v| is_present(v));
                FieldResult::known(id, value.is_some(), value.cloned())
            }
            FieldSource::Classification { any_of, .. } => {
                let tags = asset.classifications();
                let matched = match any_of {
                    Some(allowed) => tags.iter().find(|t| allowed.contains(t)),
                    None => {
                        let regex = self.pattern_for(field)?;
                        tags.iter().find(|t| regex.is_match(t))
                    }
                };
                FieldResult::known(id, matched.is_some(), matched.map(|t| Value::String(t.clone())))
            }
            FieldSource::Relationship {
                relation,
                threshold,
            } => {
                let attribute = format!("{relation}Count");
                match asset.attribute(&attribute) {
                    None | Some(Value::Null) => FieldResult::known(id, false, None),
                    Some(raw) => {
                        let count = relationship_count(raw).ok_or_else(|| {
                            EvaluationError::UnexpectedAttributeType {
                                attribute: attribute.clone(),
                                expected: "number",
                            }
                        })?;
                        FieldResult::known(
                            id,
                            count > threshold.unwrap_or(0.0),
                            Some(raw.clone()),
                        )
                    }
                }
            }
            FieldSource::Derived { .. } => FieldResult::unknown(id, None),
        };
        Ok(result)
    }

    fn pattern_for(&self, field: &FieldDefinition) -> Result<Regex, EvaluationError> {
        let compiled = match self.patterns.get(&field.id) {
            Some(compiled) => compiled.clone(),
            // Field not seen at construction time (e.g. added after the
            // evaluator was built): compile on demand.
            None => match &field.source {
                FieldSource::Classification { pattern, .. } => {
                    Regex::new(pattern.as_deref().unwrap_or(".*")).map_err(|e| e.to_string())
                }
                _ => Err("not a classification field".to_string()),
            },
        };
        compiled.map_err(|message| EvaluationError::InvalidPattern {
            field: field.id.clone(),
            message,
        })
    }
}

fn relationship_count(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Array(items) => Some(items.len() as f64),
        _ => None,
    }
}
