//! Raw asset records as handed over by the asset-fetching collaborator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat attribute bag of one asset.
pub type AttributeMap = serde_json::Map<String, Value>;

/// Connection → database → schema placement of an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyPath {
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

/// One cataloged asset: identity, flat attributes, custom metadata sets and
/// classification tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub guid: String,
    pub type_name: String,
    pub qualified_name: String,
    #[serde(default)]
    pub attributes: AttributeMap,
    /// Custom metadata set name → attribute bag.
    #[serde(default)]
    pub custom_metadata: Option<BTreeMap<String, AttributeMap>>,
    #[serde(default)]
    pub classifications: Option<Vec<String>>,
    /// Precomputed hierarchy, when the fetcher already resolved it.
    #[serde(default)]
    pub hierarchy: Option<HierarchyPath>,
}

impl AssetRecord {
    pub fn new(guid: &str, type_name: &str, qualified_name: &str) -> Self {
        Self {
            guid: guid.to_string(),
            type_name: type_name.to_string(),
            qualified_name: qualified_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn with_custom_metadata(mut self, set: &str, attribute: &str, value: impl Into<Value>) -> Self {
        self.custom_metadata
            .get_or_insert_with(BTreeMap::new)
            .entry(set.to_string())
            .or_default()
            .insert(attribute.to_string(), value.into());
        self
    }

    pub fn with_classifications(mut self, tags: &[&str]) -> Self {
        self.classifications = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_hierarchy(mut self, hierarchy: HierarchyPath) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// String value of an attribute, or the first string of an array attribute.
    pub fn first_string(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .find(|s| !s.trim().is_empty()),
            _ => None,
        }
    }

    /// Epoch-millisecond timestamp attribute.
    pub fn epoch_millis(&self, name: &str) -> Option<i64> {
        match self.attributes.get(name)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn classifications(&self) -> &[String] {
        self.classifications.as_deref().unwrap_or(&[])
    }

    pub fn custom_metadata_set(&self, set: &str) -> Option<&AttributeMap> {
        self.custom_metadata.as_ref()?.get(set)
    }

    /// Display name: the `name` attribute, else the last qualified-name segment.
    pub fn name(&self) -> &str {
        self.first_string("name").unwrap_or_else(|| {
            self.qualified_name
                .rsplit('/')
                .next()
                .unwrap_or(self.qualified_name.as_str())
        })
    }

    /// Resolve connection/database/schema for this asset.
    ///
    /// Each level prefers the precomputed hierarchy, then the explicit
    /// attribute (`connectionQualifiedName`, `databaseName`, `schemaName`),
    /// then the qualified name `tenant/connector/epoch/DATABASE/SCHEMA/...`.
    pub fn hierarchy_path(&self) -> HierarchyPath {
        let precomputed = self.hierarchy.clone().unwrap_or_default();
        let segments: Vec<&str> = self
            .qualified_name
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let from_name_connection = (segments.len() >= 3).then(|| segments[..3].join("/"));
        let from_name_database = segments.get(3).map(|s| s.to_string());
        let from_name_schema = segments.get(4).map(|s| s.to_string());

        HierarchyPath {
            connection: precomputed
                .connection
                .or_else(|| self.first_string("connectionQualifiedName").map(str::to_string))
                .or(from_name_connection),
            database: precomputed
                .database
                .or_else(|| self.first_string("databaseName").map(str::to_string))
                .or(from_name_database),
            schema: precomputed
                .schema
                .or_else(|| self.first_string("schemaName").map(str::to_string))
                .or(from_name_schema),
        }
    }
}
