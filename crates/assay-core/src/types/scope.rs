//! Assessment scope: which assets a run covers.

use serde::{Deserialize, Serialize};

use super::asset::AssetRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScope {
    /// Explicit asset GUIDs. Empty means no GUID restriction.
    #[serde(default)]
    pub guids: Vec<String>,
    /// Asset type names. Empty means every type.
    #[serde(default)]
    pub asset_types: Vec<String>,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl AssessmentScope {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_connection(connection: &str) -> Self {
        Self {
            connection: Some(connection.to_string()),
            ..Default::default()
        }
    }

    pub fn with_asset_types(mut self, types: &[&str]) -> Self {
        self.asset_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether an asset falls inside this scope (ignores `limit`).
    pub fn matches(&self, asset: &AssetRecord) -> bool {
        if !self.guids.is_empty() && !self.guids.iter().any(|g| g == &asset.guid) {
            return false;
        }
        if !self.asset_types.is_empty() && !self.asset_types.iter().any(|t| t == &asset.type_name) {
            return false;
        }
        if self.connection.is_none() && self.database.is_none() && self.schema.is_none() {
            return true;
        }

        let path = asset.hierarchy_path();
        let level_matches = |wanted: &Option<String>, actual: &Option<String>| match wanted {
            Some(w) => actual.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(w)),
            None => true,
        };
        level_matches(&self.connection, &path.connection)
            && level_matches(&self.database, &path.database)
            && level_matches(&self.schema, &path.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(guid: &str, qn: &str) -> AssetRecord {
        AssetRecord::new(guid, "Table", qn)
    }

    #[test]
    fn test_empty_scope_matches_everything() {
        assert!(AssessmentScope::all().matches(&table("a", "x")));
    }

    #[test]
    fn test_connection_and_type_filters() {
        let scope = AssessmentScope::for_connection("default/snowflake/1").with_asset_types(&["Table"]);
        assert!(scope.matches(&table("a", "default/snowflake/1/DB/S/T")));
        assert!(!scope.matches(&table("b", "default/bigquery/2/DB/S/T")));

        let column = AssetRecord::new("c", "Column", "default/snowflake/1/DB/S/T/C");
        assert!(!scope.matches(&column));
    }

    #[test]
    fn test_database_filter_is_case_insensitive() {
        let scope = AssessmentScope {
            database: Some("sales".into()),
            ..Default::default()
        };
        assert!(scope.matches(&table("a", "default/snowflake/1/SALES/S/T")));
        assert!(!scope.matches(&table("b", "default/snowflake/1/HR/S/T")));
    }
}
