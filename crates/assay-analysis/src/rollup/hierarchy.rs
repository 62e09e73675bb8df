//! Connection → database → schema tree, built bottom-up.

use std::collections::BTreeMap;

use super::aggregator::{aggregate_group, sort_nodes};
use super::types::{RollupDimension, RollupNode};
use crate::pipeline::AssetAssessment;

type SchemaKey<'a> = (&'a str, &'a str, &'a str);

/// Build the tree. Each level sorts independently by asset count
/// descending, then by value.
pub fn build_hierarchy(assets: &[AssetAssessment]) -> Vec<RollupNode> {
    let mut leaves: BTreeMap<SchemaKey<'_>, Vec<&AssetAssessment>> = BTreeMap::new();
    for assessment in assets {
        let a = &assessment.asset;
        leaves
            .entry((a.connection.as_str(), a.database.as_str(), a.schema.as_str()))
            .or_default()
            .push(assessment);
    }

    // schema level
    let mut databases: BTreeMap<(&str, &str), (Vec<&AssetAssessment>, Vec<RollupNode>)> = BTreeMap::new();
    for ((connection, database, schema), members) in leaves {
        let node = aggregate_group(RollupDimension::Schema, schema, &members);
        let entry = databases.entry((connection, database)).or_default();
        entry.0.extend(members);
        entry.1.push(node);
    }

    // database level
    let mut connections: BTreeMap<&str, (Vec<&AssetAssessment>, Vec<RollupNode>)> = BTreeMap::new();
    for ((connection, database), (members, mut schemas)) in databases {
        sort_nodes(&mut schemas);
        let mut node = aggregate_group(RollupDimension::Database, database, &members);
        node.children = schemas;
        let entry = connections.entry(connection).or_default();
        entry.0.extend(members);
        entry.1.push(node);
    }

    let mut roots: Vec<RollupNode> = connections
        .into_iter()
        .map(|(connection, (members, mut databases))| {
            sort_nodes(&mut databases);
            let mut node = aggregate_group(RollupDimension::Connection, connection, &members);
            node.children = databases;
            node
        })
        .collect();
    sort_nodes(&mut roots);
    roots
}
