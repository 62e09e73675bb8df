//! Fixtures shared by unit tests.

use assay_core::types::{AssetRecord, HierarchyPath, Signal, TriState};

use crate::pipeline::AssetAssessment;
use crate::rollup::AssetSummary;
use crate::signals::SignalSet;

/// An assessment in `connection` with the given signal outcomes.
pub fn assessment(guid: &str, connection: &str, scores: &[(Signal, TriState, f64)]) -> AssetAssessment {
    let record = AssetRecord::new(guid, "Table", guid).with_hierarchy(HierarchyPath {
        connection: Some(connection.to_string()),
        database: None,
        schema: None,
    });
    AssetAssessment {
        asset: AssetSummary::from_record(&record),
        field_results: Vec::new(),
        signals: SignalSet::from_scores(scores),
        use_cases: Vec::new(),
        gaps: Vec::new(),
        timeliness: None,
        quality: Default::default(),
        lineage: Default::default(),
    }
}

/// An assessment placed by qualified name, with no signals.
pub fn assessment_at(guid: &str, qualified_name: &str) -> AssetAssessment {
    let record = AssetRecord::new(guid, "Table", qualified_name);
    AssetAssessment {
        asset: AssetSummary::from_record(&record),
        field_results: Vec::new(),
        signals: SignalSet::default(),
        use_cases: Vec::new(),
        gaps: Vec::new(),
        timeliness: None,
        quality: Default::default(),
        lineage: Default::default(),
    }
}
