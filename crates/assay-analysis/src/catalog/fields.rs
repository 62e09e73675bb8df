//! The standard field catalog.
//!
//! Attribute names follow the catalog's asset model (`ownerUsers`,
//! `userDescription`, `certificateStatus`, ...). Relationship sources read
//! the `{relation}Count` attribute the fetcher materialises.

use assay_core::types::{
    FieldCategory as C, FieldDefinition as F, FieldSource as S, Signal, SignalContribution as W,
};

const SQL_TYPES: &[&str] = &["Table", "View", "MaterialisedView", "Column"];
const RELATION_TYPES: &[&str] = &["Table", "View", "MaterialisedView"];
const GOVERNANCE: &str = "Data Governance";
const AI_GOVERNANCE: &str = "AI Governance";
const DATA_QUALITY: &str = "Data Quality";

/// Every field known to the standard catalog.
pub fn standard_fields() -> Vec<F> {
    let mut fields = Vec::with_capacity(44);
    fields.extend(ownership_fields());
    fields.extend(documentation_fields());
    fields.extend(lineage_fields());
    fields.extend(classification_fields());
    fields.extend(access_fields());
    fields.extend(quality_fields());
    fields.extend(freshness_fields());
    fields.extend(usage_fields());
    fields.extend(trust_fields());
    fields.extend(ai_fields());
    fields
}

fn ownership_fields() -> Vec<F> {
    vec![
        F::new("owner_users", "Owner users", C::Ownership, S::native("ownerUsers"))
            .contributes(W::new(Signal::Ownership, 1.0))
            .completeness(1.0),
        F::new("owner_groups", "Owner groups", C::Ownership, S::native("ownerGroups"))
            .contributes(W::new(Signal::Ownership, 1.0))
            .completeness(0.5),
        F::new(
            "admins",
            "Administrators",
            C::Ownership,
            S::native_any(&["adminUsers", "adminGroups"]),
        )
        .contributes(W::new(Signal::Ownership, 0.5)),
        F::new(
            "data_steward",
            "Data steward",
            C::Ownership,
            S::custom_metadata(GOVERNANCE, "Data Steward"),
        )
        .contributes(W::new(Signal::Ownership, 0.8))
        .completeness(0.5),
        F::new(
            "domain",
            "Data domain",
            C::Ownership,
            S::native_any(&["domainGUIDs", "dataDomain"]),
        )
        .contributes(W::new(Signal::Ownership, 0.4))
        .contributes(W::new(Signal::Semantics, 0.3))
        .completeness(0.4),
    ]
}

fn documentation_fields() -> Vec<F> {
    vec![
        F::new(
            "description",
            "Description",
            C::Documentation,
            S::native_any(&["userDescription", "description"]),
        )
        .contributes(W::new(Signal::Semantics, 1.0).required())
        .contributes(W::new(Signal::AiReady, 1.0))
        .completeness(1.0),
        F::new("readme", "README", C::Documentation, S::native("readme"))
            .contributes(W::new(Signal::Semantics, 0.6))
            .completeness(0.5),
        F::new(
            "glossary_terms",
            "Glossary terms",
            C::Documentation,
            S::relationship("meanings", None),
        )
        .contributes(W::new(Signal::Semantics, 0.8))
        .completeness(0.7),
        F::new("display_name", "Display name", C::Documentation, S::native("displayName"))
            .contributes(W::new(Signal::Semantics, 0.3)),
        F::new("tags", "Tags", C::Documentation, S::native("assetTags"))
            .contributes(W::new(Signal::Semantics, 0.3))
            .completeness(0.3),
        F::new(
            "business_definition",
            "Business definition",
            C::Documentation,
            S::custom_metadata("Business Context", "Definition"),
        )
        .contributes(W::new(Signal::Semantics, 0.5)),
        F::new(
            "column_descriptions",
            "Column description coverage",
            C::Documentation,
            S::derived("column_description_coverage"),
        )
        .for_types(RELATION_TYPES)
        .contributes(W::new(Signal::Semantics, 0.4)),
    ]
}

fn lineage_fields() -> Vec<F> {
    vec![
        F::new("has_lineage", "Lineage flag", C::Lineage, S::native("__hasLineage"))
            .contributes(W::new(Signal::Lineage, 1.0))
            .completeness(0.8),
        F::new(
            "upstream_lineage",
            "Upstream lineage",
            C::Lineage,
            S::relationship("upstream", None),
        )
        .contributes(W::new(Signal::Lineage, 1.0)),
        F::new(
            "downstream_lineage",
            "Downstream lineage",
            C::Lineage,
            S::relationship("downstream", None),
        )
        .contributes(W::new(Signal::Lineage, 0.8)),
        F::new(
            "column_lineage",
            "Column-level lineage",
            C::Lineage,
            S::derived("column_level_lineage"),
        )
        .for_types(&["Column"])
        .contributes(W::new(Signal::Lineage, 0.5)),
        F::new("sql_definition", "SQL definition", C::Lineage, S::native("definition"))
            .for_types(&["View", "MaterialisedView"])
            .contributes(W::new(Signal::Lineage, 0.4)),
        F::new("source_url", "Source URL", C::Lineage, S::native("sourceURL"))
            .contributes(W::new(Signal::Lineage, 0.3)),
    ]
}

fn classification_fields() -> Vec<F> {
    vec![
        F::new(
            "classified",
            "Any classification",
            C::Classification,
            S::classification_pattern(".*"),
        )
        .contributes(W::new(Signal::Sensitivity, 1.0))
        .completeness(0.6),
        F::new(
            "pii_tags",
            "PII classification",
            C::Classification,
            S::classification_any_of(&["PII", "Confidential", "Sensitive", "GDPR"]),
        )
        .contributes(W::new(Signal::Sensitivity, 1.0))
        .contributes(W::new(Signal::AiReady, 1.0).negative()),
        F::new(
            "sensitivity_label",
            "Sensitivity label",
            C::Classification,
            S::custom_metadata(GOVERNANCE, "Sensitivity"),
        )
        .contributes(W::new(Signal::Sensitivity, 0.8))
        .completeness(0.4),
        F::new(
            "deprecated_tag",
            "Deprecated classification",
            C::Classification,
            S::classification_pattern("(?i)^deprecat"),
        )
        .contributes(W::new(Signal::AiReady, 1.0).negative()),
    ]
}

fn access_fields() -> Vec<F> {
    vec![
        F::new(
            "access_policies",
            "Access policies",
            C::Access,
            S::relationship("accessPolicy", None),
        )
        .contributes(W::new(Signal::Access, 1.0))
        .completeness(0.5),
        F::new(
            "access_process",
            "Access request process",
            C::Access,
            S::custom_metadata(GOVERNANCE, "Access Process"),
        )
        .contributes(W::new(Signal::Access, 0.8)),
        F::new(
            "masking",
            "Masking classification",
            C::Access,
            S::classification_pattern("(?i)mask"),
        )
        .for_types(SQL_TYPES)
        .contributes(W::new(Signal::Access, 0.5)),
    ]
}

fn quality_fields() -> Vec<F> {
    vec![
        F::new(
            "dq_monitors",
            "Quality monitors",
            C::Quality,
            S::native_any(&["assetMcMonitorNames", "assetSodaCheckStatuses", "assetDQRules"]),
        )
        .contributes(W::new(Signal::Quality, 1.0))
        .completeness(0.5),
        F::new("dq_score", "Quality score", C::Quality, S::custom_metadata(DATA_QUALITY, "Score"))
            .contributes(W::new(Signal::Quality, 0.8)),
        F::new("last_profiled", "Last profiled", C::Quality, S::native("lastProfiledAt"))
            .for_types(SQL_TYPES)
            .contributes(W::new(Signal::Quality, 0.4))
            .contributes(W::new(Signal::Freshness, 0.6)),
        F::new(
            "dq_checks_passing",
            "Quality checks passing",
            C::Quality,
            S::derived("dq_check_pass_rate"),
        )
        .contributes(W::new(Signal::Quality, 0.6)),
    ]
}

fn freshness_fields() -> Vec<F> {
    vec![
        F::new(
            "source_updated",
            "Source update time",
            C::Freshness,
            S::native_any(&["sourceUpdatedAt", "lastSyncRunAt"]),
        )
        .contributes(W::new(Signal::Freshness, 1.0))
        .completeness(0.4),
        F::new(
            "freshness_sla",
            "Freshness SLA",
            C::Freshness,
            S::custom_metadata(DATA_QUALITY, "Freshness SLA"),
        )
        .contributes(W::new(Signal::Freshness, 0.5)),
        F::new("update_time", "Catalog update time", C::Freshness, S::native("updateTime"))
            .contributes(W::new(Signal::Freshness, 0.3)),
    ]
}

fn usage_fields() -> Vec<F> {
    vec![
        F::new("query_count", "Query count", C::Usage, S::native("sourceReadCount"))
            .contributes(W::new(Signal::Usage, 1.0))
            .completeness(0.3),
        F::new("popularity", "Popularity score", C::Usage, S::native("popularityScore"))
            .contributes(W::new(Signal::Usage, 0.6)),
        F::new(
            "recent_users",
            "Recent users",
            C::Usage,
            S::native("sourceReadRecentUserList"),
        )
        .contributes(W::new(Signal::Usage, 0.5)),
        F::new("user_count", "Distinct readers", C::Usage, S::native("sourceReadUserCount"))
            .contributes(W::new(Signal::Usage, 0.4)),
        F::new(
            "dashboard_consumers",
            "Dashboard consumers",
            C::Usage,
            S::relationship("dashboard", None),
        )
        .for_types(RELATION_TYPES)
        .contributes(W::new(Signal::Usage, 0.3)),
    ]
}

fn trust_fields() -> Vec<F> {
    vec![
        F::new("certificate", "Certificate status", C::Trust, S::native("certificateStatus"))
            .contributes(W::new(Signal::Trust, 1.0))
            .contributes(W::new(Signal::AiReady, 1.0))
            .completeness(0.8),
        F::new(
            "certificate_message",
            "Certificate message",
            C::Trust,
            S::native("certificateStatusMessage"),
        )
        .contributes(W::new(Signal::Trust, 0.3)),
        F::new("announcement", "Announcement", C::Trust, S::native("announcementTitle"))
            .contributes(W::new(Signal::Trust, 0.2)),
        F::new("trust_score", "Trust score", C::Trust, S::derived("trust_score"))
            .contributes(W::new(Signal::Trust, 0.5)),
    ]
}

fn ai_fields() -> Vec<F> {
    vec![
        F::new(
            "ai_approved",
            "Approved for AI",
            C::Ai,
            S::custom_metadata(AI_GOVERNANCE, "Approved for AI"),
        )
        .contributes(W::new(Signal::AiReady, 1.0))
        .completeness(0.5),
        F::new(
            "ai_usage_policy",
            "AI usage policy",
            C::Ai,
            S::custom_metadata(AI_GOVERNANCE, "Usage Policy"),
        )
        .contributes(W::new(Signal::Access, 0.4)),
        F::new(
            "embedding_quality",
            "Embedding quality",
            C::Ai,
            S::derived("embedding_quality"),
        )
        .contributes(W::new(Signal::Semantics, 0.2)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_field_ids_unique() {
        let fields = standard_fields();
        let ids: FxHashSet<&str> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fields.len());
        assert!(fields.len() >= 40);
    }

    #[test]
    fn test_every_signal_has_a_contributor() {
        let fields = standard_fields();
        for signal in Signal::all() {
            assert!(
                fields.iter().any(|f| f.contributes_to(*signal)),
                "{signal} has no contributing field"
            );
        }
    }

    #[test]
    fn test_negative_contributions_only_on_ai_ready() {
        for field in standard_fields() {
            for c in field.contributions.iter().filter(|c| c.negative) {
                assert_eq!(c.signal, Signal::AiReady, "{}", field.id);
            }
        }
    }
}
