//! Per-signal message tables. Exhaustive over `Signal`.

use assay_core::types::Signal;

pub fn missing_message(signal: Signal) -> &'static str {
    match signal {
        Signal::Ownership => "No owner, steward or owning group is assigned.",
        Signal::Semantics => "The asset lacks a description or business glossary context.",
        Signal::Lineage => "No upstream or downstream lineage has been captured.",
        Signal::Sensitivity => "The asset has not been classified for sensitivity.",
        Signal::Access => "No access policy or access request process is defined.",
        Signal::Quality => "No data quality checks or scores are attached.",
        Signal::Freshness => "There is no record of when the data was last updated.",
        Signal::Usage => "No query or popularity telemetry is available.",
        Signal::AiReady => "The asset is not cleared for AI use: it is uncertified, undescribed, unapproved or carries restricted data.",
        Signal::Trust => "The asset has not been certified or endorsed.",
    }
}

pub fn unknown_message(signal: Signal) -> &'static str {
    match signal {
        Signal::Ownership => "Ownership could not be determined from the available metadata.",
        Signal::Semantics => "Documentation coverage could not be evaluated.",
        Signal::Lineage => "Lineage could not be evaluated; the lineage source may not be connected.",
        Signal::Sensitivity => "Sensitivity could not be evaluated; classifications may not be synced.",
        Signal::Access => "Access controls could not be evaluated from catalog metadata.",
        Signal::Quality => "Quality status is unknown; no quality tool reported for this asset.",
        Signal::Freshness => "Freshness could not be evaluated from the available timestamps.",
        Signal::Usage => "Usage could not be evaluated; query history may not be ingested.",
        Signal::AiReady => "AI readiness could not be fully evaluated; some prerequisites are unknown.",
        Signal::Trust => "Trust could not be evaluated; certification data is unavailable.",
    }
}

/// Short imperative remediation step.
pub fn remediation_hint(signal: Signal) -> &'static str {
    match signal {
        Signal::Ownership => "Assign an owner user or group",
        Signal::Semantics => "Write descriptions and link glossary terms",
        Signal::Lineage => "Connect lineage sources or crawl query history",
        Signal::Sensitivity => "Classify the asset for sensitivity",
        Signal::Access => "Attach access policies or document an access process",
        Signal::Quality => "Set up data quality monitors",
        Signal::Freshness => "Record update timestamps or a freshness SLA",
        Signal::Usage => "Enable usage and popularity ingestion",
        Signal::AiReady => "Certify, describe and approve the asset for AI use",
        Signal::Trust => "Certify the asset",
    }
}
