//! End-to-end assessment runs over a static fetcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;

use assay_analysis::methodology::Methodology;
use assay_analysis::rollup::RollupDimension;
use assay_analysis::{AssessmentEngine, AssessmentRequest, Catalog};
use assay_core::config::AssayConfig;
use assay_core::errors::{EvaluationError, PipelineError};
use assay_core::events::{
    AssessmentEventHandler, AssetFailedEvent, BatchProgressEvent, EventDispatcher, RunCancelledEvent,
    RunCompleteEvent, RunStartedEvent,
};
use assay_core::traits::{Cancellable, CancellationToken, StaticAssetFetcher};
use assay_core::types::{
    AssessmentScope, AssetRecord, FieldCategory, FieldDefinition, FieldSource, Signal,
    SignalContribution, TenantConfiguration, TriState,
};

const NOW: i64 = 1_700_000_000_000;

fn documented(guid: &str, qualified_name: &str) -> AssetRecord {
    AssetRecord::new(guid, "Table", qualified_name)
        .with_attribute("ownerUsers", json!(["alice"]))
        .with_attribute("description", "Documented table")
        .with_attribute("upstreamCount", 2)
        .with_attribute("sourceUpdatedAt", NOW)
}

fn bare(guid: &str, qualified_name: &str) -> AssetRecord {
    AssetRecord::new(guid, "Table", qualified_name)
}

fn fixture() -> Vec<AssetRecord> {
    vec![
        documented("t1", "default/snowflake/1/SALES/PUBLIC/ORDERS"),
        documented("t2", "default/snowflake/1/SALES/PUBLIC/CUSTOMERS"),
        bare("t3", "default/snowflake/1/SALES/STAGING/RAW_ORDERS"),
        bare("t4", "default/bigquery/2/ANALYTICS/MARTS/REVENUE"),
        documented("t5", "default/bigquery/2/ANALYTICS/MARTS/CHURN"),
    ]
}

fn engine(toml: &str) -> AssessmentEngine {
    AssessmentEngine::new(Catalog::standard(), AssayConfig::from_toml(toml).unwrap())
}

fn request() -> AssessmentRequest {
    AssessmentRequest::new(AssessmentScope::all(), TenantConfiguration::new("acme")).as_of(NOW)
}

#[derive(Default)]
struct Recorder {
    started: AtomicUsize,
    batches: AtomicUsize,
    failed: AtomicUsize,
    completed: AtomicUsize,
    cancelled: AtomicUsize,
}

impl AssessmentEventHandler for Recorder {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }
    fn on_batch_complete(&self, _event: &BatchProgressEvent) {
        self.batches.fetch_add(1, Ordering::SeqCst);
    }
    fn on_asset_failed(&self, _event: &AssetFailedEvent) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }
    fn on_run_complete(&self, _event: &RunCompleteEvent) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
    fn on_run_cancelled(&self, _event: &RunCancelledEvent) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_full_run_counts_and_rollups() {
    let fetcher = StaticAssetFetcher::new(fixture());
    let result = engine("").run(&fetcher, &request().with_evidence()).unwrap();

    let meta = &result.metadata;
    assert_eq!(meta.tenant_id, "acme");
    assert_eq!(meta.assets_fetched, 5);
    assert_eq!(meta.assets_processed, 5);
    assert_eq!(meta.assets_succeeded, 5);
    assert_eq!(meta.assets_failed, 0);
    assert_eq!(meta.use_cases.len(), Catalog::standard().use_cases().len());
    assert_eq!(meta.methodology, Methodology::WeightedDimensions);

    let connections = result.rollup(RollupDimension::Connection);
    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].dimension_value, "default/snowflake/1");
    assert_eq!(connections[0].asset_count, 3);

    assert_eq!(result.hierarchy.len(), 2);
    assert_eq!(result.hierarchy[0].children[0].dimension_value, "SALES");

    let summary = &result.summary;
    assert_eq!(summary.signal_coverage[&Signal::Ownership], 0.6);
    assert_eq!(summary.signal_coverage[&Signal::Lineage], 0.6);
    assert!((0.0..=100.0).contains(&summary.overall_score));
    assert_eq!(summary.average_timeliness, Some(100.0));
    assert_eq!(result.assets.as_ref().map(Vec::len), Some(5));
    assert!(result.recommendations.is_none());
}

#[test]
fn test_scope_is_applied_by_run() {
    let fetcher = StaticAssetFetcher::new(fixture());
    let req = AssessmentRequest::new(
        AssessmentScope::for_connection("default/bigquery/2"),
        TenantConfiguration::default(),
    );
    let result = engine("").run(&fetcher, &req).unwrap();
    assert_eq!(result.metadata.assets_processed, 2);
    assert!(result.assets.is_none());
}

#[test]
fn test_warn_policy_counts_failed_asset_as_processed() {
    let mut records = fixture();
    records.push(AssetRecord::new("broken", "", "q"));
    let result = engine("[pipeline]\non_error = \"warn\"")
        .assess_records(&request(), &records)
        .unwrap();
    assert_eq!(result.metadata.assets_processed, 6);
    assert_eq!(result.metadata.assets_succeeded, 5);
    assert_eq!(result.metadata.assets_failed, 1);
    assert_eq!(result.metadata.failures.len(), 1);
    assert_eq!(result.metadata.failures[0].guid, "broken");
    assert_eq!(result.metadata.failures[0].code, "ASSET_FAILED");
    let total: usize = result.rollup(RollupDimension::Connection).iter().map(|n| n.asset_count).sum();
    assert_eq!(total, 5);
}

#[test]
fn test_skip_policy_records_no_failures() {
    let mut records = fixture();
    records.push(AssetRecord::new("", "Table", "q"));
    let result = engine("[pipeline]\non_error = \"skip\"")
        .assess_records(&request(), &records)
        .unwrap();
    assert_eq!(result.metadata.assets_failed, 1);
    assert!(result.metadata.failures.is_empty());
}

#[test]
fn test_fail_policy_propagates_original_error() {
    let mut records = fixture();
    records.insert(1, AssetRecord::new("broken", "", "q"));
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    let err = engine("[pipeline]\non_error = \"fail\"")
        .with_dispatcher(dispatcher)
        .assess_records(&request(), &records)
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Evaluation(EvaluationError::InvalidAsset { .. })
    ));
    assert_eq!(recorder.failed.load(Ordering::SeqCst), 1);
    assert_eq!(recorder.completed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_progress_events_per_batch() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    engine("[pipeline]\nbatch_size = 2\nparallel = false")
        .with_dispatcher(dispatcher)
        .assess_records(&request(), &fixture())
        .unwrap();
    assert_eq!(recorder.started.load(Ordering::SeqCst), 1);
    assert_eq!(recorder.batches.load(Ordering::SeqCst), 3);
    assert_eq!(recorder.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cancelled_before_start() {
    let token = CancellationToken::new();
    token.cancel();
    let err = engine("")
        .with_cancellation(token)
        .assess_records(&request(), &fixture())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Cancelled { processed: 0 }));
}

struct CancelAfterFirstBatch {
    token: CancellationToken,
}

impl AssessmentEventHandler for CancelAfterFirstBatch {
    fn on_batch_complete(&self, _event: &BatchProgressEvent) {
        self.token.cancel();
    }
}

#[test]
fn test_cancelled_between_batches() {
    let token = CancellationToken::new();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(CancelAfterFirstBatch { token: token.clone() }));

    let err = engine("[pipeline]\nbatch_size = 2")
        .with_dispatcher(dispatcher)
        .with_cancellation(token)
        .assess_records(&request(), &fixture())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Cancelled { processed: 2 }));
}

#[test]
fn test_methodology_precedence() {
    let e = engine("[scoring]\nmethodology = \"maturity\"");
    let records = fixture();

    let result = e.assess_records(&request(), &records).unwrap();
    assert_eq!(result.metadata.methodology, Methodology::Maturity);

    let result = e
        .assess_records(&request().with_use_cases(&["text_to_sql"]), &records)
        .unwrap();
    assert_eq!(result.metadata.methodology, Methodology::Checklist);
    assert_eq!(result.summary.methodology.use_case_id.as_deref(), Some("text_to_sql"));

    let result = e
        .assess_records(
            &request()
                .with_use_cases(&["text_to_sql"])
                .with_methodology(Methodology::QTriplet),
            &records,
        )
        .unwrap();
    assert_eq!(result.metadata.methodology, Methodology::QTriplet);
}

#[test]
fn test_recommendations_and_requested_dimensions() {
    let result = engine("[rollup]\nhierarchical = false")
        .assess_records(
            &request()
                .with_use_cases(&["rag"])
                .with_dimensions(&[RollupDimension::Owner, RollupDimension::AssetType])
                .with_recommendations(),
            &fixture(),
        )
        .unwrap();

    assert!(result.hierarchy.is_empty());
    assert!(result.rollup(RollupDimension::Connection).is_empty());
    let owners = result.rollup(RollupDimension::Owner);
    assert_eq!(owners[0].dimension_value, "alice");
    assert_eq!(owners[0].asset_count, 3);
    assert_eq!(owners[1].dimension_value, "Unowned");
    assert_eq!(result.rollup(RollupDimension::AssetType)[0].asset_count, 5);

    let recs = result.recommendations.unwrap();
    assert_eq!(recs.plan.phases.len(), 3);
    assert!(recs.plan.total_gaps > 0);
    assert_eq!(
        recs.explanations.len(),
        1 + recs.plan.total_actions() + recs.plan.deferred.len()
    );
}

#[test]
fn test_unknown_use_case_degrades_to_zero() {
    let result = engine("")
        .assess_records(&request().with_use_cases(&["does_not_exist"]), &fixture())
        .unwrap();
    assert_eq!(result.summary.use_case_readiness["does_not_exist"], 0.0);
    assert_eq!(result.summary.methodology.methodology, Methodology::WeightedDimensions);
    assert_eq!(result.summary.overall_score, 0.0);
}

#[test]
fn test_tenant_exclusion_changes_signals() {
    let tenant = TenantConfiguration::new("acme").with_excluded("owner_users");
    let req = AssessmentRequest::new(AssessmentScope::all(), tenant).as_of(NOW);
    let result = engine("").assess_records(&req, &fixture()).unwrap();
    assert_eq!(result.summary.signal_coverage[&Signal::Ownership], 0.0);
}

#[test]
fn test_bad_tenant_pattern_degrades_field_to_unknown() {
    let tenant = TenantConfiguration::new("acme").with_custom_field(
        FieldDefinition::new(
            "tenant_tag",
            "Tenant tag",
            FieldCategory::Classification,
            FieldSource::classification_pattern("(unclosed"),
        )
        .contributes(SignalContribution::new(Signal::Sensitivity, 1.0)),
    );
    let req = AssessmentRequest::new(AssessmentScope::all(), tenant)
        .as_of(NOW)
        .with_evidence();
    let records = vec![documented("t1", "default/snowflake/1/SALES/PUBLIC/ORDERS")
        .with_classifications(&["PII"])];
    let result = engine("").assess_records(&req, &records).unwrap();

    assert_eq!(result.metadata.assets_succeeded, 1);
    let assets = result.assets.unwrap();
    let tag = assets[0]
        .field_results
        .iter()
        .find(|r| r.field_id == "tenant_tag")
        .unwrap();
    assert_eq!(tag.present, TriState::Unknown);
    assert!(tag.error.as_deref().unwrap().contains("tenant_tag"));
}

#[test]
fn test_tenant_field_without_contributions_does_not_abort() {
    let tenant = TenantConfiguration::new("acme").with_custom_field(FieldDefinition::new(
        "orphan",
        "Orphan",
        FieldCategory::Documentation,
        FieldSource::native("orphanAttr"),
    ));
    let req = AssessmentRequest::new(AssessmentScope::all(), tenant).as_of(NOW);
    let result = engine("").assess_records(&req, &fixture()).unwrap();
    assert_eq!(result.metadata.assets_succeeded, 5);
}

#[test]
fn test_quality_profile_weights_and_lineage_rollup() {
    let engine = engine(
        "[dimensions.profiles.freshness]\ncompleteness = 0.0\naccuracy = 0.0\ntimeliness = 1.0\nconsistency = 0.0\nusability = 0.0\n",
    );
    let req = request().with_quality_profile("freshness").with_evidence();
    let result = engine.assess_records(&req, &fixture()).unwrap();

    let assets = result.assets.as_ref().unwrap();
    let overall = |guid: &str| {
        assets
            .iter()
            .find(|a| a.asset.guid == guid)
            .map(|a| a.quality.overall)
            .unwrap()
    };
    assert_eq!(overall("t1"), 100.0);
    assert_eq!(overall("t3"), 0.0);
    assert_eq!(result.summary.asset_quality.overall, 60.0);

    assert_eq!(result.summary.lineage.total_assets, 5);
    assert_eq!(result.summary.lineage.pct_has_upstream, 60.0);
    assert_eq!(result.summary.lineage.pct_orphaned, 40.0);
    let snowflake = &result.rollup(RollupDimension::Connection)[0];
    assert_eq!(snowflake.asset_count, 3);
    assert!((snowflake.lineage.pct_orphaned - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_default_weights_without_profile() {
    let result = engine("")
        .assess_records(&request().with_evidence(), &fixture())
        .unwrap();
    let t1 = &result.assets.as_ref().unwrap()[0];
    let q = t1.quality;
    let expected = 0.30 * q.completeness
        + 0.25 * q.accuracy
        + 0.20 * q.timeliness
        + 0.15 * q.consistency
        + 0.10 * q.usability;
    assert!((q.overall - expected).abs() < 1e-6);
    assert_eq!(q.timeliness, 100.0);
}

#[test]
fn test_empty_run() {
    let result = engine("").assess_records(&request(), &[]).unwrap();
    assert_eq!(result.metadata.assets_processed, 0);
    assert_eq!(result.summary.overall_score, 0.0);
    assert!(result.hierarchy.is_empty());
}
