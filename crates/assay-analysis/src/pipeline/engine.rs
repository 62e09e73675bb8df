//! Batch runner: fetch → per-asset assessment in batches → rollups →
//! summary → recommendations.

use std::collections::BTreeMap;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rayon::prelude::*;

use assay_core::config::{AssayConfig, ErrorPolicy};
use assay_core::errors::{AssayErrorCode, EvaluationError, PipelineError, PipelineResult};
use assay_core::events::{
    AssetFailedEvent, BatchProgressEvent, EventDispatcher, RunCancelledEvent, RunCompleteEvent,
    RunStartedEvent,
};
use assay_core::traits::{AssetFetcher, Cancellable, CancellationToken};
use assay_core::types::AssetRecord;

use super::assess::{assess_asset, AssessmentContext};
use super::summary::summarize;
use super::types::{
    AssessmentRequest, AssessmentResult, AssetAssessment, AssetFailure, Recommendations, RunMetadata,
};
use crate::catalog::Catalog;
use crate::explain::{explain_action, explain_methodology};
use crate::gaps::Gap;
use crate::methodology::Methodology;
use crate::plan::build_plan;
use crate::rollup::{build_hierarchy, rollup_by_dimension, RollupDimension};

/// Runs assessments against an immutable catalog and configuration.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Catalog,
    config: AssayConfig,
    dispatcher: EventDispatcher,
    cancellation: CancellationToken,
}

impl AssessmentEngine {
    pub fn new(catalog: Catalog, config: AssayConfig) -> Self {
        Self {
            catalog,
            config,
            dispatcher: EventDispatcher::new(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// A handle that cancels runs of this engine between batches.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AssayConfig {
        &self.config
    }

    /// Fetch the request scope and assess it.
    pub fn run(
        &self,
        fetcher: &dyn AssetFetcher,
        request: &AssessmentRequest,
    ) -> Result<AssessmentResult, PipelineError> {
        let started = Instant::now();
        let records = fetcher.fetch_assets(&request.scope, &request.tenant)?;
        tracing::info!(
            tenant = %request.tenant.tenant_id,
            fetched = records.len(),
            "assets fetched"
        );
        self.assess_from(request, &records, started)
    }

    /// Assess records already in hand; the request scope is not applied.
    pub fn assess_records(
        &self,
        request: &AssessmentRequest,
        records: &[AssetRecord],
    ) -> Result<AssessmentResult, PipelineError> {
        self.assess_from(request, records, Instant::now())
    }

    fn assess_from(
        &self,
        request: &AssessmentRequest,
        records: &[AssetRecord],
        started: Instant,
    ) -> Result<AssessmentResult, PipelineError> {
        let started_at_ms = now_ms();

        // Phase 1: tenant catalog and run parameters
        self.catalog.validate()?;
        let catalog = self.catalog.for_tenant(&request.tenant);
        for issue in catalog.field_issues() {
            tracing::warn!(
                tenant = %request.tenant.tenant_id,
                code = issue.error_code(),
                error = %issue,
                "tenant field definition is invalid; evaluating what it can"
            );
        }
        let use_case_ids = request
            .use_cases
            .clone()
            .unwrap_or_else(|| catalog.use_case_ids());
        let methodology = self.select_methodology(&catalog, request, &use_case_ids);
        let context = AssessmentContext::new(
            &catalog,
            &use_case_ids,
            request.as_of_ms.unwrap_or(started_at_ms),
        )
        .with_timeliness_bands(self.config.quality.effective_timeliness_bands())
        .with_dimension_weights(
            self.config
                .dimensions
                .effective_weights(request.quality_profile.as_deref()),
        );

        // Phase 2: per-asset assessment in batches
        let outcome = self.evaluate_batches(&context, &request.tenant.tenant_id, records)?;
        let failures: Vec<AssetFailure> = outcome
            .errors
            .iter()
            .map(|err| AssetFailure {
                guid: match err {
                    PipelineError::AssetFailed { guid, .. } => guid.clone(),
                    _ => String::new(),
                },
                code: err.error_code().to_string(),
                message: err.to_string(),
            })
            .collect();
        let assets = outcome.data;
        let processed = records.len();
        let failed = processed - assets.len();

        // Phase 3: rollups
        let rollups: BTreeMap<RollupDimension, Vec<_>> = self
            .rollup_dimensions(request)
            .into_iter()
            .map(|dimension| (dimension, rollup_by_dimension(&assets, dimension)))
            .collect();
        let hierarchy = if self.config.rollup.effective_hierarchical() {
            build_hierarchy(&assets)
        } else {
            Vec::new()
        };

        // Phase 4: summary
        let single_use_case = match use_case_ids.as_slice() {
            [id] => Some(id.as_str()),
            _ => None,
        };
        let summary = summarize(&catalog, &self.config, &assets, methodology, single_use_case);

        // Phase 5: recommendations
        let recommendations = request.include_recommendations.then(|| {
            let gaps: Vec<Gap> = assets.iter().flat_map(|a| a.gaps.iter().cloned()).collect();
            let plan = build_plan(&gaps);
            let mut explanations = vec![explain_methodology(&summary.methodology)];
            explanations.extend(plan.actions().chain(plan.deferred.iter()).map(explain_action));
            Recommendations { plan, explanations }
        });

        let duration_ms = started.elapsed().as_millis() as u64;
        self.dispatcher.emit_run_complete(&RunCompleteEvent {
            processed,
            succeeded: assets.len(),
            failed,
            duration_ms,
        });
        tracing::info!(
            processed,
            succeeded = assets.len(),
            failed,
            duration_ms,
            score = summary.overall_score,
            "assessment complete"
        );

        Ok(AssessmentResult {
            metadata: RunMetadata {
                tenant_id: request.tenant.tenant_id.clone(),
                started_at_ms,
                duration_ms,
                methodology,
                use_cases: use_case_ids,
                batch_size: self.config.pipeline.effective_batch_size(),
                error_policy: self.config.pipeline.effective_error_policy(),
                assets_fetched: records.len(),
                assets_processed: processed,
                assets_succeeded: assets.len(),
                assets_failed: failed,
                failures,
            },
            summary,
            rollups,
            hierarchy,
            assets: request.include_evidence.then_some(assets),
            recommendations,
        })
    }

    /// Evaluate every record, batch by batch. Cancellation is honoured
    /// before each batch; a started batch always completes.
    fn evaluate_batches(
        &self,
        context: &AssessmentContext<'_>,
        tenant_id: &str,
        records: &[AssetRecord],
    ) -> Result<PipelineResult<Vec<AssetAssessment>>, PipelineError> {
        let batch_size = self.config.pipeline.effective_batch_size();
        let policy = self.config.pipeline.effective_error_policy();
        let parallel = self.config.pipeline.effective_parallel();
        let total = records.len();
        let batch_count = total.div_ceil(batch_size);

        tracing::info!(tenant = %tenant_id, total, batch_size, %policy, "assessment started");
        self.dispatcher.emit_run_started(&RunStartedEvent {
            tenant_id: tenant_id.to_string(),
            total_assets: total,
            batch_size,
        });

        let mut outcome = PipelineResult::new(Vec::with_capacity(total));
        let mut processed = 0;
        let mut failed = 0;

        for (batch_index, batch) in records.chunks(batch_size).enumerate() {
            if self.cancellation.is_cancelled() {
                tracing::info!(processed, total, "assessment cancelled");
                self.dispatcher
                    .emit_run_cancelled(&RunCancelledEvent { processed, total });
                return Err(PipelineError::Cancelled { processed });
            }

            let results: Vec<Result<AssetAssessment, EvaluationError>> = if parallel {
                batch.par_iter().map(|asset| assess_asset(context, asset)).collect()
            } else {
                batch.iter().map(|asset| assess_asset(context, asset)).collect()
            };

            for (record, result) in batch.iter().zip(results) {
                processed += 1;
                let err = match result {
                    Ok(assessment) => {
                        outcome.data.push(assessment);
                        continue;
                    }
                    Err(err) => err,
                };
                failed += 1;
                let guid = if record.guid.is_empty() {
                    record.qualified_name.clone()
                } else {
                    record.guid.clone()
                };
                self.dispatcher.emit_asset_failed(&AssetFailedEvent {
                    guid: guid.clone(),
                    message: err.to_string(),
                    policy: policy.as_str(),
                });
                match policy {
                    ErrorPolicy::Fail => {
                        tracing::error!(guid = %guid, error = %err, "asset failed; aborting run");
                        return Err(err.into());
                    }
                    ErrorPolicy::Skip => {
                        tracing::debug!(guid = %guid, error = %err, "asset skipped");
                    }
                    ErrorPolicy::Warn => {
                        tracing::warn!(guid = %guid, error = %err, "asset failed; continuing");
                        outcome.add_error(PipelineError::AssetFailed {
                            guid,
                            message: err.to_string(),
                        });
                    }
                }
            }

            tracing::debug!(
                batch = batch_index + 1,
                batch_count,
                processed,
                total,
                "batch complete"
            );
            self.dispatcher.emit_batch_complete(&BatchProgressEvent {
                batch_index,
                batch_count,
                processed,
                total,
                succeeded: outcome.data.len(),
                failed,
            });
        }

        Ok(outcome)
    }

    /// Request methodology, else the single selected use case's default,
    /// else configuration.
    fn select_methodology(
        &self,
        catalog: &Catalog,
        request: &AssessmentRequest,
        use_case_ids: &[String],
    ) -> Methodology {
        if let Some(methodology) = request.methodology {
            return methodology;
        }
        if let [id] = use_case_ids {
            if let Some(profile) = catalog.use_case(id) {
                return profile.default_methodology;
            }
        }
        self.config
            .scoring
            .effective_methodology()
            .parse()
            .unwrap_or_else(|err: String| {
                tracing::warn!(error = %err, "falling back to weighted_dimensions");
                Methodology::WeightedDimensions
            })
    }

    fn rollup_dimensions(&self, request: &AssessmentRequest) -> Vec<RollupDimension> {
        if !request.dimensions.is_empty() {
            return request.dimensions.clone();
        }
        self.config
            .rollup
            .effective_dimensions()
            .iter()
            .filter_map(|name| match name.parse::<RollupDimension>() {
                Ok(dimension) => Some(dimension),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring rollup dimension");
                    None
                }
            })
            .collect()
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
