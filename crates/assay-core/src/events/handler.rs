//! AssessmentEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing assessment runs.
///
/// Handlers only override the events they care about. `Send + Sync` so a
/// handler can be shared with the parallel per-asset stage.
pub trait AssessmentEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_batch_complete(&self, _event: &BatchProgressEvent) {}
    fn on_asset_failed(&self, _event: &AssetFailedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
    fn on_run_cancelled(&self, _event: &RunCancelledEvent) {}
}
