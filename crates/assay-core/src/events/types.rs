//! Event payload types for assessment runs.

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub tenant_id: String,
    pub total_assets: usize,
    pub batch_size: usize,
}

/// Payload for `on_batch_complete`. Emitted after every batch.
#[derive(Debug, Clone)]
pub struct BatchProgressEvent {
    pub batch_index: usize,
    pub batch_count: usize,
    pub processed: usize,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchProgressEvent {
    /// Fraction of assets processed so far, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.processed as f64 / self.total as f64
    }
}

/// Payload for `on_asset_failed`.
#[derive(Debug, Clone)]
pub struct AssetFailedEvent {
    pub guid: String,
    pub message: String,
    /// Error policy that handled the failure (`fail`, `skip` or `warn`).
    pub policy: &'static str,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

/// Payload for `on_run_cancelled`.
#[derive(Debug, Clone)]
pub struct RunCancelledEvent {
    pub processed: usize,
    pub total: usize,
}
