//! Quality band and timeliness configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_QUALITY_BANDS, DEFAULT_TIMELINESS_BANDS};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QualityConfig {
    /// Days since update still considered fresh. Default: 7.
    pub fresh_days: Option<u32>,
    /// Default: 30.
    pub recent_days: Option<u32>,
    /// Default: 90.
    pub aging_days: Option<u32>,
    /// Beyond this the asset scores 0. Default: 180.
    pub stale_days: Option<u32>,
    /// Lower bound of the EXCELLENT band (0-100). Default: 80.
    pub excellent: Option<f64>,
    /// Default: 60.
    pub good: Option<f64>,
    /// Default: 40.
    pub fair: Option<f64>,
    /// Default: 20.
    pub poor: Option<f64>,
}

impl QualityConfig {
    /// Timeliness band limits in days: fresh, recent, aging, stale.
    pub fn effective_timeliness_bands(&self) -> [u32; 4] {
        let [fresh, recent, aging, stale] = DEFAULT_TIMELINESS_BANDS;
        [
            self.fresh_days.unwrap_or(fresh),
            self.recent_days.unwrap_or(recent),
            self.aging_days.unwrap_or(aging),
            self.stale_days.unwrap_or(stale),
        ]
    }

    /// Quality band lower bounds: excellent, good, fair, poor.
    pub fn effective_quality_bands(&self) -> [f64; 4] {
        let [excellent, good, fair, poor] = DEFAULT_QUALITY_BANDS;
        [
            self.excellent.unwrap_or(excellent),
            self.good.unwrap_or(good),
            self.fair.unwrap_or(fair),
            self.poor.unwrap_or(poor),
        ]
    }
}
