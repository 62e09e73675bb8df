//! Timeliness from the last source update.

use assay_core::types::AssetRecord;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days between the asset's last update and `as_of_ms`.
///
/// Reads `sourceUpdatedAt`, falling back to `updateTime`. Timestamps in the
/// future count as zero days.
pub fn days_since_update(asset: &AssetRecord, as_of_ms: i64) -> Option<i64> {
    let updated = asset
        .epoch_millis("sourceUpdatedAt")
        .or_else(|| asset.epoch_millis("updateTime"))?;
    Some((as_of_ms.saturating_sub(updated) / MILLIS_PER_DAY).max(0))
}

/// 100/75/50/25/0 by band `[fresh, recent, aging, stale]` in days.
/// `None` when the asset carries no update timestamp.
pub fn timeliness_score(asset: &AssetRecord, as_of_ms: i64, bands: [u32; 4]) -> Option<f64> {
    let days = days_since_update(asset, as_of_ms)?;
    let [fresh, recent, aging, stale] = bands.map(i64::from);
    let score = if days <= fresh {
        100.0
    } else if days <= recent {
        75.0
    } else if days <= aging {
        50.0
    } else if days <= stale {
        25.0
    } else {
        0.0
    };
    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::constants::DEFAULT_TIMELINESS_BANDS;

    const NOW: i64 = 1_700_000_000_000;

    fn updated_days_ago(days: i64) -> AssetRecord {
        AssetRecord::new("g", "Table", "q").with_attribute("sourceUpdatedAt", NOW - days * MILLIS_PER_DAY)
    }

    #[test]
    fn test_band_edges() {
        let cases = [(0, 100.0), (7, 100.0), (8, 75.0), (30, 75.0), (90, 50.0), (180, 25.0), (181, 0.0)];
        for (days, expected) in cases {
            let score = timeliness_score(&updated_days_ago(days), NOW, DEFAULT_TIMELINESS_BANDS);
            assert_eq!(score, Some(expected), "{days} days");
        }
    }

    #[test]
    fn test_falls_back_to_update_time() {
        let asset = AssetRecord::new("g", "Table", "q").with_attribute("updateTime", NOW - 40 * MILLIS_PER_DAY);
        assert_eq!(days_since_update(&asset, NOW), Some(40));
        assert_eq!(timeliness_score(&asset, NOW, DEFAULT_TIMELINESS_BANDS), Some(50.0));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let asset = AssetRecord::new("g", "Table", "q").with_attribute("sourceUpdatedAt", NOW + MILLIS_PER_DAY);
        assert_eq!(days_since_update(&asset, NOW), Some(0));
    }

    #[test]
    fn test_missing_timestamp() {
        let asset = AssetRecord::new("g", "Table", "q");
        assert_eq!(timeliness_score(&asset, NOW, DEFAULT_TIMELINESS_BANDS), None);
    }
}
