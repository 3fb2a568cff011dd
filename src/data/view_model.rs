use rand::Rng;

use super::filter::{filter, DateRange};
use super::heatmap_weekday_hour::{cross_tab, CountGrid};
use super::hourly_series::{bucket_counts, resample_hourly, rolling_mean, HourBucket};
use super::kpis::{compute_kpis, Kpis};
use super::map_sample::{sample_for_map, GeoPoint};
use super::trip_counts::{aggregate_by, GroupCount, GroupKey};
use crate::importing::TripRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeOptions {
    pub rolling_window: usize,
    pub map_sample_size: usize,
}

impl Default for RecomputeOptions {
    fn default() -> Self {
        Self {
            rolling_window: 24,
            map_sample_size: 5000,
        }
    }
}

/// Everything the dashboard shows for one date range.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub range: DateRange,
    pub kpis: Kpis,
    pub by_hour: Vec<GroupCount>,
    pub by_weekday: Vec<GroupCount>,
    pub by_month: Vec<GroupCount>,
    pub by_base: Vec<GroupCount>,
    pub hourly: Vec<HourBucket>,
    pub rolling: Vec<Option<f64>>,
    pub rolling_window: usize,
    pub weekday_hour: CountGrid,
    pub map_points: Vec<GeoPoint>,
}

/// One full pass from raw records to the rendered aggregates.
pub fn recompute<R: Rng + ?Sized>(
    records: &[TripRecord],
    range: DateRange,
    options: &RecomputeOptions,
    rng: &mut R,
) -> ViewModel {
    let view = filter(records, range);
    let hourly = resample_hourly(&view);
    let rolling = rolling_mean(&bucket_counts(&hourly), options.rolling_window);

    log::debug!(
        "Recomputed {} to {}: {} of {} trips, {} hourly buckets",
        range.start,
        range.end,
        view.len(),
        records.len(),
        hourly.len()
    );

    ViewModel {
        range,
        kpis: compute_kpis(&view),
        by_hour: aggregate_by(&view, GroupKey::Hour),
        by_weekday: aggregate_by(&view, GroupKey::Weekday),
        by_month: aggregate_by(&view, GroupKey::Month),
        by_base: aggregate_by(&view, GroupKey::Base),
        hourly,
        rolling,
        rolling_window: options.rolling_window,
        weekday_hour: cross_tab(&view),
        map_points: sample_for_map(&view, options.map_sample_size, rng),
    }
}
