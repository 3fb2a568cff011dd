pub mod base_volume_bar;
pub mod hourly_series_line;
pub mod hourly_trips_bar;
pub mod monthly_trend_line;
pub mod pickup_map;
pub mod rolling_average_line;
pub mod weekday_hour_heatmap;
pub mod weekday_trips_bar;

use chrono::{Duration, NaiveDateTime};

use crate::charts::{BarChart, BarPoint, BarSeries, ChartConfig};
use crate::data::trip_counts::GroupCount;
use crate::theme::{TRIPS_HIGH, TRIPS_LOW};

/// Bar chart of grouped trip counts, shaded by count.
pub fn trip_count_bars(counts: &[GroupCount]) -> BarChart {
    let values = counts
        .iter()
        .map(|group| BarPoint {
            label: group.key.to_string(),
            value: group.count as f32,
        })
        .collect();

    BarChart::new(BarSeries {
        name: "Trips".to_string(),
        color: TRIPS_HIGH,
        low_color: Some(TRIPS_LOW),
        values,
    })
    .with_config(ChartConfig {
        padding: 48.0,
        grid_lines: 4,
    })
}

/// Labels x offsets, in hours from `origin`, as a timestamp.
pub fn hour_offset_label(origin: NaiveDateTime) -> impl Fn(f32) -> String {
    move |offset| {
        (origin + Duration::hours(offset.round() as i64))
            .format("%b %d %H:00")
            .to_string()
    }
}
