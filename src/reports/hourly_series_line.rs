use crate::charts::{ChartConfig, LineChart, LineSeries};
use crate::data::hourly_series::HourBucket;
use crate::theme::TRIPS_HIGH;

pub struct HourlySeriesReport;

impl HourlySeriesReport {
    pub fn title() -> &'static str {
        "Hourly Time Series"
    }

    pub fn subtitle() -> &'static str {
        "Trips in every hour of the selected range"
    }

    pub fn chart(buckets: &[HourBucket]) -> LineChart {
        let points: Vec<(f32, f32)> = buckets
            .iter()
            .enumerate()
            .map(|(offset, bucket)| (offset as f32, bucket.count as f32))
            .collect();
        let max = points.iter().map(|(_, y)| *y).fold(0.0_f32, f32::max);

        let chart = LineChart::new(vec![LineSeries::new("Trips", TRIPS_HIGH, points)])
            .with_y_range((0.0, max.max(1.0)))
            .with_config(ChartConfig {
                padding: 48.0,
                grid_lines: 4,
            });

        match buckets.first() {
            Some(first) => chart.with_x_labels(super::hour_offset_label(first.start)),
            None => chart,
        }
    }
}
