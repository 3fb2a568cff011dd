use chrono::NaiveDateTime;

use crate::charts::{ChartConfig, LineChart, LineSeries};
use crate::theme::ROLLING_COLOR;

pub struct RollingAverageReport;

impl RollingAverageReport {
    pub fn title() -> &'static str {
        "24-Hour Rolling Average"
    }

    pub fn subtitle() -> &'static str {
        "Trailing mean of hourly trips"
    }

    /// Hours before the window fills have no value and are not plotted.
    pub fn points(rolling: &[Option<f64>]) -> Vec<(f32, f32)> {
        rolling
            .iter()
            .enumerate()
            .filter_map(|(offset, value)| value.map(|value| (offset as f32, value as f32)))
            .collect()
    }

    pub fn chart(
        origin: Option<NaiveDateTime>,
        rolling: &[Option<f64>],
        window: usize,
    ) -> LineChart {
        let points = Self::points(rolling);
        let max = points.iter().map(|(_, y)| *y).fold(0.0_f32, f32::max);
        let name = format!("{window}h mean");

        let chart = LineChart::new(vec![LineSeries::new(name, ROLLING_COLOR, points)])
            .with_y_range((0.0, max.max(1.0)))
            .with_x_range((0.0, rolling.len().saturating_sub(1).max(1) as f32))
            .with_config(ChartConfig {
                padding: 48.0,
                grid_lines: 4,
            });

        match origin {
            Some(origin) => chart.with_x_labels(super::hour_offset_label(origin)),
            None => chart,
        }
    }
}
