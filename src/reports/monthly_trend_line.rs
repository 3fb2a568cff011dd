use crate::charts::{ChartConfig, LineChart, LineSeries};
use crate::data::trip_counts::{GroupCount, GroupValue};
use crate::theme::TRIPS_HIGH;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub struct MonthlyTrendReport;

impl MonthlyTrendReport {
    pub fn title() -> &'static str {
        "Monthly Growth Trend"
    }

    pub fn subtitle() -> &'static str {
        "Trips per calendar month"
    }

    pub fn points(counts: &[GroupCount]) -> Vec<(f32, f32)> {
        counts
            .iter()
            .filter_map(|group| match group.key {
                GroupValue::Month(month) => Some((month as f32, group.count as f32)),
                _ => None,
            })
            .collect()
    }

    pub fn chart(counts: &[GroupCount]) -> LineChart {
        let points = Self::points(counts);
        let max = points.iter().map(|(_, y)| *y).fold(0.0_f32, f32::max);
        let first = points.first().map_or(1.0, |(x, _)| *x);
        let last = points.last().map_or(12.0, |(x, _)| *x);

        LineChart::new(vec![
            LineSeries::new("Trips", TRIPS_HIGH, points).with_markers()
        ])
        .with_y_range((0.0, max.max(1.0)))
        .with_x_range((first, last.max(first + 1.0)))
        .with_x_labels(month_label)
        .with_config(ChartConfig {
            padding: 48.0,
            grid_lines: 4,
        })
    }
}

fn month_label(month: f32) -> String {
    let index = month.round() as i64 - 1;
    usize::try_from(index)
        .ok()
        .and_then(|index| MONTHS.get(index))
        .map_or_else(|| format!("{month:.1}"), |name| (*name).to_owned())
}
