use crate::charts::{ChartConfig, HeatmapChart, HeatmapGrid};
use crate::data::heatmap_weekday_hour::CountGrid;
use crate::data::kpis::format_count;
use crate::theme::{HEAT_HIGH, HEAT_LOW};

pub struct WeekdayHourHeatmapReport;

impl WeekdayHourHeatmapReport {
    pub fn title() -> &'static str {
        "Heatmap (Hour vs Day of Week)"
    }

    pub fn subtitle(counts: &CountGrid) -> String {
        format!(
            "{} trips by weekday and hour; empty cells count as zero",
            format_count(counts.total())
        )
    }

    pub fn grid(counts: &CountGrid) -> HeatmapGrid {
        HeatmapGrid {
            x_labels: counts.col_labels.clone(),
            y_labels: counts.row_labels.clone(),
            values: counts
                .values
                .iter()
                .map(|row| row.iter().map(|count| *count as f32).collect())
                .collect(),
        }
    }

    pub fn chart(counts: &CountGrid) -> HeatmapChart {
        HeatmapChart::new(Self::grid(counts))
            .with_scale(HEAT_LOW, HEAT_HIGH)
            .with_config(ChartConfig {
                padding: 80.0,
                grid_lines: 4,
            })
    }
}
