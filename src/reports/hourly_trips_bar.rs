use crate::charts::BarChart;
use crate::data::trip_counts::GroupCount;

pub struct HourlyTripsReport;

impl HourlyTripsReport {
    pub fn title() -> &'static str {
        "Trips per Hour"
    }

    pub fn subtitle() -> &'static str {
        "Pickups by hour of day"
    }

    pub fn chart(counts: &[GroupCount]) -> BarChart {
        super::trip_count_bars(counts)
    }
}
