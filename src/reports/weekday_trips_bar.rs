use crate::charts::BarChart;
use crate::data::trip_counts::GroupCount;

pub struct WeekdayTripsReport;

impl WeekdayTripsReport {
    pub fn title() -> &'static str {
        "Trips per Day of Week"
    }

    pub fn subtitle() -> &'static str {
        "Pickups by weekday, Monday first"
    }

    pub fn chart(counts: &[GroupCount]) -> BarChart {
        super::trip_count_bars(counts)
    }
}
