use crate::charts::BarChart;
use crate::data::trip_counts::GroupCount;

pub struct BaseVolumeReport;

impl BaseVolumeReport {
    pub fn title() -> &'static str {
        "Base Performance"
    }

    pub fn subtitle() -> &'static str {
        "Trips handled by each dispatch base"
    }

    pub fn chart(counts: &[GroupCount]) -> BarChart {
        super::trip_count_bars(counts)
    }
}
