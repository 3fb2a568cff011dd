use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;

use super::filter::{weekday_name, FilteredTrip, FilteredView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Hour,
    Weekday,
    Month,
    Base,
}

/// A group label. The derived ordering is the order groups are reported in:
/// hours and months numerically, weekdays Monday first, bases by code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupValue {
    Hour(u32),
    Weekday(u32),
    Month(u32),
    Base(String),
}

impl GroupValue {
    fn of(key: GroupKey, row: &FilteredTrip<'_>) -> Self {
        match key {
            GroupKey::Hour => Self::Hour(row.calendar.hour),
            GroupKey::Weekday => Self::Weekday(row.calendar.weekday.num_days_from_monday()),
            GroupKey::Month => Self::Month(row.calendar.month),
            GroupKey::Base => Self::Base(row.record.base.clone()),
        }
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour(hour) => write!(f, "{hour}"),
            Self::Weekday(index) => f.write_str(weekday_name(weekday_from_monday(*index))),
            Self::Month(month) => write!(f, "{month}"),
            Self::Base(base) => f.write_str(base),
        }
    }
}

pub fn weekday_from_monday(index: u32) -> Weekday {
    match index % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: GroupValue,
    pub count: usize,
}

/// Counts rows per group. Groups without rows are left out.
pub fn aggregate_by(view: &FilteredView<'_>, key: GroupKey) -> Vec<GroupCount> {
    let mut counts: BTreeMap<GroupValue, usize> = BTreeMap::new();

    for row in &view.rows {
        *counts.entry(GroupValue::of(key, row)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}
