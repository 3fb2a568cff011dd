use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::importing::TripRecord;

/// Inclusive calendar-date bounds. An inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    pub weekday: Weekday,
}

pub fn derive_calendar_fields(timestamp: NaiveDateTime) -> CalendarFields {
    CalendarFields {
        hour: timestamp.hour(),
        day: timestamp.day(),
        month: timestamp.month(),
        weekday: timestamp.weekday(),
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredTrip<'a> {
    pub record: &'a TripRecord,
    pub calendar: CalendarFields,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    pub rows: Vec<FilteredTrip<'a>>,
}

impl FilteredView<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn filter(records: &[TripRecord], range: DateRange) -> FilteredView<'_> {
    if range.is_inverted() {
        return FilteredView::default();
    }

    let rows = records
        .iter()
        .filter(|record| range.contains(record.timestamp.date()))
        .map(|record| FilteredTrip {
            record,
            calendar: derive_calendar_fields(record.timestamp),
        })
        .collect();

    FilteredView { rows }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::importing::TripRecord;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        date(year, month, day)
            .and_hms_opt(hour, minute, 0)
            .expect("valid fixture time")
    }

    pub fn trip(timestamp: NaiveDateTime, base: &str) -> TripRecord {
        TripRecord {
            timestamp,
            latitude: Some(40.75),
            longitude: Some(-73.98),
            base: base.to_owned(),
        }
    }

    /// The three-trip scenario used across the report tests.
    pub fn scenario() -> Vec<TripRecord> {
        vec![
            trip(at(2014, 4, 1, 8, 0), "B01"),
            trip(at(2014, 4, 1, 8, 30), "B01"),
            trip(at(2014, 4, 2, 17, 0), "B02"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{at, date, scenario, trip};
    use super::*;

    #[test]
    fn keeps_rows_inside_the_inclusive_range() {
        let records = scenario();

        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 1)));

        assert_eq!(view.len(), 2);
        assert!(view
            .rows
            .iter()
            .all(|row| row.record.timestamp.date() == date(2014, 4, 1)));
    }

    #[test]
    fn both_bounds_are_inclusive() {
        let records = vec![
            trip(at(2014, 4, 30, 23, 59), "B01"),
            trip(at(2014, 5, 1, 0, 0), "B01"),
            trip(at(2014, 5, 31, 23, 59), "B01"),
            trip(at(2014, 6, 1, 0, 0), "B01"),
        ];

        let view = filter(&records, DateRange::new(date(2014, 5, 1), date(2014, 5, 31)));

        assert_eq!(view.len(), 2);
    }

    #[test]
    fn count_matches_a_brute_force_scan() {
        let records: Vec<_> = (0..200)
            .map(|i| trip(at(2014, 4, 1, 0, 0) + chrono::Duration::hours(i * 7), "B01"))
            .collect();
        let range = DateRange::new(date(2014, 4, 10), date(2014, 4, 20));

        let expected = records
            .iter()
            .filter(|record| {
                let day = record.timestamp.date();
                day >= range.start && day <= range.end
            })
            .count();

        assert_eq!(filter(&records, range).len(), expected);
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let records = scenario();

        let view = filter(&records, DateRange::new(date(2014, 4, 2), date(2014, 4, 1)));

        assert!(view.is_empty());
    }

    #[test]
    fn derives_calendar_fields_from_the_timestamp() {
        let fields = derive_calendar_fields(at(2014, 9, 14, 21, 5));

        assert_eq!(
            fields,
            CalendarFields {
                hour: 21,
                day: 14,
                month: 9,
                weekday: Weekday::Sun,
            }
        );
        assert_eq!(weekday_name(fields.weekday), "Sunday");
    }
}
