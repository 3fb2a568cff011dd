use std::collections::BTreeSet;

use super::filter::FilteredView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpis {
    pub total_trips: usize,
    /// Trips divided by the number of distinct day-of-month values seen.
    pub avg_trips_per_day: f64,
    /// `None` when the view is empty. Ties go to the earliest hour.
    pub peak_hour: Option<u32>,
}

pub fn compute_kpis(view: &FilteredView<'_>) -> Kpis {
    let total_trips = view.len();

    let distinct_days: BTreeSet<u32> = view.rows.iter().map(|row| row.calendar.day).collect();
    let avg_trips_per_day = if distinct_days.is_empty() {
        0.0
    } else {
        total_trips as f64 / distinct_days.len() as f64
    };

    let mut per_hour = [0usize; 24];
    for row in &view.rows {
        per_hour[row.calendar.hour as usize] += 1;
    }
    let peak_hour = per_hour
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .fold(None, |best: Option<(usize, usize)>, (hour, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((hour, *count)),
        })
        .map(|(hour, _)| hour as u32);

    Kpis {
        total_trips,
        avg_trips_per_day,
        peak_hour,
    }
}

pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

impl Kpis {
    pub fn total_trips_label(&self) -> String {
        format_count(self.total_trips)
    }

    /// Whole trips per day, truncated.
    pub fn avg_trips_per_day_label(&self) -> String {
        format_count(self.avg_trips_per_day.trunc() as usize)
    }

    pub fn peak_hour_label(&self) -> String {
        self.peak_hour
            .map(|hour| hour.to_string())
            .unwrap_or_else(|| "N/A".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter::fixtures::{at, date, scenario, trip};
    use super::super::filter::{filter, DateRange};
    use super::*;

    #[test]
    fn scenario_kpis() {
        let records = scenario();
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 1)));

        let kpis = compute_kpis(&view);

        assert_eq!(kpis.total_trips, 2);
        assert_eq!(kpis.avg_trips_per_day, 2.0);
        assert_eq!(kpis.peak_hour, Some(8));
    }

    #[test]
    fn inverted_range_degrades_to_zero_and_na() {
        let records = scenario();
        let view = filter(&records, DateRange::new(date(2014, 4, 2), date(2014, 4, 1)));

        let kpis = compute_kpis(&view);

        assert_eq!(kpis.total_trips, 0);
        assert_eq!(kpis.avg_trips_per_day, 0.0);
        assert_eq!(kpis.peak_hour, None);
        assert_eq!(kpis.peak_hour_label(), "N/A");
        assert_eq!(kpis.avg_trips_per_day_label(), "0");
    }

    #[test]
    fn distinct_days_are_days_of_month() {
        // April 1st and May 1st share a day-of-month value.
        let records = vec![
            trip(at(2014, 4, 1, 7, 0), "B01"),
            trip(at(2014, 5, 1, 7, 0), "B01"),
            trip(at(2014, 5, 2, 7, 0), "B01"),
        ];
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 5, 31)));

        assert_eq!(compute_kpis(&view).avg_trips_per_day, 1.5);
    }

    #[test]
    fn peak_hour_ties_resolve_to_the_earliest_hour() {
        let records = vec![
            trip(at(2014, 4, 1, 17, 0), "B01"),
            trip(at(2014, 4, 1, 9, 0), "B01"),
            trip(at(2014, 4, 1, 17, 30), "B01"),
            trip(at(2014, 4, 1, 9, 30), "B01"),
        ];
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 1)));

        assert_eq!(compute_kpis(&view).peak_hour, Some(9));
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(4_534_327), "4,534,327");
    }
}
