use std::collections::HashMap;

use chrono::Weekday;

use super::filter::{weekday_name, FilteredView};

/// Dense count matrix, `values[row][col]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountGrid {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<usize>>,
}

impl CountGrid {
    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty() || self.col_labels.is_empty()
    }

    pub fn total(&self) -> usize {
        self.values.iter().flatten().sum()
    }
}

/// Weekday x hour trip counts. Rows are the weekdays present in the view,
/// Monday first; columns are all 24 hours. Absent combinations are zero.
pub fn cross_tab(view: &FilteredView<'_>) -> CountGrid {
    if view.is_empty() {
        return CountGrid::default();
    }

    let mut weekdays: Vec<Weekday> = Vec::new();
    let mut map: HashMap<(Weekday, u32), usize> = HashMap::new();

    for row in &view.rows {
        let weekday = row.calendar.weekday;
        if !weekdays.contains(&weekday) {
            weekdays.push(weekday);
        }
        *map.entry((weekday, row.calendar.hour)).or_default() += 1;
    }

    weekdays.sort_by_key(|weekday| weekday.num_days_from_monday());

    let mut values = vec![vec![0; 24]; weekdays.len()];
    for (y, weekday) in weekdays.iter().enumerate() {
        for hour in 0..24u32 {
            if let Some(count) = map.get(&(*weekday, hour)) {
                values[y][hour as usize] = *count;
            }
        }
    }

    CountGrid {
        row_labels: weekdays
            .iter()
            .map(|weekday| weekday_name(*weekday).to_owned())
            .collect(),
        col_labels: (0..24).map(|hour: u32| hour.to_string()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter::fixtures::{at, date, scenario, trip};
    use super::super::filter::{filter, DateRange};
    use super::*;

    #[test]
    fn fills_absent_cells_with_zero() {
        let records = scenario();
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 2)));

        let grid = cross_tab(&view);

        assert_eq!(grid.row_labels, vec!["Tuesday", "Wednesday"]);
        assert_eq!(grid.col_labels.len(), 24);
        assert_eq!(grid.values[0][8], 2);
        assert_eq!(grid.values[1][17], 1);
        assert_eq!(grid.values[0][17], 0);
        assert_eq!(grid.total(), view.len());
    }

    #[test]
    fn rows_follow_calendar_order() {
        let records = vec![
            trip(at(2014, 4, 6, 1, 0), "B01"), // Sunday
            trip(at(2014, 4, 4, 1, 0), "B01"), // Friday
            trip(at(2014, 4, 7, 1, 0), "B01"), // Monday
        ];
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 30)));

        assert_eq!(cross_tab(&view).row_labels, vec!["Monday", "Friday", "Sunday"]);
    }

    #[test]
    fn empty_view_gives_an_empty_grid() {
        let grid = cross_tab(&FilteredView::default());

        assert!(grid.is_empty());
        assert_eq!(grid.total(), 0);
    }
}
