use rand::seq::index;
use rand::Rng;

use super::filter::FilteredView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Draws up to `max_rows` pickups without replacement. Only rows that carry
/// both coordinates are eligible.
pub fn sample_for_map<R: Rng + ?Sized>(
    view: &FilteredView<'_>,
    max_rows: usize,
    rng: &mut R,
) -> Vec<GeoPoint> {
    let located: Vec<GeoPoint> = view
        .rows
        .iter()
        .filter_map(|row| row.record.coordinates())
        .map(|(latitude, longitude)| GeoPoint {
            latitude,
            longitude,
        })
        .collect();

    let amount = max_rows.min(located.len());
    if amount == located.len() {
        return located;
    }

    index::sample(rng, located.len(), amount)
        .into_iter()
        .map(|position| located[position])
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::super::filter::fixtures::{at, date, trip};
    use super::super::filter::{filter, DateRange};
    use super::*;
    use crate::importing::TripRecord;

    fn located_trips(count: usize) -> Vec<TripRecord> {
        (0..count)
            .map(|i| TripRecord {
                latitude: Some(40.0 + i as f64 * 1e-4),
                longitude: Some(-74.0 - i as f64 * 1e-4),
                ..trip(at(2014, 4, 1, 0, 0) + chrono::Duration::seconds(i as i64), "B01")
            })
            .collect()
    }

    fn whole_month(records: &[TripRecord]) -> FilteredView<'_> {
        filter(records, DateRange::new(date(2014, 4, 1), date(2014, 4, 30)))
    }

    #[test]
    fn caps_the_sample_and_draws_distinct_rows_from_the_view() {
        let records = located_trips(6000);
        let view = whole_month(&records);
        let mut rng = StdRng::seed_from_u64(7);

        let sample = sample_for_map(&view, 5000, &mut rng);

        assert_eq!(sample.len(), 5000);
        let mut keys: Vec<i64> = sample
            .iter()
            .map(|point| ((point.latitude - 40.0) * 1e4).round() as i64)
            .collect();
        assert!(sample.iter().all(|point| records
            .iter()
            .any(|record| record.coordinates() == Some((point.latitude, point.longitude)))));
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 5000);
    }

    #[test]
    fn small_views_are_returned_whole() {
        let records = located_trips(12);
        let view = whole_month(&records);

        let sample = sample_for_map(&view, 5000, &mut StdRng::seed_from_u64(1));

        assert_eq!(sample.len(), 12);
    }

    #[test]
    fn rows_without_coordinates_are_skipped() {
        let mut records = located_trips(3);
        records[1].longitude = None;
        let view = whole_month(&records);

        let sample = sample_for_map(&view, 5000, &mut StdRng::seed_from_u64(1));

        assert_eq!(sample.len(), 2);
        assert!(sample.len() <= view.len().min(5000));
    }

    #[test]
    fn empty_view_gives_no_points() {
        let sample = sample_for_map(&FilteredView::default(), 5000, &mut StdRng::seed_from_u64(3));

        assert!(sample.is_empty());
    }
}
