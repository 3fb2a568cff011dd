use chrono::{Duration, NaiveDateTime, Timelike};

use super::filter::FilteredView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket {
    pub start: NaiveDateTime,
    pub count: usize,
}

pub fn floor_to_hour(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .date()
        .and_hms_opt(timestamp.hour(), 0, 0)
        .unwrap_or(timestamp)
}

/// Buckets the view into consecutive hours from the first trip's hour to the
/// last trip's hour. Hours without trips are kept with a zero count.
pub fn resample_hourly(view: &FilteredView<'_>) -> Vec<HourBucket> {
    let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for row in &view.rows {
        let hour = floor_to_hour(row.record.timestamp);
        bounds = Some(match bounds {
            Some((first, last)) => (first.min(hour), last.max(hour)),
            None => (hour, hour),
        });
    }

    let Some((first, last)) = bounds else {
        return Vec::new();
    };

    let len = (last - first).num_hours() as usize + 1;
    let mut counts = vec![0usize; len];
    for row in &view.rows {
        let offset = (floor_to_hour(row.record.timestamp) - first).num_hours() as usize;
        counts[offset] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(offset, count)| HourBucket {
            start: first + Duration::hours(offset as i64),
            count,
        })
        .collect()
}

/// Trailing mean over `window` samples. The first `window - 1` outputs have no
/// value because the window is not yet full.
pub fn rolling_mean(samples: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; samples.len()];
    }

    let mut output = Vec::with_capacity(samples.len());
    let mut sum = 0.0;

    for (index, value) in samples.iter().enumerate() {
        sum += value;
        if index >= window {
            sum -= samples[index - window];
        }

        if index + 1 >= window {
            output.push(Some(sum / window as f64));
        } else {
            output.push(None);
        }
    }

    output
}

pub fn bucket_counts(buckets: &[HourBucket]) -> Vec<f64> {
    buckets.iter().map(|bucket| bucket.count as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::super::filter::fixtures::{at, date, scenario, trip};
    use super::super::filter::{filter, DateRange};
    use super::*;

    #[test]
    fn covers_every_hour_between_first_and_last_trip() {
        let records = scenario();
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 2)));

        let buckets = resample_hourly(&view);

        // 2014-04-01 08:00 through 2014-04-02 17:00.
        assert_eq!(buckets.len(), 34);
        assert_eq!(buckets[0], HourBucket { start: at(2014, 4, 1, 8, 0), count: 2 });
        assert_eq!(buckets[33], HourBucket { start: at(2014, 4, 2, 17, 0), count: 1 });
        assert!(buckets[1..33].iter().all(|bucket| bucket.count == 0));
        assert!(buckets
            .windows(2)
            .all(|pair| pair[1].start - pair[0].start == Duration::hours(1)));
        assert_eq!(buckets.iter().map(|bucket| bucket.count).sum::<usize>(), view.len());
    }

    #[test]
    fn unordered_input_still_sums_to_the_view() {
        let records = vec![
            trip(at(2014, 4, 3, 2, 59), "B01"),
            trip(at(2014, 4, 1, 23, 1), "B01"),
            trip(at(2014, 4, 2, 5, 45), "B01"),
            trip(at(2014, 4, 1, 23, 59), "B01"),
        ];
        let view = filter(&records, DateRange::new(date(2014, 4, 1), date(2014, 4, 3)));

        let buckets = resample_hourly(&view);

        assert_eq!(buckets.first().map(|bucket| bucket.start), Some(at(2014, 4, 1, 23, 0)));
        assert_eq!(buckets.last().map(|bucket| bucket.start), Some(at(2014, 4, 3, 2, 0)));
        assert_eq!(buckets.len(), 28);
        assert_eq!(buckets.iter().map(|bucket| bucket.count).sum::<usize>(), 4);
    }

    #[test]
    fn empty_view_has_no_buckets() {
        assert!(resample_hourly(&FilteredView::default()).is_empty());
    }

    #[test]
    fn rolling_mean_matches_the_trailing_window() {
        let samples: Vec<f64> = (0..60).map(|i| ((i * 17) % 11) as f64).collect();

        let rolled = rolling_mean(&samples, 24);

        assert_eq!(rolled.len(), samples.len());
        assert!(rolled[..23].iter().all(Option::is_none));
        for (index, value) in rolled.iter().enumerate().skip(23) {
            let expected = samples[index + 1 - 24..=index].iter().sum::<f64>() / 24.0;
            let actual = value.expect("window is full");
            assert!((actual - expected).abs() < 1e-9, "index {index}");
        }
    }

    #[test]
    fn short_series_never_fills_the_window() {
        let rolled = rolling_mean(&[1.0, 2.0, 3.0], 24);

        assert_eq!(rolled, vec![None, None, None]);
        assert_eq!(rolling_mean(&[4.0, 8.0], 1), vec![Some(4.0), Some(8.0)]);
        assert_eq!(rolling_mean(&[4.0, 8.0], 0), vec![None, None]);
    }
}
