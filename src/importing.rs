use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use serde::Deserialize;
use tokio::fs;
use tokio_util::compat::TokioAsyncReadCompatExt;

use crate::config::Config;
use crate::error::LoadError;

pub const TIMESTAMP_COLUMN: &str = "Date/Time";
pub const LATITUDE_COLUMN: &str = "Lat";
pub const LONGITUDE_COLUMN: &str = "Lon";
pub const BASE_COLUMN: &str = "Base";

const REQUIRED_COLUMNS: [&str; 4] = [
    TIMESTAMP_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    BASE_COLUMN,
];

const TIMESTAMP_FORMATS: [&str; 5] = [
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub timestamp: NaiveDateTime,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub base: String,
}

impl TripRecord {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

#[derive(Debug, Deserialize)]
struct TripCsvRow {
    #[serde(rename = "Date/Time")]
    date_time: String,
    #[serde(rename = "Lat")]
    lat: Option<f64>,
    #[serde(rename = "Lon")]
    lon: Option<f64>,
    #[serde(rename = "Base")]
    base: String,
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Lists the files in the data directory that match the configured name
/// pattern, sorted by path so loads are deterministic.
pub async fn discover_files(config: &Config) -> Result<Vec<PathBuf>, LoadError> {
    let dir_error = |source| LoadError::DataDir {
        path: config.data_dir.clone(),
        source,
    };

    let mut entries = fs::read_dir(&config.data_dir).await.map_err(dir_error)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(dir_error)? {
        let path = entry.path();
        if config.matches_file(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(LoadError::NoMatchingFiles {
            pattern: config.pattern_display(),
        });
    }

    files.sort();
    Ok(files)
}

pub async fn read_trip_csv(path: &Path) -> Result<Vec<TripRecord>, LoadError> {
    let file = fs::File::open(path).await.map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = AsyncReaderBuilder::new()
        .trim(csv_async::Trim::All)
        .create_reader(file.compat());

    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().await.map_err(csv_error)?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    let mut rows = reader.records();
    let mut records = Vec::new();

    while let Some(result) = rows.next().await {
        let record = result.map_err(csv_error)?;
        let row: TripCsvRow = record.deserialize(Some(&headers)).map_err(csv_error)?;

        let timestamp = parse_timestamp(&row.date_time).ok_or_else(|| LoadError::Timestamp {
            path: path.to_path_buf(),
            // Where the record starts, counting blank lines and quoted line breaks.
            line: record.position().map_or(0, |position| position.line()),
            value: row.date_time.clone(),
        })?;

        records.push(TripRecord {
            timestamp,
            latitude: row.lat,
            longitude: row.lon,
            base: row.base,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid fixture timestamp")
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            file_prefix: "uber-raw-data-".to_owned(),
            file_extension: "csv".to_owned(),
            map_sample_size: 5000,
            rolling_window: 24,
        }
    }

    #[test]
    fn parses_source_and_iso_timestamps() {
        assert_eq!(parse_timestamp("4/1/2014 0:11:00"), Some(at(2014, 4, 1, 0, 11)));
        assert_eq!(parse_timestamp("09/30/2014 22:58"), Some(at(2014, 9, 30, 22, 58)));
        assert_eq!(parse_timestamp("2014-04-02 17:00:00"), Some(at(2014, 4, 2, 17, 0)));
        assert_eq!(parse_timestamp("2014-04-02T17:00:00"), Some(at(2014, 4, 2, 17, 0)));
        assert_eq!(parse_timestamp(" 2014-04-02 17:00 "), Some(at(2014, 4, 2, 17, 0)));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("13/45/2014 0:00:00"), None);
    }

    #[tokio::test]
    async fn reads_rows_and_keeps_missing_coordinates_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("uber-raw-data-apr14.csv");
        std::fs::write(
            &path,
            "\"Date/Time\",\"Lat\",\"Lon\",\"Base\"\n\
             \"4/1/2014 0:11:00\",40.769,-73.9549,\"B02512\"\n\
             \"4/1/2014 0:17:00\",,,\"B02512\"\n",
        )
        .expect("write fixture");

        let records = read_trip_csv(&path).await.expect("fixture should load");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, at(2014, 4, 1, 0, 11));
        assert_eq!(records[0].coordinates(), Some((40.769, -73.9549)));
        assert_eq!(records[0].base, "B02512");
        assert_eq!(records[1].latitude, None);
        assert_eq!(records[1].coordinates(), None);
    }

    #[tokio::test]
    async fn rejects_files_without_the_base_column() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("uber-raw-data-may14.csv");
        std::fs::write(&path, "Date/Time,Lat,Lon\n5/1/2014 0:02:00,40.7521,-73.9914\n")
            .expect("write fixture");

        let error = read_trip_csv(&path).await.expect_err("missing column must fail");

        assert!(matches!(
            error,
            LoadError::MissingColumn {
                column: BASE_COLUMN,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn reports_the_line_of_a_malformed_timestamp() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("uber-raw-data-jun14.csv");
        std::fs::write(
            &path,
            "Date/Time,Lat,Lon,Base\n\
             6/1/2014 0:00:00,40.7293,-73.992,B02512\n\
             not a time,40.7131,-74.0097,B02512\n",
        )
        .expect("write fixture");

        let error = read_trip_csv(&path).await.expect_err("bad timestamp must fail");

        match error {
            LoadError::Timestamp { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not a time");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn timestamp_line_counts_blank_and_multiline_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("uber-raw-data-jul14.csv");
        std::fs::write(
            &path,
            "Date/Time,Lat,Lon,Base\n\
             7/1/2014 0:03:00,40.7586,-73.9706,B02512\n\
             \n\
             7/1/2014 0:05:00,40.7605,-73.9994,\"B02\n512\"\n\
             7/1/2014 bad,40.732,-73.9999,B02512\n",
        )
        .expect("write fixture");

        let error = read_trip_csv(&path).await.expect_err("bad timestamp must fail");

        match error {
            LoadError::Timestamp { line, value, .. } => {
                assert_eq!(line, 6);
                assert_eq!(value, "7/1/2014 bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn discovers_matching_files_in_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in [
            "uber-raw-data-may14.csv",
            "uber-raw-data-apr14.csv",
            "notes.txt",
            "uber-raw-data-janjune-15.zip",
        ] {
            std::fs::write(dir.path().join(name), "Date/Time,Lat,Lon,Base\n").expect("write");
        }

        let files = discover_files(&config_for(dir.path())).await.expect("files");
        let names: Vec<_> = files
            .iter()
            .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
            .collect();

        assert_eq!(names, ["uber-raw-data-apr14.csv", "uber-raw-data-may14.csv"]);
    }

    #[tokio::test]
    async fn missing_directory_and_empty_directory_are_errors() {
        let dir = tempfile::tempdir().expect("tempdir");

        let missing = discover_files(&config_for(&dir.path().join("absent"))).await;
        assert!(matches!(missing, Err(LoadError::DataDir { .. })));

        let empty = discover_files(&config_for(dir.path())).await;
        assert!(matches!(empty, Err(LoadError::NoMatchingFiles { .. })));
    }
}
