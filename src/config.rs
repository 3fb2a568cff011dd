use std::path::{Path, PathBuf};

use clap::Parser;

use crate::data::view_model::RecomputeOptions;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "trip-reports")]
#[command(about = "Interactive dashboard for historical ride-hailing trips", long_about = None)]
pub struct Config {
    /// Directory scanned for trip CSV files
    #[arg(long, env = "TRIP_REPORTS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Leading part of every trip file name
    #[arg(long, env = "TRIP_REPORTS_FILE_PREFIX", default_value = "uber-raw-data-")]
    pub file_prefix: String,

    /// Extension of trip files, without the dot
    #[arg(long, env = "TRIP_REPORTS_FILE_EXTENSION", default_value = "csv")]
    pub file_extension: String,

    /// Upper bound on pickups drawn on the map
    #[arg(long, env = "TRIP_REPORTS_MAP_SAMPLE_SIZE", default_value_t = 5000)]
    pub map_sample_size: usize,

    /// Width of the trailing rolling average, in hourly samples
    #[arg(long, env = "TRIP_REPORTS_ROLLING_WINDOW", default_value_t = 24)]
    pub rolling_window: usize,
}

impl Config {
    pub fn matches_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        let suffix = format!(".{}", self.file_extension);

        name.len() >= self.file_prefix.len() + suffix.len()
            && name.starts_with(&self.file_prefix)
            && name.ends_with(&suffix)
    }

    pub fn pattern_display(&self) -> String {
        self.data_dir
            .join(format!("{}*.{}", self.file_prefix, self.file_extension))
            .display()
            .to_string()
    }

    pub fn recompute_options(&self) -> RecomputeOptions {
        RecomputeOptions {
            rolling_window: self.rolling_window,
            map_sample_size: self.map_sample_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("trip-reports").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_point_at_the_raw_data_files() {
        let config = parse(&[]);

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.map_sample_size, 5000);
        assert_eq!(config.rolling_window, 24);
        assert_eq!(
            config.pattern_display(),
            Path::new("data").join("uber-raw-data-*.csv").display().to_string()
        );
    }

    #[test]
    fn matches_only_prefixed_files_with_the_extension() {
        let config = parse(&["--data-dir", "trips"]);

        assert!(config.matches_file(Path::new("trips/uber-raw-data-apr14.csv")));
        assert!(!config.matches_file(Path::new("trips/uber-raw-data-apr14.csv.bak")));
        assert!(!config.matches_file(Path::new("trips/other-apr14.csv")));
        assert!(!config.matches_file(Path::new("trips/uber-raw-data-.cs")));
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--file-prefix",
            "lyft-",
            "--file-extension",
            "txt",
            "--map-sample-size",
            "200",
            "--rolling-window",
            "6",
        ]);

        assert!(config.matches_file(Path::new("data/lyft-2015.txt")));
        assert_eq!(
            config.recompute_options(),
            RecomputeOptions {
                rolling_window: 6,
                map_sample_size: 200,
            }
        );
    }
}
