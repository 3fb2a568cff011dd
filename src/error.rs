use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the trip records from loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data directory could not be listed.
    #[error("Failed to read data directory {}: {source}", path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No file in the data directory matched the configured pattern.
    #[error("No trip files match {pattern}")]
    NoMatchingFiles { pattern: String },

    /// A trip file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A trip file is missing one of the expected columns.
    #[error("{} is missing the {column:?} column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// The CSV reader rejected a row.
    #[error("CSV parse error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv_async::Error,
    },

    /// A `Date/Time` value matched none of the accepted formats.
    #[error("{}:{line}: unrecognised timestamp {value:?}", path.display())]
    Timestamp {
        path: PathBuf,
        line: u64,
        value: String,
    },

    /// Every matching file was empty.
    #[error("Trip files matching {pattern} contain no records")]
    NoRecords { pattern: String },
}
