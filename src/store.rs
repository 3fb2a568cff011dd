//! The loaded trip records.
//!
//! A [`TripStore`] is built once at startup by [`TripStore::load`] and only
//! replaced when the user asks for a reload. It is never mutated after
//! creation, so every recompute borrows it read-only.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::Config;
use crate::data::filter::DateRange;
use crate::error::LoadError;
use crate::importing::{discover_files, read_trip_csv, TripRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct TripStore {
    records: Arc<Vec<TripRecord>>,
    sources: Vec<SourceFile>,
    span: DateRange,
}

impl TripStore {
    pub async fn load(config: Config) -> Result<Self, LoadError> {
        log::info!("Loading trips from {}", config.pattern_display());

        let files = discover_files(&config).await?;
        let mut records = Vec::new();
        let mut sources = Vec::with_capacity(files.len());

        for path in files {
            let rows = read_trip_csv(&path).await?;
            log::debug!("Read {} trips from {}", rows.len(), path.display());
            sources.push(SourceFile {
                path,
                rows: rows.len(),
            });
            records.extend(rows);
        }

        let store = Self::from_records(records, sources).ok_or_else(|| LoadError::NoRecords {
            pattern: config.pattern_display(),
        })?;

        log::info!(
            "Loaded {} trips from {} file(s), {} to {}",
            store.len(),
            store.sources.len(),
            store.span.start,
            store.span.end
        );

        Ok(store)
    }

    /// Returns `None` when there are no records to serve.
    pub fn from_records(records: Vec<TripRecord>, sources: Vec<SourceFile>) -> Option<Self> {
        let first = records.iter().map(|record| record.timestamp).min()?;
        let last = records.iter().map(|record| record.timestamp).max()?;

        Some(Self {
            records: Arc::new(records),
            sources,
            span: DateRange::new(first.date(), last.date()),
        })
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    /// First and last trip dates; the default filter.
    pub fn span(&self) -> DateRange {
        self.span
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.span.start, self.span.end)
    }
}

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Loaded(TripStore),
    Failed(String),
}

impl LoadState {
    pub fn store(&self) -> Option<&TripStore> {
        match self {
            Self::Loaded(store) => Some(store),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
