pub mod filter;
pub mod heatmap_weekday_hour;
pub mod hourly_series;
pub mod insights;
pub mod kpis;
pub mod map_sample;
pub mod trip_counts;
pub mod view_model;
