pub mod bar;
pub mod heatmap;
pub mod interaction;
pub mod line;
pub mod model;
pub mod plot;
pub mod scatter;

pub use bar::BarChart;
pub use heatmap::HeatmapChart;
pub use line::LineChart;
pub use model::{BarPoint, BarSeries, ChartConfig, GeoCoordinate, HeatmapGrid, LineSeries};
pub use scatter::ScatterMap;
