use iced::{Color, Point, Vector};

#[derive(Debug, Clone)]
pub struct LineSeries {
    pub name: String,
    pub color: Color,
    pub points: Vec<(f32, f32)>,
    pub markers: bool,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, color: Color, points: Vec<(f32, f32)>) -> Self {
        Self {
            name: name.into(),
            color,
            points,
            markers: false,
        }
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub padding: f32,
    pub grid_lines: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            grid_lines: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BarPoint {
    pub label: String,
    pub value: f32,
}

/// Bars are shaded from `low_color` up to `color` by their value, the way a
/// continuous colour scale is applied to a count.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    pub color: Color,
    pub low_color: Option<Color>,
    pub values: Vec<BarPoint>,
}

#[derive(Debug, Clone)]
pub struct HeatmapGrid {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub values: Vec<Vec<f32>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f32,
    pub longitude: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct InteractionConfig {
    pub enable_hover: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_selection: bool,
    pub max_zoom: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            enable_hover: true,
            enable_zoom: true,
            enable_pan: true,
            enable_selection: true,
            max_zoom: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InteractionState {
    pub zoom: f32,
    pub pan: Vector,
    pub selection_start: Option<Point>,
    pub selection_end: Option<Point>,
    pub pan_start: Option<Point>,
    pub pan_origin: Vector,
}

impl InteractionState {
    pub fn effective_zoom(&self) -> f32 {
        if self.zoom <= 0.0 {
            1.0
        } else {
            self.zoom
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vector::new(0.0, 0.0),
            selection_start: None,
            selection_end: None,
            pan_start: None,
            pan_origin: Vector::new(0.0, 0.0),
        }
    }
}
