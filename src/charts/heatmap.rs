use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::interaction::{handle_event, hover_interaction, WheelZoom};
use super::model::{ChartConfig, HeatmapGrid, InteractionConfig, InteractionState};
use super::plot::{draw_selection, draw_tooltip, label_stride, lerp_color, PlotArea};
use crate::message::Message;

const MAX_COLUMN_LABELS: usize = 12;

pub struct HeatmapChart {
    cache: Cache,
    grid: HeatmapGrid,
    low_color: Option<Color>,
    high_color: Option<Color>,
    config: ChartConfig,
    interaction: InteractionConfig,
}

impl HeatmapChart {
    pub fn new(grid: HeatmapGrid) -> Self {
        Self {
            cache: Cache::new(),
            grid,
            low_color: None,
            high_color: None,
            config: ChartConfig::default(),
            interaction: InteractionConfig {
                max_zoom: 4.0,
                ..InteractionConfig::default()
            },
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Colour scale from the smallest to the largest cell.
    pub fn with_scale(mut self, low: Color, high: Color) -> Self {
        self.low_color = Some(low);
        self.high_color = Some(high);
        self
    }

    fn cell_size(&self, area: &PlotArea, state: &InteractionState) -> Size {
        let zoom = state.effective_zoom();
        let cols = self.grid.x_labels.len().max(1) as f32;
        let rows = self.grid.y_labels.len().max(1) as f32;
        Size::new((area.width() / cols) * zoom, (area.height() / rows) * zoom)
    }

    fn value_range(&self) -> (f32, f32) {
        let (min, max) = self
            .grid
            .values
            .iter()
            .flatten()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), value| {
                (min.min(*value), max.max(*value))
            });
        (min, (max - min).max(1.0))
    }

    fn cell_at(
        &self,
        area: &PlotArea,
        state: &InteractionState,
        point: Point,
    ) -> Option<(usize, usize)> {
        let cell = self.cell_size(area, state);
        let x = ((point.x - area.left - state.pan.x) / cell.width).floor();
        let y = ((point.y - area.top - state.pan.y) / cell.height).floor();

        (x >= 0.0
            && y >= 0.0
            && (x as usize) < self.grid.x_labels.len()
            && (y as usize) < self.grid.y_labels.len())
        .then_some((x as usize, y as usize))
    }
}

impl canvas::Program<Message> for HeatmapChart {
    type State = InteractionState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        handle_event(&self.interaction, state, WheelZoom::UpZoomsIn, event, bounds, cursor)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        if self.grid.x_labels.is_empty() || self.grid.y_labels.is_empty() {
            return geometries;
        }
        let Some(area) = PlotArea::new(bounds.size(), self.config.padding) else {
            return geometries;
        };

        let palette = theme.extended_palette();
        let low = self.low_color.unwrap_or(palette.background.weak.color);
        let high = self.high_color.unwrap_or(palette.primary.strong.color);

        // Cells follow zoom and pan, so only the untouched view is cached.
        let draw_cells = |frame: &mut Frame| {
            let cell = self.cell_size(&area, state);
            let (min, range) = self.value_range();

            for (y, row) in self.grid.values.iter().enumerate() {
                for (x, value) in row.iter().enumerate() {
                    let origin = Point::new(
                        area.left + x as f32 * cell.width + state.pan.x,
                        area.top + y as f32 * cell.height + state.pan.y,
                    );
                    let rect = Path::rectangle(
                        origin,
                        Size::new(cell.width.max(1.0), cell.height.max(1.0)),
                    );
                    frame.fill(&rect, lerp_color(low, high, (*value - min) / range));
                }
            }

            let stride = label_stride(self.grid.x_labels.len(), MAX_COLUMN_LABELS);
            for (x, label) in self.grid.x_labels.iter().enumerate().step_by(stride) {
                frame.fill_text(Text {
                    content: label.clone(),
                    position: Point::new(
                        area.left + x as f32 * cell.width + state.pan.x + cell.width / 2.0,
                        area.bottom + 8.0,
                    ),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }

            for (y, label) in self.grid.y_labels.iter().enumerate() {
                frame.fill_text(Text {
                    content: label.clone(),
                    position: Point::new(
                        area.left - 8.0,
                        area.top + y as f32 * cell.height + state.pan.y + cell.height / 2.0,
                    ),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Right.into(),
                    align_y: iced::alignment::Vertical::Center.into(),
                    ..Text::default()
                });
            }
        };

        let untouched = state.zoom == 1.0 && state.pan == iced::Vector::new(0.0, 0.0);
        if untouched {
            geometries.push(self.cache.draw(renderer, bounds.size(), draw_cells));
        } else {
            let mut frame = Frame::new(renderer, bounds.size());
            draw_cells(&mut frame);
            geometries.push(frame.into_geometry());
        }

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let mut overlay = Frame::new(renderer, bounds.size());

            if self.interaction.enable_hover && area.contains(cursor_pos) {
                if let Some((x, y)) = self.cell_at(&area, state, cursor_pos) {
                    let value = self.grid.values[y][x];
                    draw_tooltip(
                        &mut overlay,
                        &area,
                        theme,
                        cursor_pos,
                        format!(
                            "{} / {}: {}",
                            self.grid.y_labels[y], self.grid.x_labels[x], value
                        ),
                    );
                }
            }

            draw_selection(&mut overlay, state, theme);
            geometries.push(overlay.into_geometry());
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        hover_interaction(bounds, cursor, mouse::Interaction::Crosshair)
    }
}
