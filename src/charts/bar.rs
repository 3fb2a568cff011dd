use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Text};
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::interaction::{handle_event, hover_interaction, WheelZoom};
use super::model::{BarSeries, ChartConfig, InteractionConfig, InteractionState};
use super::plot::{
    draw_axes, draw_selection, draw_tooltip, draw_value_grid, label_stride, lerp_color, PlotArea,
};
use crate::message::Message;

const MAX_LABELS: usize = 12;

pub struct BarChart {
    cache: Cache,
    series: BarSeries,
    config: ChartConfig,
    interaction: InteractionConfig,
}

impl BarChart {
    pub fn new(series: BarSeries) -> Self {
        Self {
            cache: Cache::new(),
            series,
            config: ChartConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    fn max_value(&self) -> f32 {
        self.series
            .values
            .iter()
            .map(|point| point.value)
            .fold(0.0_f32, f32::max)
            .max(1.0)
    }

    fn bar_width(&self, area: &PlotArea, state: &InteractionState) -> f32 {
        (area.width() / self.series.values.len() as f32) * state.effective_zoom()
    }

    fn bar_at(&self, area: &PlotArea, state: &InteractionState, x: f32) -> Option<usize> {
        let index = ((x - area.left - state.pan.x) / self.bar_width(area, state)).floor();
        (index >= 0.0 && (index as usize) < self.series.values.len()).then_some(index as usize)
    }
}

impl canvas::Program<Message> for BarChart {
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
        if self.series.values.is_empty() {
            return geometries;
        }
        let Some(area) = PlotArea::new(bounds.size(), self.config.padding) else {
            return geometries;
        };

        let max_value = self.max_value();
        let axes = self.cache.draw(renderer, bounds.size(), |frame| {
            draw_value_grid(frame, &area, theme, self.config.grid_lines, (0.0, max_value));
            draw_axes(frame, &area, theme);
        });
        geometries.push(axes);

        // Bars move with zoom and pan, so they are redrawn every frame.
        let mut bars = Frame::new(renderer, bounds.size());
        let text_color = theme.extended_palette().background.base.text;
        let bar_width = self.bar_width(&area, state);
        let stride = label_stride(self.series.values.len(), MAX_LABELS);
        let low_color = self.series.low_color.unwrap_or(self.series.color);

        for (index, point) in self.series.values.iter().enumerate() {
            let x = area.left + index as f32 * bar_width + state.pan.x;
            let height = (point.value / max_value) * area.height();
            let rect = Path::rectangle(
                Point::new(x + bar_width * 0.1, area.bottom - height),
                Size::new(bar_width * 0.8, height),
            );
            bars.fill(
                &rect,
                lerp_color(low_color, self.series.color, point.value / max_value),
            );

            if index % stride == 0 {
                bars.fill_text(Text {
                    content: point.label.clone(),
                    position: Point::new(x + bar_width * 0.5, area.bottom + 6.0),
                    color: text_color,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }
        }

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if self.interaction.enable_hover && area.contains(cursor_pos) {
                if let Some(index) = self.bar_at(&area, state, cursor_pos.x) {
                    let point = &self.series.values[index];
                    draw_tooltip(
                        &mut bars,
                        &area,
                        theme,
                        cursor_pos,
                        format!("{}: {} {}", point.label, point.value, self.series.name),
                    );
                }
            }
        }

        draw_selection(&mut bars, state, theme);
        geometries.push(bars.into_geometry());

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        hover_interaction(bounds, cursor, mouse::Interaction::Pointer)
    }
}
