use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme};

use super::interaction::{handle_event, hover_interaction, WheelZoom};
use super::model::{ChartConfig, InteractionConfig, InteractionState, LineSeries};
use super::plot::{
    axis_stroke, draw_axes, draw_selection, draw_tooltip, draw_value_grid, format_tick, PlotArea,
};
use crate::message::Message;

type XLabeler = Box<dyn Fn(f32) -> String>;

pub struct LineChart {
    cache: Cache,
    series: Vec<LineSeries>,
    x_range: Option<(f32, f32)>,
    y_range: Option<(f32, f32)>,
    x_labeler: XLabeler,
    config: ChartConfig,
    interaction: InteractionConfig,
}

/// Data-to-screen mapping for the current zoom and pan.
struct Projection {
    area: PlotArea,
    x_min: f32,
    y_min: f32,
    x_span: f32,
    y_span: f32,
    pan: iced::Vector,
}

impl Projection {
    fn to_screen(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.area.left + ((x - self.x_min) / self.x_span) * self.area.width() + self.pan.x,
            self.area.bottom - ((y - self.y_min) / self.y_span) * self.area.height() + self.pan.y,
        )
    }
}

impl LineChart {
    pub fn new(series: Vec<LineSeries>) -> Self {
        Self {
            cache: Cache::new(),
            series,
            x_range: None,
            y_range: None,
            x_labeler: Box::new(format_tick),
            config: ChartConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }

    pub fn with_x_range(mut self, range: (f32, f32)) -> Self {
        self.x_range = Some(range);
        self
    }

    pub fn with_y_range(mut self, range: (f32, f32)) -> Self {
        self.y_range = Some(range);
        self
    }

    /// Formats x values for tick labels and the hover read-out.
    pub fn with_x_labels(mut self, labeler: impl Fn(f32) -> String + 'static) -> Self {
        self.x_labeler = Box::new(labeler);
        self
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    fn data_bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for (x, y) in self.series.iter().flat_map(|series| series.points.iter()) {
            min_x = min_x.min(*x);
            max_x = max_x.max(*x);
            min_y = min_y.min(*y);
            max_y = max_y.max(*y);
        }

        (min_x.is_finite() && min_y.is_finite()).then_some((min_x, max_x, min_y, max_y))
    }

    fn ranges(&self) -> Option<(f32, f32, f32, f32)> {
        let (min_x, max_x, min_y, max_y) = self.data_bounds()?;
        let (x_min, x_max) = self.x_range.unwrap_or((min_x, max_x));
        let (y_min, y_max) = self.y_range.unwrap_or((min_y, max_y));
        Some((x_min, x_max, y_min, y_max))
    }

    fn draw_x_ticks(
        &self,
        frame: &mut Frame,
        area: &PlotArea,
        theme: &Theme,
        (x_min, x_max): (f32, f32),
    ) {
        let grid_lines = self.config.grid_lines.max(1);
        let text_color = theme.extended_palette().background.base.text;

        for (i, value) in tick_values((x_min, x_max), grid_lines).into_iter().enumerate() {
            let x = area.left + (i as f32 / grid_lines as f32) * area.width();
            let line = Path::line(Point::new(x, area.top), Point::new(x, area.bottom));
            frame.stroke(&line, axis_stroke(theme));

            frame.fill_text(Text {
                content: (self.x_labeler)(value),
                position: Point::new(x, area.bottom + 8.0),
                color: text_color,
                size: 11.0.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }
    }
}

/// Degenerate ranges are widened to one unit so a single point still gets an axis.
fn span((min, max): (f32, f32)) -> f32 {
    (max - min).max(1.0)
}

/// Evenly spaced x values under each of the `grid_lines + 1` ticks.
fn tick_values(range: (f32, f32), grid_lines: usize) -> Vec<f32> {
    let grid_lines = grid_lines.max(1);
    let width = span(range);
    (0..=grid_lines)
        .map(|i| range.0 + (i as f32 / grid_lines as f32) * width)
        .collect()
}

impl canvas::Program<Message> for LineChart {
    type State = InteractionState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        handle_event(&self.interaction, state, WheelZoom::UpZoomsOut, event, bounds, cursor)
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
        let Some((x_min, x_max, y_min, y_max)) = self.ranges() else {
            return geometries;
        };
        let Some(area) = PlotArea::new(bounds.size(), self.config.padding) else {
            return geometries;
        };

        let grid = self.cache.draw(renderer, bounds.size(), |frame| {
            draw_axes(frame, &area, theme);
            let y_top = y_min + span((y_min, y_max));
            draw_value_grid(frame, &area, theme, self.config.grid_lines, (y_min, y_top));
            self.draw_x_ticks(frame, &area, theme, (x_min, x_max));
        });
        geometries.push(grid);

        let zoom = state.effective_zoom();
        let projection = Projection {
            area,
            x_min,
            y_min,
            x_span: span((x_min, x_max)) / zoom,
            y_span: span((y_min, y_max)) / zoom,
            pan: state.pan,
        };

        let mut lines = Frame::new(renderer, bounds.size());
        for series in &self.series {
            if series.points.len() >= 2 {
                let path = Path::new(|builder| {
                    for (index, (x, y)) in series.points.iter().enumerate() {
                        let point = projection.to_screen(*x, *y);
                        if index == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                });
                lines.stroke(
                    &path,
                    Stroke::default().with_width(2.0).with_color(series.color),
                );
            }

            if series.markers || series.points.len() == 1 {
                for (x, y) in &series.points {
                    lines.fill(&Path::circle(projection.to_screen(*x, *y), 3.5), series.color);
                }
            }
        }

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if self.interaction.enable_hover && area.contains(cursor_pos) {
                let nearest = self
                    .series
                    .iter()
                    .flat_map(|series| series.points.iter().map(move |point| (series, *point)))
                    .map(|(series, (x, y))| {
                        let screen = projection.to_screen(x, y);
                        let dx = screen.x - cursor_pos.x;
                        let dy = screen.y - cursor_pos.y;
                        (series, x, y, screen, dx * dx + dy * dy)
                    })
                    .min_by(|a, b| a.4.total_cmp(&b.4));

                if let Some((series, x, y, screen, _)) = nearest {
                    let v_line = Path::line(
                        Point::new(screen.x, area.top),
                        Point::new(screen.x, area.bottom),
                    );
                    let h_line = Path::line(
                        Point::new(area.left, screen.y),
                        Point::new(area.right, screen.y),
                    );
                    lines.stroke(&v_line, axis_stroke(theme));
                    lines.stroke(&h_line, axis_stroke(theme));
                    lines.fill(&Path::circle(screen, 3.5), series.color);

                    draw_tooltip(
                        &mut lines,
                        &area,
                        theme,
                        screen,
                        format!(
                            "{}: {} = {}",
                            series.name,
                            (self.x_labeler)(x),
                            format_tick(y)
                        ),
                    );
                }
            }
        }

        draw_selection(&mut lines, state, theme);
        geometries.push(lines.into_geometry());

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_the_widened_span_of_a_single_point() {
        assert_eq!(tick_values((5.0, 5.0), 4), vec![5.0, 5.25, 5.5, 5.75, 6.0]);
    }

    #[test]
    fn ticks_cover_a_normal_range_end_to_end() {
        assert_eq!(tick_values((0.0, 8.0), 4), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }
}
