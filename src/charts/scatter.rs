use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, Vector};

use super::interaction::{handle_event, hover_interaction, WheelZoom};
use super::model::{ChartConfig, GeoCoordinate, InteractionConfig, InteractionState};
use super::plot::{axis_stroke, draw_selection, draw_tooltip, PlotArea};
use crate::message::Message;

const HOVER_RADIUS_SQUARED: f32 = 64.0;

/// Share of the plot area the point cloud fills at zoom 1.
const FIT_SCALE: f32 = 0.95;

/// Pickup locations on an equirectangular projection. Longitudes are scaled
/// by the cosine of the mean latitude so distances look right at city scale.
pub struct ScatterMap {
    cache: Cache,
    points: Vec<GeoCoordinate>,
    color: Color,
    radius: f32,
    config: ChartConfig,
    interaction: InteractionConfig,
}

/// Fitted view of the point cloud, centred in the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GeoProjection {
    center: GeoCoordinate,
    lon_scale: f32,
    pixels_per_degree: f32,
    origin: Point,
}

impl GeoProjection {
    fn fit(points: &[GeoCoordinate], area: &PlotArea, zoom: f32, pan: Vector) -> Option<Self> {
        let first = points.first()?;
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lon, mut max_lon) = (first.longitude, first.longitude);
        for point in points {
            min_lat = min_lat.min(point.latitude);
            max_lat = max_lat.max(point.latitude);
            min_lon = min_lon.min(point.longitude);
            max_lon = max_lon.max(point.longitude);
        }

        let center = GeoCoordinate {
            latitude: (min_lat + max_lat) / 2.0,
            longitude: (min_lon + max_lon) / 2.0,
        };
        let lon_scale = center.latitude.to_radians().cos().abs().max(0.01);
        let width_degrees = ((max_lon - min_lon) * lon_scale).max(1e-3);
        let height_degrees = (max_lat - min_lat).max(1e-3);
        let pixels_per_degree =
            (area.width() / width_degrees).min(area.height() / height_degrees) * FIT_SCALE * zoom;

        Some(Self {
            center,
            lon_scale,
            pixels_per_degree,
            origin: Point::new(
                area.left + area.width() / 2.0 + pan.x,
                area.top + area.height() / 2.0 + pan.y,
            ),
        })
    }

    fn to_screen(&self, point: GeoCoordinate) -> Point {
        let east = (point.longitude - self.center.longitude) * self.lon_scale;
        let north = point.latitude - self.center.latitude;
        Point::new(
            self.origin.x + east * self.pixels_per_degree,
            self.origin.y - north * self.pixels_per_degree,
        )
    }
}

impl ScatterMap {
    pub fn new(points: Vec<GeoCoordinate>, color: Color) -> Self {
        Self {
            cache: Cache::new(),
            points,
            color,
            radius: 1.8,
            config: ChartConfig {
                padding: 16.0,
                grid_lines: 0,
            },
            interaction: InteractionConfig {
                max_zoom: 40.0,
                ..InteractionConfig::default()
            },
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }
}

impl canvas::Program<Message> for ScatterMap {
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
        let Some(area) = PlotArea::new(bounds.size(), self.config.padding) else {
            return geometries;
        };
        let Some(projection) =
            GeoProjection::fit(&self.points, &area, state.effective_zoom(), state.pan)
        else {
            return geometries;
        };

        let frame_border = self.cache.draw(renderer, bounds.size(), |frame| {
            let border = Path::rectangle(
                Point::new(area.left, area.top),
                iced::Size::new(area.width(), area.height()),
            );
            frame.stroke(&border, axis_stroke(theme));
        });
        geometries.push(frame_border);

        let mut dots = Frame::new(renderer, bounds.size());
        let mut fill = self.color;
        fill.a = 0.6;
        for point in &self.points {
            let screen = projection.to_screen(*point);
            if area.contains(screen) {
                dots.fill(&Path::circle(screen, self.radius), fill);
            }
        }

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if self.interaction.enable_hover && area.contains(cursor_pos) {
                let nearest = self
                    .points
                    .iter()
                    .map(|point| {
                        let screen = projection.to_screen(*point);
                        let distance = (screen.x - cursor_pos.x).powi(2)
                            + (screen.y - cursor_pos.y).powi(2);
                        (point, screen, distance)
                    })
                    .filter(|(_, _, distance)| *distance <= HOVER_RADIUS_SQUARED)
                    .min_by(|a, b| a.2.total_cmp(&b.2));

                if let Some((point, screen, _)) = nearest {
                    dots.stroke(
                        &Path::circle(screen, self.radius + 3.0),
                        Stroke::default().with_width(1.5).with_color(self.color),
                    );
                    draw_tooltip(
                        &mut dots,
                        &area,
                        theme,
                        screen,
                        format!("lat {:.4}, lon {:.4}", point.latitude, point.longitude),
                    );
                }
            }
        }

        draw_selection(&mut dots, state, theme);
        geometries.push(dots.into_geometry());

        geometries
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let inside = if state.pan_start.is_some() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Crosshair
        };
        hover_interaction(bounds, cursor, inside)
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::*;

    fn coordinate(latitude: f32, longitude: f32) -> GeoCoordinate {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn fitted_projection_keeps_every_point_inside_the_area() {
        let area = PlotArea::new(Size::new(400.0, 300.0), 16.0).expect("area");
        let points = vec![
            coordinate(40.70, -74.02),
            coordinate(40.80, -73.93),
            coordinate(40.64, -73.78),
            coordinate(40.75, -73.98),
        ];

        let projection =
            GeoProjection::fit(&points, &area, 1.0, Vector::new(0.0, 0.0)).expect("projection");

        for point in &points {
            let screen = projection.to_screen(*point);
            assert!(area.contains(screen), "{point:?} projected to {screen:?}");
        }
    }

    #[test]
    fn extreme_points_sit_clear_of_the_area_edge() {
        let area = PlotArea::new(Size::new(400.0, 300.0), 16.0).expect("area");
        let points = vec![
            coordinate(40.64, -73.78),
            coordinate(40.80, -74.02),
            coordinate(40.70, -73.93),
        ];

        let projection =
            GeoProjection::fit(&points, &area, 1.0, Vector::new(0.0, 0.0)).expect("projection");

        let southern = projection.to_screen(points[0]);
        let northern = projection.to_screen(points[1]);
        assert!(southern.y < area.bottom - 1.0, "{southern:?}");
        assert!(northern.y > area.top + 1.0, "{northern:?}");
        assert!(southern.x < area.right - 1.0, "{southern:?}");
        assert!(northern.x > area.left + 1.0, "{northern:?}");
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let area = PlotArea::new(Size::new(400.0, 300.0), 16.0).expect("area");
        let points = vec![coordinate(40.0, -74.0), coordinate(41.0, -73.0)];

        let projection =
            GeoProjection::fit(&points, &area, 1.0, Vector::new(0.0, 0.0)).expect("projection");
        let south_west = projection.to_screen(points[0]);
        let north_east = projection.to_screen(points[1]);

        assert!(north_east.x > south_west.x);
        assert!(north_east.y < south_west.y);
    }

    #[test]
    fn no_points_means_no_projection() {
        let area = PlotArea::new(Size::new(400.0, 300.0), 16.0).expect("area");

        assert!(GeoProjection::fit(&[], &area, 1.0, Vector::new(0.0, 0.0)).is_none());
    }
}
