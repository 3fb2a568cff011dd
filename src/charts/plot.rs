use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Color, Point, Size, Theme};

use super::model::InteractionState;

/// The rectangle inside a chart's padding where data is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// `None` when the padding leaves no room to draw.
    pub fn new(size: Size, padding: f32) -> Option<Self> {
        if size.width <= padding * 2.0 || size.height <= padding * 2.0 {
            return None;
        }

        Some(Self {
            left: padding,
            top: padding,
            right: size.width - padding,
            bottom: size.height - padding,
        })
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

pub fn axis_stroke(theme: &Theme) -> Stroke<'static> {
    Stroke::default()
        .with_width(1.0)
        .with_color(theme.extended_palette().background.weak.color)
}

pub fn draw_axes(frame: &mut Frame, area: &PlotArea, theme: &Theme) {
    let x_axis = Path::line(
        Point::new(area.left, area.bottom),
        Point::new(area.right, area.bottom),
    );
    let y_axis = Path::line(
        Point::new(area.left, area.bottom),
        Point::new(area.left, area.top),
    );

    frame.stroke(&x_axis, axis_stroke(theme));
    frame.stroke(&y_axis, axis_stroke(theme));
}

/// Horizontal grid lines with value labels on the y axis.
pub fn draw_value_grid(
    frame: &mut Frame,
    area: &PlotArea,
    theme: &Theme,
    grid_lines: usize,
    (min, max): (f32, f32),
) {
    let grid_lines = grid_lines.max(1);
    let text_color = theme.extended_palette().background.base.text;

    for i in 0..=grid_lines {
        let t = i as f32 / grid_lines as f32;
        let y = area.bottom - t * area.height();
        let line = Path::line(Point::new(area.left, y), Point::new(area.right, y));
        frame.stroke(&line, axis_stroke(theme));

        frame.fill_text(Text {
            content: format_tick(min + t * (max - min)),
            position: Point::new(area.left - 8.0, y - 6.0),
            color: text_color,
            size: 11.0.into(),
            align_x: iced::alignment::Horizontal::Right.into(),
            ..Text::default()
        });
    }
}

/// Whole numbers print without decimals, everything else with one.
pub fn format_tick(value: f32) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}

pub fn draw_tooltip(
    frame: &mut Frame,
    area: &PlotArea,
    theme: &Theme,
    anchor: Point,
    label: String,
) {
    let palette = theme.extended_palette();
    let tooltip_padding = 6.0;
    let tooltip_width = label.len() as f32 * 7.0 + tooltip_padding * 2.0;
    let tooltip_height = 20.0;
    let mut x = anchor.x + 10.0;
    let mut y = anchor.y - tooltip_height - 10.0;

    if x + tooltip_width > area.right {
        x = anchor.x - tooltip_width - 10.0;
    }
    if y < area.top {
        y = anchor.y + 10.0;
    }

    let rect = Path::rectangle(Point::new(x, y), Size::new(tooltip_width, tooltip_height));
    frame.fill(&rect, palette.background.strong.color);
    frame.stroke(&rect, axis_stroke(theme));
    frame.fill_text(Text {
        content: label,
        position: Point::new(x + tooltip_padding, y + 4.0),
        color: palette.background.strong.text,
        size: 12.0.into(),
        ..Text::default()
    });
}

pub fn draw_selection(frame: &mut Frame, state: &InteractionState, theme: &Theme) {
    let (Some(start), Some(end)) = (state.selection_start, state.selection_end) else {
        return;
    };

    let left = start.x.min(end.x);
    let top = start.y.min(end.y);
    let rect = Path::rectangle(
        Point::new(left, top),
        Size::new(
            (start.x.max(end.x) - left).max(1.0),
            (start.y.max(end.y) - top).max(1.0),
        ),
    );
    frame.stroke(
        &rect,
        Stroke::default()
            .with_width(1.0)
            .with_color(theme.extended_palette().primary.strong.color),
    );
}

pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

/// Show at most `max_labels` evenly spaced labels out of `count`.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_needs_room_inside_the_padding() {
        assert_eq!(PlotArea::new(Size::new(80.0, 200.0), 40.0), None);

        let area = PlotArea::new(Size::new(300.0, 200.0), 40.0).expect("room to draw");
        assert_eq!(area.width(), 220.0);
        assert_eq!(area.height(), 120.0);
        assert!(area.contains(Point::new(40.0, 160.0)));
        assert!(!area.contains(Point::new(39.0, 100.0)));
    }

    #[test]
    fn ticks_drop_decimals_for_whole_numbers() {
        assert_eq!(format_tick(12.0), "12");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(format_tick(0.0), "0");
    }

    #[test]
    fn label_stride_limits_the_label_count() {
        assert_eq!(label_stride(24, 12), 2);
        assert_eq!(label_stride(7, 12), 1);
        assert_eq!(label_stride(0, 12), 1);
        assert_eq!(label_stride(720, 8), 90);
    }

    #[test]
    fn lerp_clamps_to_the_endpoints() {
        let black = Color::from_rgb(0.0, 0.0, 0.0);
        let white = Color::from_rgb(1.0, 1.0, 1.0);

        assert_eq!(lerp_color(black, white, 2.0), white);
        assert_eq!(lerp_color(black, white, -1.0), black);
        assert_eq!(lerp_color(black, white, 0.5).r, 0.5);
    }
}
