use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Fill, Length};

use crate::data::insights;
use crate::data::view_model::ViewModel;
use crate::message::Message;
use crate::reports::base_volume_bar::BaseVolumeReport;
use crate::reports::hourly_series_line::HourlySeriesReport;
use crate::reports::hourly_trips_bar::HourlyTripsReport;
use crate::reports::monthly_trend_line::MonthlyTrendReport;
use crate::reports::pickup_map::PickupMapReport;
use crate::reports::rolling_average_line::RollingAverageReport;
use crate::reports::weekday_hour_heatmap::WeekdayHourHeatmapReport;
use crate::reports::weekday_trips_bar::WeekdayTripsReport;
use crate::store::LoadState;
use crate::theme::{accent_button_style, DRAWER_TEXT_INACTIVE, ERROR_TEXT};

pub struct RangeInputs<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub error: Option<&'a str>,
}

pub fn view<'a>(
    load_state: &'a LoadState,
    inputs: RangeInputs<'a>,
    view_model: Option<&'a ViewModel>,
) -> Element<'a, Message> {
    let mut content = column![text("Uber Trip Analysis Dashboard").size(28)].spacing(24);

    match (load_state, view_model) {
        (LoadState::Loading, _) => {
            content = content.push(text("Loading trips...").size(14));
        }
        (LoadState::Failed(message), _) => {
            content = content
                .push(text(message.as_str()).size(14).style(|_| text::Style {
                    color: Some(ERROR_TEXT),
                }))
                .push(text("Check the Sources page, then reload.").size(14));
        }
        (LoadState::Loaded(_), None) => {
            content = content.push(text("No data available yet.").size(14));
        }
        (LoadState::Loaded(_), Some(model)) => {
            content = content
                .push(range_controls(inputs, model))
                .push(kpi_tiles(model))
                .push(charts(model))
                .push(insights_block());
        }
    }

    scrollable(container(content).padding(24).width(Fill))
        .height(Fill)
        .into()
}

fn range_controls<'a>(inputs: RangeInputs<'a>, model: &ViewModel) -> Element<'a, Message> {
    let start = row![
        text("Start").size(14),
        button("-").on_press(Message::StepStart(-1)),
        text_input("YYYY-MM-DD", inputs.start)
            .on_input(Message::StartDateChanged)
            .width(Length::Fixed(130.0)),
        button("+").on_press(Message::StepStart(1)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let end = row![
        text("End").size(14),
        button("-").on_press(Message::StepEnd(-1)),
        text_input("YYYY-MM-DD", inputs.end)
            .on_input(Message::EndDateChanged)
            .width(Length::Fixed(130.0)),
        button("+").on_press(Message::StepEnd(1)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let controls = row![
        start,
        Space::new().width(Length::Fixed(24.0)),
        end,
        Space::new().width(Fill),
        button("Full range")
            .style(accent_button_style)
            .on_press(Message::ResetRange),
    ]
    .align_y(Alignment::Center);

    let showing = text(format!(
        "Showing {} to {}",
        model.range.start, model.range.end
    ))
    .size(13)
    .style(|_| text::Style {
        color: Some(DRAWER_TEXT_INACTIVE),
    });

    let mut section = column![controls, showing].spacing(8);
    if let Some(error) = inputs.error {
        section = section.push(text(error).size(13).style(|_| text::Style {
            color: Some(ERROR_TEXT),
        }));
    }

    container(section)
        .padding(16)
        .style(container::bordered_box)
        .into()
}

fn kpi_tiles<'a>(model: &ViewModel) -> Element<'a, Message> {
    let tiles = [
        ("Total Trips", model.kpis.total_trips_label()),
        ("Avg Trips / Day", model.kpis.avg_trips_per_day_label()),
        ("Peak Hour", model.kpis.peak_hour_label()),
    ]
    .into_iter()
    .map(|(label, value)| {
        container(column![text(label).size(13), text(value).size(26)].spacing(6))
            .padding(16)
            .width(Fill)
            .style(container::bordered_box)
            .into()
    });

    row(tiles).spacing(16).into()
}

fn charts<'a>(model: &ViewModel) -> Element<'a, Message> {
    let empty = model.kpis.total_trips == 0;
    let origin = model.hourly.first().map(|bucket| bucket.start);

    column![
        chart_section(
            HourlyTripsReport::title(),
            HourlyTripsReport::subtitle(),
            Canvas::new(HourlyTripsReport::chart(&model.by_hour))
                .width(Fill)
                .height(280),
            empty,
        ),
        chart_section(
            WeekdayTripsReport::title(),
            WeekdayTripsReport::subtitle(),
            Canvas::new(WeekdayTripsReport::chart(&model.by_weekday))
                .width(Fill)
                .height(280),
            empty,
        ),
        chart_section(
            MonthlyTrendReport::title(),
            MonthlyTrendReport::subtitle(),
            Canvas::new(MonthlyTrendReport::chart(&model.by_month))
                .width(Fill)
                .height(280),
            empty,
        ),
        chart_section(
            HourlySeriesReport::title(),
            HourlySeriesReport::subtitle(),
            Canvas::new(HourlySeriesReport::chart(&model.hourly))
                .width(Fill)
                .height(280),
            empty,
        ),
        chart_section(
            RollingAverageReport::title(),
            RollingAverageReport::subtitle(),
            Canvas::new(RollingAverageReport::chart(
                origin,
                &model.rolling,
                model.rolling_window
            ))
            .width(Fill)
            .height(280),
            model.rolling.iter().all(Option::is_none),
        ),
        chart_section(
            WeekdayHourHeatmapReport::title(),
            WeekdayHourHeatmapReport::subtitle(&model.weekday_hour),
            Canvas::new(WeekdayHourHeatmapReport::chart(&model.weekday_hour))
                .width(Fill)
                .height(320),
            model.weekday_hour.is_empty(),
        ),
        chart_section(
            BaseVolumeReport::title(),
            BaseVolumeReport::subtitle(),
            Canvas::new(BaseVolumeReport::chart(&model.by_base))
                .width(Fill)
                .height(280),
            empty,
        ),
        chart_section(
            PickupMapReport::title(),
            PickupMapReport::subtitle(model.map_points.len()),
            Canvas::new(PickupMapReport::chart(&model.map_points))
                .width(Fill)
                .height(420),
            model.map_points.is_empty(),
        ),
    ]
    .spacing(24)
    .into()
}

fn insights_block<'a>() -> Element<'a, Message> {
    let findings = insights::FINDINGS
        .iter()
        .map(|finding| text(format!("• {finding}")).size(14).into());
    let recommendations = insights::RECOMMENDATIONS
        .iter()
        .map(|item| text(format!("• {item}")).size(14).into());

    container(
        column![text(insights::TITLE).size(20)]
            .push(column(findings).spacing(4))
            .push(text(insights::RECOMMENDATIONS_TITLE).size(16))
            .push(column(recommendations).spacing(4))
            .spacing(12),
    )
    .padding(16)
    .width(Fill)
    .style(container::bordered_box)
    .into()
}

fn chart_section<'a>(
    title: &'static str,
    subtitle: impl Into<String>,
    chart: impl Into<Element<'a, Message>>,
    empty: bool,
) -> Element<'a, Message> {
    let mut section = column![text(title).size(18), text(subtitle.into()).size(14)].spacing(8);

    if empty {
        section = section.push(text("No trips in the selected range.").size(14));
    } else {
        section = section.push(chart);
    }

    container(section)
        .padding(16)
        .style(container::bordered_box)
        .into()
}
