use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Background, Element, Length, Padding};

use crate::data::kpis::format_count;
use crate::message::Message;
use crate::store::LoadState;
use crate::theme::{accent_button_style, DRAWER_BG, DRAWER_TEXT_INACTIVE, ERROR_TEXT};

pub fn view<'a>(pattern: String, load_state: &'a LoadState) -> Element<'a, Message> {
    let status_text = match load_state {
        LoadState::Loading => "Reading trip files...".to_owned(),
        LoadState::Loaded(store) => format!(
            "Loaded {} trips from {} file(s).",
            format_count(store.len()),
            store.sources().len()
        ),
        LoadState::Failed(_) => "Load failed.".to_owned(),
    };

    let reload_button = button(text("Reload"))
        .style(accent_button_style)
        .on_press_maybe((!load_state.is_loading()).then_some(Message::Reload));

    let mut panel = column![
        text("Trip Data Sources").size(22),
        text(pattern).size(14).style(|_| text::Style {
            color: Some(DRAWER_TEXT_INACTIVE),
        }),
        Space::new().height(Length::Fixed(8.0)),
        reload_button,
        Space::new().height(Length::Fixed(8.0)),
        text(status_text).size(14),
    ]
    .spacing(12);

    if let Some(message) = load_state.error() {
        panel = panel.push(text(message).size(14).style(|_| text::Style {
            color: Some(ERROR_TEXT),
        }));
    }

    if let Some(store) = load_state.store() {
        let span = store.span();
        panel = panel.push(text(format!("Trips from {} to {}", span.start, span.end)).size(14));

        let header = container(
            row![
                text("File").size(14).width(Length::Fill),
                text("Rows").size(14),
                Space::new().width(Length::Fixed(16.0)),
            ]
            .spacing(16),
        )
        .padding(Padding::new(0.0).right(16.0));

        let rows = store.sources().iter().map(|source| {
            let name = source
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.path.display().to_string());

            container(
                row![
                    text(name).size(14).width(Length::Fill),
                    text(format_count(source.rows)).size(14),
                    Space::new().width(Length::Fixed(16.0)),
                ]
                .spacing(16),
            )
            .padding(Padding::new(0.0).right(16.0))
            .into()
        });

        let table = column![header, Space::new().height(Length::Fixed(8.0))]
            .push(column(rows).spacing(6))
            .spacing(8);

        panel = panel.push(scrollable(table).height(Length::Fixed(260.0)));
    }

    let info_panel = container(panel)
        .padding(24)
        .width(Length::Fill)
        .max_width(1100)
        .style(|_| container::background(Background::Color(DRAWER_BG)));

    container(info_panel)
        .padding(24)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}
