use chrono::{Duration, NaiveDate};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Element, Length, Task, Theme};

use crate::config::Config;
use crate::data::filter::DateRange;
use crate::data::view_model::{recompute, ViewModel};
use crate::message::Message;
use crate::screens::dashboard::RangeInputs;
use crate::screens::Page;
use crate::store::{LoadState, TripStore};
use crate::theme::{ACCENT, DRAWER_BG, DRAWER_ITEM_BG, DRAWER_TEXT_ACTIVE, DRAWER_TEXT_INACTIVE};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct App {
    config: Config,
    theme: Theme,
    current_page: Page,
    sidebar_collapsed: bool,
    load_state: LoadState,
    range: Option<DateRange>,
    start_input: String,
    end_input: String,
    input_error: Option<String>,
    view_model: Option<ViewModel>,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let task = load_trips(config.clone());
        (
            Self {
                config,
                theme: Theme::Dark,
                current_page: Page::Dashboard,
                sidebar_collapsed: true,
                load_state: LoadState::Loading,
                range: None,
                start_input: String::new(),
                end_input: String::new(),
                input_error: None,
                view_model: None,
            },
            task,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(page) => {
                self.current_page = page;
                Task::none()
            }
            Message::Reload => {
                if self.load_state.is_loading() {
                    return Task::none();
                }
                log::info!("Reloading trips");
                self.load_state = LoadState::Loading;
                load_trips(self.config.clone())
            }
            Message::TripsLoaded(Ok(store)) => {
                self.load_state = LoadState::Loaded(store);
                self.reset_range();
                Task::none()
            }
            Message::TripsLoaded(Err(error)) => {
                log::error!("Failed to load trips: {error}");
                self.load_state = LoadState::Failed(error);
                self.range = None;
                self.view_model = None;
                Task::none()
            }
            Message::StartDateChanged(value) => {
                self.start_input = value;
                self.apply_inputs();
                Task::none()
            }
            Message::EndDateChanged(value) => {
                self.end_input = value;
                self.apply_inputs();
                Task::none()
            }
            Message::StepStart(days) => {
                if let Some(range) = self.range {
                    self.set_range(self.step(range.start, days), range.end);
                }
                Task::none()
            }
            Message::StepEnd(days) => {
                if let Some(range) = self.range {
                    self.set_range(range.start, self.step(range.end, days));
                }
                Task::none()
            }
            Message::ResetRange => {
                self.reset_range();
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let sidebar = self.sidebar_view();
        let content = self.content_view();

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn reset_range(&mut self) {
        if let Some(span) = self.load_state.store().map(TripStore::span) {
            self.set_range(span.start, span.end);
        }
    }

    /// Moves `date` by whole days, kept inside the loaded span.
    fn step(&self, date: NaiveDate, days: i64) -> NaiveDate {
        let moved = date
            .checked_add_signed(Duration::days(days))
            .unwrap_or(date);
        match self.load_state.store() {
            Some(store) => store.clamp(moved),
            None => moved,
        }
    }

    fn set_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start_input = start.format(DATE_FORMAT).to_string();
        self.end_input = end.format(DATE_FORMAT).to_string();
        self.input_error = None;
        self.range = Some(DateRange::new(start, end));
        self.recompute();
    }

    /// Keeps the last valid range while either input does not parse.
    fn apply_inputs(&mut self) {
        let Some(store) = self.load_state.store() else {
            return;
        };

        let parsed = parse_date_input("start", &self.start_input)
            .and_then(|start| Ok((start, parse_date_input("end", &self.end_input)?)));

        match parsed {
            Ok((start, end)) => {
                let range = DateRange::new(store.clamp(start), store.clamp(end));
                self.input_error = None;
                if self.range != Some(range) {
                    self.range = Some(range);
                    self.recompute();
                }
            }
            Err(error) => {
                log::debug!("{error}");
                self.input_error = Some(error);
            }
        }
    }

    fn recompute(&mut self) {
        let (Some(store), Some(range)) = (self.load_state.store(), self.range) else {
            self.view_model = None;
            return;
        };

        let options = self.config.recompute_options();
        self.view_model = Some(recompute(
            store.records(),
            range,
            &options,
            &mut rand::thread_rng(),
        ));
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_label = if self.sidebar_collapsed { ">>" } else { "<<" };

        let toggle = button(text(toggle_label).size(16))
            .on_press(Message::ToggleSidebar)
            .style(|_theme, status| {
                let mut background = ACCENT;
                if matches!(status, button::Status::Hovered) {
                    background.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    background.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: DRAWER_TEXT_ACTIVE,
                    ..Default::default()
                }
            });

        let pages = Page::ALL.into_iter().map(|page| self.sidebar_button(page));

        let content = column![toggle, Space::new().height(Length::Fixed(12.0))]
            .push(column(pages).spacing(6))
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(220.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, page: Page) -> Element<'a, Message> {
        let selected = self.current_page == page;
        let label = if self.sidebar_collapsed {
            page.short_label()
        } else {
            page.label()
        };

        let label_text = text(label).size(16).style(move |_| text::Style {
            color: Some(if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                label_text,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![label_text].align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(page))
            .width(Length::Fill)
            .style(move |_, status| {
                let background = if selected { ACCENT } else { DRAWER_ITEM_BG };

                let mut color = background;
                if matches!(status, button::Status::Hovered) {
                    color.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    color.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }
            })
            .padding(8)
            .into()
    }

    fn content_view<'a>(&'a self) -> Element<'a, Message> {
        match self.current_page {
            Page::Dashboard => crate::screens::dashboard::view(
                &self.load_state,
                RangeInputs {
                    start: &self.start_input,
                    end: &self.end_input,
                    error: self.input_error.as_deref(),
                },
                self.view_model.as_ref(),
            ),
            Page::Sources => {
                crate::screens::sources::view(self.config.pattern_display(), &self.load_state)
            }
        }
    }
}

fn load_trips(config: Config) -> Task<Message> {
    Task::perform(TripStore::load(config), |result| {
        Message::TripsLoaded(result.map_err(|error| error.to_string()))
    })
}

fn parse_date_input(label: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid {label} date \"{}\", expected YYYY-MM-DD", value.trim()))
}
