use iced::{widget::button, Background, Color, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x1f, 0x4e, 0x9c);
pub const DRAWER_BG: Color = Color::from_rgb8(0x0d, 0x11, 0x1a);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x16, 0x1d, 0x2b);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xe8, 0xee, 0xf8);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0x9a, 0xa6, 0xba);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xf1, 0xf5, 0xfc);

// Sequential blue scale for trip counts.
pub const TRIPS_LOW: Color = Color::from_rgb8(0xc6, 0xdb, 0xef);
pub const TRIPS_HIGH: Color = Color::from_rgb8(0x08, 0x51, 0x9c);

pub const ROLLING_COLOR: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);

// Yellow to red, cold to hot.
pub const HEAT_LOW: Color = Color::from_rgb8(0xff, 0xff, 0xcc);
pub const HEAT_HIGH: Color = Color::from_rgb8(0xbd, 0x00, 0x26);

pub const MAP_POINT: Color = Color::from_rgb8(0x38, 0xbd, 0xf8);

pub const ERROR_TEXT: Color = Color::from_rgb8(0xf8, 0x71, 0x71);

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = ACCENT;

    match status {
        button::Status::Hovered => background.a = 0.85,
        button::Status::Pressed => background.a = 0.7,
        button::Status::Disabled => background.a = 0.4,
        button::Status::Active => {}
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_ON_ACCENT,
        ..Default::default()
    }
}
