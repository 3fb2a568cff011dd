mod app;
mod charts;
mod config;
mod data;
mod error;
mod importing;
mod message;
mod reports;
mod screens;
mod store;
mod theme;

use app::App;
use clap::Parser;
use config::Config;

fn main() -> iced::Result {
    pretty_env_logger::init();
    let config = Config::parse();
    log::debug!("Starting with {config:?}");

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Uber Trip Analysis Dashboard")
        .theme(App::theme)
        .window_size((1280.0, 900.0))
        .run()
}
