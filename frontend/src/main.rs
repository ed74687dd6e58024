use crate::app::App;

mod api;
mod app;
mod browser;
mod components;
mod config;
mod identity;
mod logger;

fn main() {
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
