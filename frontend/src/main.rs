use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod tops_sheet;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
