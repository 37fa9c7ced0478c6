mod catalog;
mod components;
mod config;
mod layout;
mod model;
mod overlay;
mod render;
mod route;
mod services;
mod state;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("star map starting at {}", route::Route::current().to_path());
    yew::Renderer::<components::app::App>::new().render();
}
