//! Workshop Mobile UI Entry Point
//!
//! Progressive enhancement for the server-rendered workshop booking pages.

mod app;
mod components;
mod config;
mod context;
mod dom;
mod drawer;
mod globals;
mod models;
mod scroll;
mod store;
mod tap;
mod theme;
mod validation;

fn main() {
    console_error_panic_hook::set_once();
    app::start_when_ready();
}
