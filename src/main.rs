//! Task List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod filter;
mod models;
mod repository;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if rolling_logger::init(log::LevelFilter::Info, 200).is_err() {
        log::warn!("[APP] Logger already installed");
    }
    mount_to_body(App);
}
