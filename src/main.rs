mod app_builder;
mod app_config;
mod app_core;
mod boot;
mod export;
mod local_store;
mod word_fetch;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    app_builder::run();
}
