mod app;
mod pages;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // std::time is unavailable in the browser
        .with_writer(MakeWebConsoleWriter::new());
    let subscriber = tracing_subscriber::registry().with(fmt_layer);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        web_sys::console::warn_1(&format!("Tracing disabled: {e}").into());
    }
    tracing::info!("Starting Taskdeck client");

    yew::Renderer::<App>::new().render();
}
