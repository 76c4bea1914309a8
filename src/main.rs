mod app;
mod core;
mod features;

use app::App;
use leptos::prelude::*;

use crate::core::KanbanConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = KanbanConfig::from_document();
    crate::core::logging::init(&config);
    tracing::info!(?config, "starting kanban board");

    mount_to_body(move || view! { <App config=config /> });
}
