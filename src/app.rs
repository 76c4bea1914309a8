use leptos::prelude::*;

use crate::core::KanbanConfig;
use crate::features::kanban::KanbanPage;

#[component]
pub fn App(config: KanbanConfig) -> impl IntoView {
    view! {
        <main class="app">
            <KanbanPage config=config />
        </main>
    }
}
