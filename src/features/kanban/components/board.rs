use leptos::prelude::*;

use super::{DragOverlay, KanbanColumn};
use crate::features::kanban::hooks::{use_board, use_drag};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let board = use_board();
    let drag = use_drag();

    view! {
        // Pointer over bare board space means "no drop target"
        <div class="kanban-board" on:pointerover=drag.on_pointerover(None)>
            <div class="kanban-columns">
                <For
                    each=move || board.column_ids()
                    key=|column_id| *column_id
                    children=move |column_id| view! { <KanbanColumn column_id=column_id /> }
                />
            </div>
            <button class="add-column-btn" on:click=move |_| board.create_column()>
                "+ Add Column"
            </button>
        </div>
        <DragOverlay />
    }
}
