use leptos::prelude::*;

use super::KanbanBoard;
use crate::core::models::Board;
use crate::core::KanbanConfig;
use crate::features::kanban::hooks::{provide_board, provide_drag};

/// Owns the board for the lifetime of the page and hands it to the components below.
#[component]
pub fn KanbanPage(config: KanbanConfig) -> impl IntoView {
    let board = provide_board(Board::with_labels(config.labels()));
    provide_drag(board, config.drag_activation_px);

    view! {
        <div class="kanban-page">
            <KanbanBoard />
        </div>
    }
}
