use leptos::prelude::*;

use super::{KanbanColumn, TaskCard};
use crate::features::kanban::hooks::use_drag;
use crate::features::kanban::services::DragSubject;

/// Floating copy of whatever is being dragged, pinned under the pointer.
#[component]
pub fn DragOverlay() -> impl IntoView {
    let drag = use_drag();

    move || {
        drag.state().active().map(|subject| {
            let body = match subject {
                DragSubject::Column(column_id) => {
                    view! { <KanbanColumn column_id=column_id overlay=true /> }.into_any()
                }
                DragSubject::Task(task_id) => view! { <TaskCard task_id=task_id overlay=true /> }.into_any(),
            };
            view! {
                <div class="drag-overlay" style=move || drag.overlay_style()>
                    {body}
                </div>
            }
        })
    }
}
