use leptos::html::Input;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::TaskCard;
use crate::core::models::Id;
use crate::features::kanban::hooks::{use_board, use_drag};
use crate::features::kanban::services::DragSubject;

#[component]
pub fn KanbanColumn(
    column_id: Id,
    /// Rendered inside the drag overlay: static, no handlers.
    #[prop(optional)]
    overlay: bool,
) -> impl IntoView {
    let board = use_board();
    let drag = use_drag();

    let (edit_mode, set_edit_mode) = signal(false);
    let dragging = Memo::new(move |_| !overlay && drag.is_dragging(column_id));
    let title_ref: NodeRef<Input> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(input) = title_ref.get() {
            let _ = input.focus();
        }
    });

    let title = move || board.column(column_id).map(|c| c.title).unwrap_or_default();
    let task_count = move || board.task_count(column_id);
    let on_pointerdown = drag.on_pointerdown(DragSubject::Column(column_id));

    let title_view = move || {
        if !edit_mode.get() {
            return view! { <span class="column-title-text">{title}</span> }.into_any();
        }
        let initial = board
            .with_untracked(|b| b.column(column_id).map(|c| c.title.clone()))
            .unwrap_or_default();
        view! {
            <input
                node_ref=title_ref
                class="column-title-input"
                prop:value=initial
                on:input=move |ev| board.rename_column(column_id, event_target_value(&ev))
                on:blur=move |_| set_edit_mode.set(false)
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        set_edit_mode.set(false);
                    }
                }
            />
        }
        .into_any()
    };

    view! {
        <div
            class="kanban-column"
            class:placeholder=move || dragging.get()
            class:overlay=overlay
            on:pointerover=drag.on_pointerover(Some(DragSubject::Column(column_id)))
        >
            <Show when=move || !dragging.get()>
                // The header doubles as the drag handle, except while renaming
                <div
                    class="column-header"
                    on:pointerdown=move |ev| {
                        if !overlay && !edit_mode.get_untracked() {
                            on_pointerdown(ev);
                        }
                    }
                    on:click=move |_| {
                        if !overlay && !drag.suppress_click() {
                            set_edit_mode.set(true);
                        }
                    }
                >
                    <div class="column-title">
                        <span class="task-count">{task_count}</span>
                        {title_view}
                    </div>
                    <button
                        class="icon-btn column-delete"
                        title="Delete column"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if !overlay {
                                board.delete_column(column_id);
                            }
                        }
                    >"🗑"</button>
                </div>
                <div class="column-content">
                    <For
                        each=move || board.task_ids_in(column_id)
                        key=|task_id| *task_id
                        children=move |task_id| view! { <TaskCard task_id=task_id overlay=overlay /> }
                    />
                </div>
                <button
                    class="add-task-btn"
                    on:click=move |_| {
                        if !overlay {
                            board.create_task(column_id);
                        }
                    }
                >"+ Add Task"</button>
            </Show>
        </div>
    }
}
