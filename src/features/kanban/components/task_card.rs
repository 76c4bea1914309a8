use leptos::html::Textarea;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::core::models::Id;
use crate::features::kanban::hooks::{use_board, use_drag};
use crate::features::kanban::services::DragSubject;

/// A single task. Click to edit, hover to reveal delete, press and move to drag.
#[component]
pub fn TaskCard(
    task_id: Id,
    /// Rendered inside the drag overlay: static, no handlers.
    #[prop(optional)]
    overlay: bool,
) -> impl IntoView {
    let board = use_board();
    let drag = use_drag();

    let content = move || board.task(task_id).map(|t| t.content).unwrap_or_default();

    if overlay {
        return view! {
            <div class="task-card overlay">
                <p class="task-content">{content}</p>
            </div>
        }
        .into_any();
    }

    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);
    let dragging = Memo::new(move |_| drag.is_dragging(task_id));
    let editor_ref: NodeRef<Textarea> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(editor) = editor_ref.get() {
            let _ = editor.focus();
        }
    });

    let on_pointerdown = drag.on_pointerdown(DragSubject::Task(task_id));

    let card = move || {
        if dragging.get() {
            return view! { <div class="task-card placeholder"></div> }.into_any();
        }

        if edit_mode.get() {
            // Each keystroke is already on the board, so the editor only needs the starting text
            let initial = board
                .with_untracked(|b| b.task(task_id).map(|t| t.content.clone()))
                .unwrap_or_default();
            return view! {
                <div class="task-card editing">
                    <textarea
                        node_ref=editor_ref
                        class="task-editor"
                        placeholder="Task content here"
                        prop:value=initial
                        on:input=move |ev| board.update_task_content(task_id, event_target_value(&ev))
                        on:blur=move |_| set_edit_mode.set(false)
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.shift_key() && ev.key() == "Enter" {
                                set_edit_mode.set(false);
                            }
                        }
                    ></textarea>
                </div>
            }
            .into_any();
        }

        view! {
            <div
                class="task-card"
                on:pointerdown=on_pointerdown
                on:click=move |_| {
                    if !drag.suppress_click() {
                        set_edit_mode.set(true);
                    }
                }
                on:mouseenter=move |_| set_mouse_is_over.set(true)
                on:mouseleave=move |_| set_mouse_is_over.set(false)
            >
                <p class="task-content">{content}</p>
                <Show when=move || mouse_is_over.get()>
                    <button
                        class="icon-btn task-delete"
                        title="Delete task"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            board.delete_task(task_id);
                        }
                    >"🗑"</button>
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="task-slot" on:pointerover=drag.on_pointerover(Some(DragSubject::Task(task_id)))>
            {card}
        </div>
    }
    .into_any()
}
