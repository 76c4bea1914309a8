//! Pointer-driven drag and drop for the board.
//!
//! A press on a draggable only records a pending drag. The gesture starts once
//! the pointer travels past the activation distance, so short presses stay
//! clicks. Hover targets come from `pointerover` on tasks and columns; the
//! drop happens on the window-level `pointerup`.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

use super::use_board::BoardHandle;
use crate::core::models::Id;
use crate::features::kanban::services::{DragController, DragState, DragSubject};

/// Window after a drop during which clicks are swallowed.
const CLICK_SUPPRESS_MS: u32 = 100;

/// Whether a pointer offset of `(dx, dy)` has travelled strictly past `px`.
fn exceeds_activation(dx: i32, dy: i32, px: u32) -> bool {
    let (dx, dy, px) = (
        u64::from(dx.unsigned_abs()),
        u64::from(dy.unsigned_abs()),
        u64::from(px),
    );
    dx * dx + dy * dy > px * px
}

/// Press recorded on a draggable, not yet a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingDrag {
    subject: DragSubject,
    start_x: i32,
    start_y: i32,
}

/// Where the floating copy sits relative to the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct OverlayGeometry {
    grab_x: f64,
    grab_y: f64,
    width: f64,
}

#[derive(Clone, Copy)]
pub struct DragHandle {
    board: BoardHandle,
    controller: RwSignal<DragController>,
    pending: RwSignal<Option<PendingDrag>>,
    over: RwSignal<Option<DragSubject>>,
    pointer: RwSignal<(i32, i32)>,
    geometry: RwSignal<OverlayGeometry>,
    just_ended: RwSignal<bool>,
    activation_px: u32,
}

impl DragHandle {
    fn new(board: BoardHandle, activation_px: u32) -> Self {
        Self {
            board,
            controller: RwSignal::new(DragController::default()),
            pending: RwSignal::new(None),
            over: RwSignal::new(None),
            pointer: RwSignal::new((0, 0)),
            geometry: RwSignal::new(OverlayGeometry::default()),
            just_ended: RwSignal::new(false),
            activation_px,
        }
    }

    pub fn state(&self) -> DragState {
        self.controller.with(|c| c.state())
    }

    pub fn is_dragging(&self, id: Id) -> bool {
        self.controller.with(|c| c.state().is_dragging(id))
    }

    /// True right after a drop, when the trailing click must not start an edit.
    pub fn suppress_click(&self) -> bool {
        self.just_ended.get_untracked()
    }

    pub fn overlay_style(&self) -> String {
        let (x, y) = self.pointer.get();
        let geometry = self.geometry.get();
        format!(
            "left: {}px; top: {}px; width: {}px;",
            f64::from(x) - geometry.grab_x,
            f64::from(y) - geometry.grab_y,
            geometry.width
        )
    }

    /// Press handler for a drag handle.
    pub fn on_pointerdown(&self, subject: DragSubject) -> impl Fn(PointerEvent) + Copy + 'static {
        let handle = *self;
        move |ev: PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            // Editing controls and buttons keep their own pointer behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                    || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                    || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                {
                    return;
                }
                // Touch presses capture the pointer implicitly, which would hide hover targets
                if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                    let _ = el.release_pointer_capture(ev.pointer_id());
                }
            }

            if let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let rect = el.get_bounding_client_rect();
                handle.geometry.set(OverlayGeometry {
                    grab_x: f64::from(ev.client_x()) - rect.left(),
                    grab_y: f64::from(ev.client_y()) - rect.top(),
                    width: rect.width(),
                });
            }
            handle.pending.set(Some(PendingDrag {
                subject,
                start_x: ev.client_x(),
                start_y: ev.client_y(),
            }));
        }
    }

    /// Hover handler for a drop target; `None` marks empty board space.
    pub fn on_pointerover(&self, target: Option<DragSubject>) -> impl Fn(PointerEvent) + Copy + 'static {
        let handle = *self;
        move |ev: PointerEvent| {
            if handle.controller.with_untracked(|c| c.state()) == DragState::Idle {
                return;
            }
            // Innermost target wins: a task sits inside a column inside the board
            ev.stop_propagation();
            handle.hover(target);
        }
    }

    fn hover(&self, target: Option<DragSubject>) {
        if self.over.get_untracked() == target {
            return;
        }
        self.over.set(target);

        let controller = self.controller.get_untracked();
        self.board
            .apply_if_changed("drag_over", |board| controller.over(board, target));
    }

    fn pointer_moved(&self, ev: &PointerEvent) {
        let (x, y) = (ev.client_x(), ev.client_y());

        if self.controller.with_untracked(|c| c.state()) != DragState::Idle {
            self.pointer.set((x, y));
            return;
        }
        let Some(pending) = self.pending.get_untracked() else {
            return;
        };
        if exceeds_activation(
            x.saturating_sub(pending.start_x),
            y.saturating_sub(pending.start_y),
            self.activation_px,
        ) {
            self.pointer.set((x, y));
            self.over.set(None);
            self.controller.update(|c| c.start(pending.subject));
        }
    }

    fn pointer_released(&self) {
        self.pending.set(None);
        if self.controller.with_untracked(|c| c.state()) == DragState::Idle {
            return;
        }

        let target = self.over.get_untracked();
        let mut controller = self.controller.get_untracked();
        self.board
            .apply_if_changed("drag_end", |board| controller.end(board, target));
        self.controller.set(controller);
        self.over.set(None);

        self.just_ended.set(true);
        let just_ended = self.just_ended;
        Timeout::new(CLICK_SUPPRESS_MS, move || just_ended.set(false)).forget();
    }

    fn bind_window_listeners(&self) {
        let handle = *self;
        let _ = window_event_listener(ev::pointermove, move |ev| handle.pointer_moved(&ev));
        let _ = window_event_listener(ev::pointerup, move |_| handle.pointer_released());
        let _ = window_event_listener(ev::pointercancel, move |_| {
            handle.pending.set(None);
            handle.over.set(None);
            handle.controller.update(|c| c.cancel());
        });
    }
}

/// Sets up drag handling for the board and shares it with the components below.
pub fn provide_drag(board: BoardHandle, activation_px: u32) -> DragHandle {
    let handle = DragHandle::new(board, activation_px);
    handle.bind_window_listeners();
    provide_context(handle);
    handle
}

pub fn use_drag() -> DragHandle {
    expect_context::<DragHandle>()
}
