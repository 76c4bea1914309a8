pub mod drag_controller;

pub use drag_controller::{DragController, DragState, DragSubject};
