//! Drag state machine.
//!
//! Turns drag start/over/end events into board mutations. It knows nothing
//! about pointers or the DOM; `use_drag` feeds it.

use crate::core::error::Result;
use crate::core::models::{Board, Id};

/// Something that can be dragged or hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSubject {
    Column(Id),
    Task(Id),
}

impl DragSubject {
    pub fn id(&self) -> Id {
        match self {
            DragSubject::Column(id) | DragSubject::Task(id) => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(Id),
    DraggingTask(Id),
}

impl DragState {
    pub fn active(&self) -> Option<DragSubject> {
        match *self {
            DragState::Idle => None,
            DragState::DraggingColumn(id) => Some(DragSubject::Column(id)),
            DragState::DraggingTask(id) => Some(DragSubject::Task(id)),
        }
    }

    pub fn is_dragging(&self, id: Id) -> bool {
        self.active().is_some_and(|subject| subject.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn start(&mut self, subject: DragSubject) {
        if self.state != DragState::Idle {
            tracing::warn!(previous = ?self.state, "drag started before the last one ended");
        }
        self.state = match subject {
            DragSubject::Column(id) => DragState::DraggingColumn(id),
            DragSubject::Task(id) => DragState::DraggingTask(id),
        };
        tracing::debug!(?subject, "drag started");
    }

    /// Live feedback while hovering. Only task drags touch the board here;
    /// columns wait for the drop.
    ///
    /// Returns whether the board changed.
    pub fn over(&self, board: &mut Board, target: Option<DragSubject>) -> Result<bool> {
        let (DragState::DraggingTask(active), Some(target)) = (self.state, target) else {
            return Ok(false);
        };
        if active == target.id() {
            return Ok(false);
        }
        // Already sitting in the hovered column: nothing to reparent
        if let DragSubject::Column(column_id) = target {
            if board.task(active).is_some_and(|t| t.column_id == column_id) {
                return Ok(false);
            }
        }

        board.move_task(active, target.id())?;
        Ok(true)
    }

    /// Finishes the gesture. The controller is idle afterwards whatever happens.
    ///
    /// Returns whether the board changed.
    pub fn end(&mut self, board: &mut Board, target: Option<DragSubject>) -> Result<bool> {
        let state = std::mem::take(&mut self.state);
        tracing::debug!(?state, ?target, "drag ended");

        let DragState::DraggingColumn(active) = state else {
            return Ok(false);
        };
        let over_column = match target {
            Some(DragSubject::Column(id)) => id,
            // Dropping onto a task means dropping onto the column holding it
            Some(DragSubject::Task(id)) => match board.task(id) {
                Some(task) => task.column_id,
                None => return Ok(false),
            },
            None => return Ok(false),
        };
        if over_column == active {
            return Ok(false);
        }

        board.reorder_columns(active, over_column)?;
        Ok(true)
    }

    /// Drops the gesture without touching the board.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
