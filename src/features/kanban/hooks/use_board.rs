use leptos::prelude::*;

use crate::core::error::Result;
use crate::core::models::{Board, Column, Id, Task};

/// Handle to the board owned by the root component.
///
/// Every mutation goes through [`BoardHandle::apply`], which logs and drops the
/// board errors, so components never see a failure.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    board: RwSignal<Board>,
}

impl BoardHandle {
    pub fn new(board: Board) -> Self {
        Self {
            board: RwSignal::new(board),
        }
    }

    /// Runs `op` against the board. A failed op leaves the board untouched.
    pub fn apply<T>(&self, name: &'static str, op: impl FnOnce(&mut Board) -> Result<T>) -> Option<T> {
        let mut outcome = None;
        self.board.maybe_update(|board| match op(board) {
            Ok(value) => {
                outcome = Some(value);
                true
            }
            Err(e) => {
                tracing::debug!(op = name, error = %e, "board operation ignored");
                false
            }
        });
        outcome
    }

    /// Like [`BoardHandle::apply`] for ops that report whether they changed
    /// anything; subscribers are only notified when they did.
    pub fn apply_if_changed(&self, name: &'static str, op: impl FnOnce(&mut Board) -> Result<bool>) -> bool {
        let mut changed = false;
        self.board.maybe_update(|board| {
            changed = op(board).unwrap_or_else(|e| {
                tracing::debug!(op = name, error = %e, "board operation ignored");
                false
            });
            changed
        });
        changed
    }

    pub fn with<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        self.board.with(f)
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        self.board.with_untracked(f)
    }

    pub fn column_ids(&self) -> Vec<Id> {
        self.with(|b| b.columns().iter().map(|c| c.id).collect())
    }

    pub fn column(&self, id: Id) -> Option<Column> {
        self.with(|b| b.column(id).cloned())
    }

    pub fn task(&self, id: Id) -> Option<Task> {
        self.with(|b| b.task(id).cloned())
    }

    pub fn task_ids_in(&self, column_id: Id) -> Vec<Id> {
        self.with(|b| b.tasks_in(column_id).map(|t| t.id).collect())
    }

    pub fn task_count(&self, column_id: Id) -> usize {
        self.with(|b| b.task_count(column_id))
    }

    pub fn create_column(&self) {
        self.apply("create_column", |b| Ok(b.create_column()));
    }

    pub fn rename_column(&self, id: Id, title: String) {
        self.apply("rename_column", |b| b.rename_column(id, title));
    }

    pub fn delete_column(&self, id: Id) {
        self.apply("delete_column", |b| b.delete_column(id));
    }

    pub fn create_task(&self, column_id: Id) {
        self.apply("create_task", |b| b.create_task(column_id));
    }

    pub fn update_task_content(&self, id: Id, content: String) {
        self.apply("update_task_content", |b| b.update_task_content(id, content));
    }

    pub fn delete_task(&self, id: Id) {
        self.apply("delete_task", |b| b.delete_task(id));
    }
}

/// Creates the board container and makes it available to every child.
pub fn provide_board(board: Board) -> BoardHandle {
    let handle = BoardHandle::new(board);
    provide_context(handle);
    handle
}

pub fn use_board() -> BoardHandle {
    expect_context::<BoardHandle>()
}
