//! Board state: the ordered columns and tasks plus every mutation on them.
//!
//! Operations that find nothing to act on return a [`BoardError`] and leave
//! the board exactly as it was.

use super::{Column, Id, Task};
use crate::core::error::{BoardError, Result};

/// Words used for the placeholder titles of new columns and tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub column: String,
    pub task: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            column: "Column".to_string(),
            task: "Task".to_string(),
        }
    }
}

/// What an id refers to on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Column,
    Task,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
    /// Order decides display order among tasks sharing a column.
    tasks: Vec<Task>,
    labels: Labels,
}

impl Board {
    pub fn with_labels(labels: Labels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks of one column in display order.
    pub fn tasks_in(&self, column_id: Id) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn task_count(&self, column_id: Id) -> usize {
        self.tasks_in(column_id).count()
    }

    pub fn kind_of(&self, id: Id) -> Option<ItemKind> {
        if self.column(id).is_some() {
            Some(ItemKind::Column)
        } else if self.task(id).is_some() {
            Some(ItemKind::Task)
        } else {
            None
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        self.kind_of(id).is_some()
    }

    fn fresh_id(&self) -> Id {
        Id::generate(|candidate| self.contains(candidate))
    }

    fn column_index(&self, id: Id) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.id == id)
            .ok_or(BoardError::ColumnNotFound { id })
    }

    fn task_index(&self, id: Id) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound { id })
    }

    /// Appends a column titled after the current column count.
    pub fn create_column(&mut self) -> Id {
        let id = self.fresh_id();
        let title = format!("{} {}", self.labels.column, self.columns.len() + 1);
        tracing::debug!(%id, %title, "column created");
        self.columns.push(Column::new(id, title));
        id
    }

    pub fn rename_column(&mut self, id: Id, title: String) -> Result<()> {
        let index = self.column_index(id)?;
        self.columns[index].rename(title);
        Ok(())
    }

    /// Removes the column and every task it owns. Returns how many tasks went with it.
    pub fn delete_column(&mut self, id: Id) -> Result<usize> {
        let index = self.column_index(id)?;
        self.columns.remove(index);

        let before = self.tasks.len();
        self.tasks.retain(|t| t.column_id != id);
        let removed = before - self.tasks.len();

        tracing::debug!(%id, removed_tasks = removed, "column deleted");
        Ok(removed)
    }

    /// Appends a task to `column_id`, with content numbered after the total task count.
    pub fn create_task(&mut self, column_id: Id) -> Result<Id> {
        self.column_index(column_id)?;

        let id = self.fresh_id();
        let content = format!("{} {}", self.labels.task, self.tasks.len() + 1);
        tracing::debug!(%id, column = %column_id, "task created");
        self.tasks.push(Task::new(id, column_id, content));
        Ok(id)
    }

    pub fn update_task_content(&mut self, id: Id, content: String) -> Result<()> {
        let index = self.task_index(id)?;
        self.tasks[index].update_content(content);
        Ok(())
    }

    pub fn delete_task(&mut self, id: Id) -> Result<()> {
        let index = self.task_index(id)?;
        self.tasks.remove(index);
        tracing::debug!(%id, "task deleted");
        Ok(())
    }

    /// Moves `source_id` into the slot `target_id` occupies, shifting the columns between.
    pub fn reorder_columns(&mut self, source_id: Id, target_id: Id) -> Result<()> {
        if source_id == target_id {
            return Err(BoardError::SameItem { id: source_id });
        }
        let from = self.column_index(source_id)?;
        let to = self.column_index(target_id)?;

        array_move(&mut self.columns, from, to);
        tracing::debug!(source = %source_id, target = %target_id, from, to, "columns reordered");
        Ok(())
    }

    /// Moves a task onto another task or a column.
    ///
    /// Over a task, the moved task takes that task's column and sequence slot.
    /// Over a column, it takes the column and keeps its sequence slot.
    pub fn move_task(&mut self, task_id: Id, destination: Id) -> Result<()> {
        if task_id == destination {
            return Err(BoardError::SameItem { id: task_id });
        }
        let from = self.task_index(task_id)?;

        match self.kind_of(destination) {
            Some(ItemKind::Task) => {
                let to = self.task_index(destination)?;
                let column_id = self.tasks[to].column_id;
                self.relocate_task(task_id, column_id, to)
            }
            Some(ItemKind::Column) => self.relocate_task(task_id, destination, from),
            None => Err(BoardError::UnknownTarget { id: destination }),
        }
    }

    /// Puts a task at `index` of the task sequence under `column_id` in one step.
    ///
    /// `index` is the position the task ends up at; it is clamped to the sequence.
    pub fn relocate_task(&mut self, task_id: Id, column_id: Id, index: usize) -> Result<()> {
        self.column_index(column_id)?;
        let from = self.task_index(task_id)?;
        let to = index.min(self.tasks.len() - 1);

        let mut task = self.tasks.remove(from);
        task.column_id = column_id;
        self.tasks.insert(to, task);

        tracing::trace!(task = %task_id, column = %column_id, from, to, "task relocated");
        Ok(())
    }
}

/// Removes the element at `from` and reinserts it at `to`.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn column_ids(board: &Board) -> Vec<Id> {
        board.columns().iter().map(|c| c.id).collect()
    }

    fn task_ids(board: &Board) -> Vec<Id> {
        board.tasks().iter().map(|t| t.id).collect()
    }

    fn assert_no_dangling_tasks(board: &Board) {
        for task in board.tasks() {
            assert!(
                board.column(task.column_id).is_some(),
                "task {} points at missing column {}",
                task.id,
                task.column_id
            );
        }
    }

    /// Two columns A and B; A holds tasks a1, a2 and B holds b1, b2.
    struct Populated {
        board: Board,
        a: Id,
        b: Id,
        a1: Id,
        a2: Id,
        b1: Id,
        b2: Id,
    }

    #[fixture]
    fn populated() -> Populated {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let a1 = board.create_task(a).unwrap();
        let b1 = board.create_task(b).unwrap();
        let a2 = board.create_task(a).unwrap();
        let b2 = board.create_task(b).unwrap();
        Populated {
            board,
            a,
            b,
            a1,
            a2,
            b1,
            b2,
        }
    }

    #[test]
    fn create_column_uses_running_count_for_title() {
        let mut board = Board::default();
        let first = board.create_column();
        let second = board.create_column();

        assert_ne!(first, second);
        assert_eq!(board.column(first).unwrap().title, "Column 1");
        assert_eq!(board.column(second).unwrap().title, "Column 2");
    }

    #[test]
    fn placeholder_titles_follow_count_after_deletes() {
        let mut board = Board::default();
        let first = board.create_column();
        board.create_column();
        board.delete_column(first).unwrap();

        let third = board.create_column();
        assert_eq!(board.column(third).unwrap().title, "Column 2");
    }

    #[test]
    fn custom_labels_are_used() {
        let mut board = Board::with_labels(Labels {
            column: "Lane".to_string(),
            task: "Card".to_string(),
        });
        let lane = board.create_column();
        let card = board.create_task(lane).unwrap();

        assert_eq!(board.column(lane).unwrap().title, "Lane 1");
        assert_eq!(board.task(card).unwrap().content, "Card 1");
    }

    #[test]
    fn create_then_delete_column_scenario() {
        let mut board = Board::default();
        let column = board.create_column();
        let t1 = board.create_task(column).unwrap();
        let t2 = board.create_task(column).unwrap();

        assert_eq!(
            board.tasks(),
            &[
                Task::new(t1, column, "Task 1".to_string()),
                Task::new(t2, column, "Task 2".to_string()),
            ]
        );

        assert_eq!(board.delete_column(column), Ok(2));
        assert!(board.tasks().is_empty());
        assert!(board.columns().is_empty());
    }

    #[test]
    fn create_task_rejects_unknown_column() {
        let mut board = Board::default();
        let missing = Id::generate(|_| false);

        assert_eq!(
            board.create_task(missing),
            Err(BoardError::ColumnNotFound { id: missing })
        );
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn task_numbering_counts_all_columns() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        board.create_task(a).unwrap();
        let second = board.create_task(b).unwrap();

        assert_eq!(board.task(second).unwrap().content, "Task 2");
    }

    #[test]
    fn ids_are_unique_across_columns_and_tasks() {
        let mut board = Board::default();
        let mut seen = Vec::new();
        for _ in 0..20 {
            let column = board.create_column();
            seen.push(column);
            for _ in 0..5 {
                seen.push(board.create_task(column).unwrap());
            }
        }
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), seen.len());
    }

    #[rstest]
    fn rename_column_is_idempotent(mut populated: Populated) {
        populated
            .board
            .rename_column(populated.a, "Backlog".to_string())
            .unwrap();
        let once = populated.board.clone();

        populated
            .board
            .rename_column(populated.a, "Backlog".to_string())
            .unwrap();
        assert_eq!(populated.board, once);
        assert_eq!(populated.board.column(populated.a).unwrap().title, "Backlog");
    }

    #[rstest]
    fn rename_missing_column_leaves_board_alone(mut populated: Populated) {
        let before = populated.board.clone();
        let missing = Id::generate(|_| false);

        let result = populated.board.rename_column(missing, "x".to_string());

        assert_eq!(result, Err(BoardError::ColumnNotFound { id: missing }));
        assert_eq!(populated.board, before);
    }

    #[rstest]
    fn delete_column_removes_only_its_tasks(mut populated: Populated) {
        let removed = populated.board.delete_column(populated.a).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(column_ids(&populated.board), vec![populated.b]);
        assert_eq!(task_ids(&populated.board), vec![populated.b1, populated.b2]);
        assert_no_dangling_tasks(&populated.board);
    }

    #[rstest]
    fn delete_missing_column_is_noop(mut populated: Populated) {
        populated.board.delete_column(populated.a).unwrap();
        let before = populated.board.clone();

        assert!(populated.board.delete_column(populated.a).is_err());
        assert_eq!(populated.board, before);
    }

    #[rstest]
    fn update_and_delete_task(mut populated: Populated) {
        populated
            .board
            .update_task_content(populated.a1, "write docs".to_string())
            .unwrap();
        assert_eq!(populated.board.task(populated.a1).unwrap().content, "write docs");

        populated.board.delete_task(populated.a1).unwrap();
        assert!(populated.board.task(populated.a1).is_none());
        assert_eq!(
            populated.board.delete_task(populated.a1),
            Err(BoardError::TaskNotFound { id: populated.a1 })
        );
        assert_eq!(
            populated
                .board
                .update_task_content(populated.a1, "gone".to_string()),
            Err(BoardError::TaskNotFound { id: populated.a1 })
        );
    }

    #[test]
    fn reorder_columns_moves_source_into_target_slot() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let c = board.create_column();

        board.reorder_columns(a, c).unwrap();
        assert_eq!(column_ids(&board), vec![b, c, a]);

        board.reorder_columns(a, b).unwrap();
        assert_eq!(column_ids(&board), vec![a, b, c]);
    }

    #[rstest]
    #[case(0, 2)]
    #[case(2, 0)]
    #[case(1, 3)]
    #[case(3, 1)]
    fn reorder_columns_is_a_permutation(#[case] from: usize, #[case] to: usize) {
        let mut board = Board::default();
        let ids: Vec<Id> = (0..4).map(|_| board.create_column()).collect();

        board.reorder_columns(ids[from], ids[to]).unwrap();

        let mut after = column_ids(&board);
        assert_eq!(after[to], ids[from]);
        after.sort();
        let mut before = ids.clone();
        before.sort();
        assert_eq!(after, before);
    }

    #[rstest]
    fn reorder_columns_rejects_same_or_missing(mut populated: Populated) {
        let before = populated.board.clone();
        let missing = Id::generate(|_| false);

        assert_eq!(
            populated.board.reorder_columns(populated.a, populated.a),
            Err(BoardError::SameItem { id: populated.a })
        );
        assert!(populated.board.reorder_columns(populated.a, missing).is_err());
        assert!(populated.board.reorder_columns(missing, populated.a).is_err());
        assert_eq!(populated.board, before);
    }

    #[rstest]
    fn move_task_onto_column_keeps_slot_and_content(mut populated: Populated) {
        let order_before = task_ids(&populated.board);
        let columns_before = column_ids(&populated.board);

        populated.board.move_task(populated.a1, populated.b).unwrap();

        let moved = populated.board.task(populated.a1).unwrap();
        assert_eq!(moved.column_id, populated.b);
        assert_eq!(moved.content, "Task 1");
        assert_eq!(task_ids(&populated.board), order_before);
        assert_eq!(column_ids(&populated.board), columns_before);
    }

    #[rstest]
    fn move_task_onto_task_adopts_column_and_slot(mut populated: Populated) {
        // Sequence is a1, b1, a2, b2
        populated.board.move_task(populated.a1, populated.b2).unwrap();

        assert_eq!(populated.board.task(populated.a1).unwrap().column_id, populated.b);
        assert_eq!(
            task_ids(&populated.board),
            vec![populated.b1, populated.a2, populated.b2, populated.a1]
        );
        let in_b: Vec<Id> = populated.board.tasks_in(populated.b).map(|t| t.id).collect();
        assert_eq!(in_b, vec![populated.b1, populated.b2, populated.a1]);
    }

    #[rstest]
    fn move_task_upwards_lands_before_target(mut populated: Populated) {
        populated.board.move_task(populated.b2, populated.a1).unwrap();

        assert_eq!(populated.board.task(populated.b2).unwrap().column_id, populated.a);
        let in_a: Vec<Id> = populated.board.tasks_in(populated.a).map(|t| t.id).collect();
        assert_eq!(in_a, vec![populated.b2, populated.a1, populated.a2]);
    }

    #[rstest]
    fn move_task_within_column_swaps_neighbours(mut populated: Populated) {
        populated.board.move_task(populated.a1, populated.a2).unwrap();

        let in_a: Vec<Id> = populated.board.tasks_in(populated.a).map(|t| t.id).collect();
        assert_eq!(in_a, vec![populated.a2, populated.a1]);
    }

    #[rstest]
    fn move_task_noops(mut populated: Populated) {
        let before = populated.board.clone();
        let missing = Id::generate(|_| false);

        assert_eq!(
            populated.board.move_task(populated.a1, populated.a1),
            Err(BoardError::SameItem { id: populated.a1 })
        );
        assert_eq!(
            populated.board.move_task(populated.a1, missing),
            Err(BoardError::UnknownTarget { id: missing })
        );
        assert_eq!(
            populated.board.move_task(missing, populated.b),
            Err(BoardError::TaskNotFound { id: missing })
        );
        assert_eq!(populated.board, before);
    }

    #[rstest]
    fn relocate_task_clamps_index(mut populated: Populated) {
        populated
            .board
            .relocate_task(populated.a1, populated.b, 99)
            .unwrap();

        assert_eq!(task_ids(&populated.board).last(), Some(&populated.a1));
        assert_eq!(populated.board.task_count(populated.b), 3);
        assert_eq!(populated.board.task_count(populated.a), 1);
    }

    #[rstest]
    fn relocate_task_to_front_of_sequence(mut populated: Populated) {
        // Sequence is a1, b1, a2, b2
        populated
            .board
            .relocate_task(populated.b2, populated.a, 0)
            .unwrap();

        assert_eq!(
            task_ids(&populated.board),
            vec![populated.b2, populated.a1, populated.b1, populated.a2]
        );
        assert_eq!(populated.board.task(populated.b2).unwrap().column_id, populated.a);
        let in_a: Vec<Id> = populated.board.tasks_in(populated.a).map(|t| t.id).collect();
        assert_eq!(in_a, vec![populated.b2, populated.a1, populated.a2]);
    }

    #[rstest]
    fn relocate_task_rejects_unknown_column(mut populated: Populated) {
        let before = populated.board.clone();
        let missing = Id::generate(|_| false);

        assert_eq!(
            populated.board.relocate_task(populated.a1, missing, 0),
            Err(BoardError::ColumnNotFound { id: missing })
        );
        assert_eq!(
            populated.board.relocate_task(missing, populated.a, 0),
            Err(BoardError::TaskNotFound { id: missing })
        );
        assert_eq!(populated.board, before);
    }

    #[test]
    fn drag_task_over_other_column_scenario() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let task = board.create_task(a).unwrap();

        board.move_task(task, b).unwrap();

        assert_eq!(board.task(task).unwrap().column_id, b);
        assert_eq!(column_ids(&board), vec![a, b]);
    }

    #[test]
    fn interleaved_operations_never_leave_dangling_tasks() {
        let mut board = Board::default();
        let mut columns = Vec::new();

        for round in 0..12 {
            let column = board.create_column();
            columns.push(column);
            for _ in 0..=round % 3 {
                board.create_task(column).unwrap();
            }
            if round % 4 == 3 {
                let victim = columns.remove(round % columns.len());
                board.delete_column(victim).unwrap();
            }
            if let (Some(&first), Some(&last)) = (columns.first(), columns.last()) {
                let head = board.tasks_in(first).next().map(|t| t.id);
                if let Some(task) = head {
                    board.move_task(task, last).ok();
                }
            }
            assert_no_dangling_tasks(&board);
        }
        assert_eq!(board.columns().len(), columns.len());
    }

    #[rstest]
    fn kind_of_distinguishes_items(populated: Populated) {
        assert_eq!(populated.board.kind_of(populated.a), Some(ItemKind::Column));
        assert_eq!(populated.board.kind_of(populated.b1), Some(ItemKind::Task));
        assert_eq!(populated.board.kind_of(Id::generate(|_| false)), None);
    }
}
