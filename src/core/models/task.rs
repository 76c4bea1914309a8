use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Id,
    /// Owning column. Always refers to a column present on the board.
    pub column_id: Id,
    pub content: String,
}

impl Task {
    pub fn new(id: Id, column_id: Id, content: String) -> Self {
        Self {
            id,
            column_id,
            content,
        }
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }
}
