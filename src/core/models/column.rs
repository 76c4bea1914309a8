use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

impl Column {
    pub fn new(id: Id, title: String) -> Self {
        Self { id, title }
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
    }
}
