//! Todo Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    pub id: u32,
    /// The todo text
    pub todo: String,
    pub completed: bool,
}

/// Body sent on `PUT /todos/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub todo: String,
    pub completed: bool,
}

impl Entity for Todo {
    type Draft = TodoDraft;

    const NAME: &'static str = "todo";
    const LIST_FIELD: &'static str = "todos";
    const LIST_PATH: &'static str = "/todos";
    const DETAIL_PATH: &'static str = "/todos";
    const WRITE_PATH: &'static str = "/todos";
    const CREATE_PATH: &'static str = "/todos/add";
    const LIST_ROUTE: &'static str = "/todos";
    const DETAIL_ROUTE: &'static str = "/todos";

    fn id(&self) -> u32 {
        self.id
    }

    fn summary(&self) -> String {
        let mark = if self.completed { "✓" } else { "○" };
        format!("{} {}", mark, self.todo)
    }
}
