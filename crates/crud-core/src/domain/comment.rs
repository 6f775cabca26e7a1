//! Comment Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::Navigation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: u32,
    pub body: String,
}

/// Body sent on `PUT /comments/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub body: String,
}

impl Entity for Comment {
    type Draft = CommentDraft;

    const NAME: &'static str = "comment";
    const LIST_FIELD: &'static str = "comments";
    const LIST_PATH: &'static str = "/comments";
    const DETAIL_PATH: &'static str = "/comments";
    const WRITE_PATH: &'static str = "/comments";
    const CREATE_PATH: &'static str = "/comments/add";
    const LIST_ROUTE: &'static str = "/comments";
    const DETAIL_ROUTE: &'static str = "/comments";

    fn id(&self) -> u32 {
        self.id
    }

    fn summary(&self) -> String {
        self.body.clone()
    }

    // Saving a comment ends on the list, not back on the editor
    fn after_update(_id: u32) -> Navigation {
        Navigation::replace(Self::LIST_ROUTE)
    }
}
