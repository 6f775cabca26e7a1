//! Post Entity
//!
//! Reads go through `/posts/:id` while writes use `/post/:id`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Body sent on `PUT /post/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl Entity for Post {
    type Draft = PostDraft;

    const NAME: &'static str = "post";
    const LIST_FIELD: &'static str = "posts";
    const LIST_PATH: &'static str = "/posts";
    const DETAIL_PATH: &'static str = "/posts";
    const WRITE_PATH: &'static str = "/post";
    const CREATE_PATH: &'static str = "/posts/add";
    const LIST_ROUTE: &'static str = "/posts";
    const DETAIL_ROUTE: &'static str = "/post";

    fn id(&self) -> u32 {
        self.id
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}
