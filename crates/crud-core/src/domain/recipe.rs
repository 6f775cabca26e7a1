//! Recipe Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A recipe as listed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Kept in the order the author entered them
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Body posted when adding a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Entity for Recipe {
    type Draft = RecipeDraft;

    const NAME: &'static str = "recipe";
    const LIST_FIELD: &'static str = "recipes";
    const LIST_PATH: &'static str = "/recipes";
    const DETAIL_PATH: &'static str = "/recipes";
    const WRITE_PATH: &'static str = "/recipes";
    const CREATE_PATH: &'static str = "/recipes/add";
    const LIST_ROUTE: &'static str = "/recipes";
    const DETAIL_ROUTE: &'static str = "/recipes";

    fn id(&self) -> u32 {
        self.id
    }

    fn summary(&self) -> String {
        format!("{} ({} ingredients)", self.title, self.ingredients.len())
    }
}
