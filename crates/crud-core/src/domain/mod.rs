//! Domain Layer
//!
//! Entities the pages read and write, their draft bodies, and the
//! navigation a successful mutation asks for.

mod entity;
mod navigation;
mod recipe;
mod comment;
mod post;
mod todo;
mod product;

pub use entity::{ApiError, ApiResult, Entity};
pub use navigation::Navigation;
pub use recipe::{Recipe, RecipeDraft};
pub use comment::{Comment, CommentDraft};
pub use post::{Post, PostDraft};
pub use todo::{Todo, TodoDraft};
pub use product::{Product, ProductDraft};
