//! Post-mutation navigation

/// Route change requested by a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Navigation {
    pub fn push(path: impl Into<String>) -> Self {
        Self { path: path.into(), replace: false }
    }

    pub fn replace(path: impl Into<String>) -> Self {
        Self { path: path.into(), replace: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, Entity, Post, Product, Recipe, Todo};

    #[test]
    fn test_create_replaces_with_list() {
        assert_eq!(Recipe::after_create(), Navigation::replace("/recipes"));
        assert_eq!(Product::after_create(), Navigation::replace("/product"));
    }

    #[test]
    fn test_update_pushes_detail_route() {
        assert_eq!(Post::after_update(3), Navigation::push("/post/3"));
        assert_eq!(Todo::after_update(7), Navigation::push("/todos/7"));
    }

    #[test]
    fn test_comment_update_returns_to_list() {
        assert_eq!(Comment::after_update(4), Navigation::replace("/comments"));
    }

    #[test]
    fn test_delete_replaces_with_list() {
        assert_eq!(Comment::after_delete(), Navigation::replace("/comments"));
        assert_eq!(Post::after_delete(), Navigation::replace("/posts"));
        assert_eq!(Todo::after_delete(), Navigation::replace("/todos"));
    }
}
